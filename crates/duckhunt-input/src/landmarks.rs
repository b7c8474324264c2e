//! Hand landmark storage and parsing.
//!
//! The external detector hands over one hand as a flat array of
//! 21 landmarks × (x, y, z), with x and y normalized to [0, 1].

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

/// Aim anchor: the base of the palm.
pub const PALM_BASE: usize = WRIST;

pub const LANDMARK_COUNT: usize = 21;
pub const VALUES_PER_LANDMARK: usize = 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Distance in the normalized image plane (depth ignored).
    pub fn planar_distance(&self, other: &HandLandmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected hand for one video frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandSample {
    pub landmarks: [HandLandmark; LANDMARK_COUNT],
}

impl Default for HandSample {
    fn default() -> Self {
        Self {
            landmarks: [HandLandmark::default(); LANDMARK_COUNT],
        }
    }
}

impl HandSample {
    /// Parse the first hand out of a flat `[x, y, z, x, y, z, ...]` array.
    /// Extra values (a second hand) are ignored.
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        let needed = LANDMARK_COUNT * VALUES_PER_LANDMARK;
        if data.len() < needed {
            return Err(LandmarkError::TooShort {
                expected: needed,
                actual: data.len(),
            });
        }

        let mut sample = HandSample::default();
        for (i, chunk) in data[..needed].chunks_exact(VALUES_PER_LANDMARK).enumerate() {
            if chunk.iter().any(|v| !v.is_finite()) {
                return Err(LandmarkError::NonFinite { index: i });
            }
            sample.landmarks[i] = HandLandmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
            };
        }
        Ok(sample)
    }

    pub fn palm_base(&self) -> HandLandmark {
        self.landmarks[PALM_BASE]
    }

    /// Thumb-tip to index-tip distance in normalized coordinates.
    pub fn pinch_distance(&self) -> f32 {
        self.landmarks[THUMB_TIP].planar_distance(&self.landmarks[INDEX_TIP])
    }
}

/// Reasons a landmark array is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum LandmarkError {
    TooShort { expected: usize, actual: usize },
    NonFinite { index: usize },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::TooShort { expected, actual } => {
                write!(f, "expected {expected} landmark values, got {actual}")
            }
            LandmarkError::NonFinite { index } => {
                write!(f, "landmark {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for LandmarkError {}
