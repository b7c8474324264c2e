//! Hand-tracking input for DUCKHUNT.
//!
//! Turns per-frame hand landmark samples into a smoothed crosshair position
//! and debounced fire events. Knows nothing about ducks or scoring.

pub mod config;
pub mod landmarks;
pub mod mapper;
pub mod pinch;
pub mod pointer;

pub use config::InputConfig;
pub use landmarks::{HandLandmark, HandSample, LandmarkError};
pub use mapper::{InputFrame, InputMapper};

#[cfg(test)]
mod tests;
