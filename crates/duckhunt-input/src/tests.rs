#[cfg(test)]
mod tests {
    use duckhunt_core::types::{Position, Viewport};
    use glam::Vec2;

    use crate::config::InputConfig;
    use crate::landmarks::*;
    use crate::mapper::InputMapper;
    use crate::pinch::PinchDetector;
    use crate::pointer::{project, PointerSmoother};

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 500.0)
    }

    /// A hand with its palm base at (px, py) and thumb/index tips `pinch` apart.
    fn hand(px: f32, py: f32, pinch: f32) -> HandSample {
        let mut sample = HandSample::default();
        sample.landmarks[PALM_BASE] = HandLandmark::new(px, py);
        sample.landmarks[THUMB_TIP] = HandLandmark::new(0.5, 0.5);
        sample.landmarks[INDEX_TIP] = HandLandmark::new(0.5 + pinch, 0.5);
        sample
    }

    // ---- Projection ----

    #[test]
    fn test_project_centre_maps_to_centre() {
        let p = project(&HandLandmark::new(0.5, 0.5), &viewport(), 1.5);
        assert_eq!(p, Vec2::new(500.0, 250.0));
    }

    #[test]
    fn test_project_mirrors_horizontal_axis() {
        // Hand moves toward the camera's left edge, crosshair goes right.
        let p = project(&HandLandmark::new(0.4, 0.5), &viewport(), 1.5);
        let expected_x = (0.5 + 0.1 * 1.5) * 1000.0;
        assert!((p.x - expected_x).abs() < 1e-3);
        assert!((p.y - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_project_vertical_not_mirrored() {
        let p = project(&HandLandmark::new(0.5, 0.6), &viewport(), 2.0);
        let expected_y = (0.5 + 0.1 * 2.0) * 500.0;
        assert!((p.y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn test_project_clamps_to_surface() {
        let p = project(&HandLandmark::new(0.0, 1.0), &viewport(), 3.0);
        assert_eq!(p, Vec2::new(1000.0, 500.0));
        let q = project(&HandLandmark::new(1.0, 0.0), &viewport(), 3.0);
        assert_eq!(q, Vec2::new(0.0, 0.0));
    }

    // ---- Smoothing ----

    #[test]
    fn test_smoothing_converges_without_overshoot() {
        let target = Vec2::new(800.0, 100.0);
        let mut smoother = PointerSmoother::new(Vec2::new(0.0, 400.0));
        let mut last = smoother.position().distance(target);
        for _ in 0..40 {
            let p = smoother.update(target, 0.25);
            let d = p.distance(target);
            assert!(d < last, "distance must strictly decrease");
            assert!(p.x <= target.x && p.y >= target.y, "overshot target");
            last = d;
        }
        assert!(last < 1.0);
    }

    #[test]
    fn test_smoothing_single_step() {
        let mut smoother = PointerSmoother::new(Vec2::ZERO);
        let p = smoother.update(Vec2::new(100.0, 0.0), 0.25);
        assert_eq!(p, Vec2::new(25.0, 0.0));
    }

    #[test]
    fn test_effective_smoothing_is_bounded() {
        let mut cfg = InputConfig::default();
        cfg.smoothing = 4.0;
        assert_eq!(cfg.effective_smoothing(), 1.0);
        cfg.smoothing = 0.0;
        assert_eq!(cfg.effective_smoothing(), InputConfig::default().smoothing);
        cfg.smoothing = f32::NAN;
        assert_eq!(cfg.effective_smoothing(), InputConfig::default().smoothing);
    }

    // ---- Pinch ----

    #[test]
    fn test_pinch_sequence_fires_once() {
        let mut detector = PinchDetector::new(0.09, 1000.0);
        let fired: Vec<bool> = [0.12, 0.07, 0.05, 0.11]
            .iter()
            .enumerate()
            .map(|(i, d)| detector.update(*d, i as f64 * 16.0))
            .collect();
        assert_eq!(fired, vec![false, true, false, false]);
    }

    #[test]
    fn test_sustained_pinch_never_refires() {
        let mut detector = PinchDetector::new(0.09, 100.0);
        assert!(detector.update(0.01, 0.0));
        for i in 1..200 {
            assert!(!detector.update(0.01, i as f64 * 16.0));
        }
    }

    #[test]
    fn test_release_and_repinch_after_debounce_fires_again() {
        let mut detector = PinchDetector::new(0.09, 300.0);
        assert!(detector.update(0.05, 0.0));
        assert!(!detector.update(0.2, 100.0));
        // Rising edge inside the window is swallowed.
        assert!(!detector.update(0.05, 200.0));
        assert!(!detector.update(0.2, 250.0));
        assert!(detector.update(0.05, 400.0));
    }

    #[test]
    fn test_reset_keeps_held_pinch_and_clears_debounce() {
        let mut detector = PinchDetector::new(0.09, 1000.0);
        assert!(detector.update(0.05, 0.0));
        detector.reset();
        assert!(detector.is_pinching());
        assert!(!detector.update(0.05, 10.0));
        assert!(!detector.update(0.2, 20.0));
        // Debounce history is gone, so the next edge fires straight away.
        assert!(detector.update(0.05, 30.0));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut detector = PinchDetector::new(0.09, 0.0);
        assert!(!detector.update(0.09, 0.0));
        assert!(detector.update(0.0899, 1.0));
    }

    // ---- Landmark parsing ----

    #[test]
    fn test_from_flat_reads_first_hand() {
        let mut data = vec![0.0f32; LANDMARK_COUNT * VALUES_PER_LANDMARK * 2];
        data[THUMB_TIP * 3] = 0.25;
        data[THUMB_TIP * 3 + 1] = 0.75;
        data[THUMB_TIP * 3 + 2] = -0.1;
        let sample = HandSample::from_flat(&data).unwrap();
        assert_eq!(
            sample.landmarks[THUMB_TIP],
            HandLandmark {
                x: 0.25,
                y: 0.75,
                z: -0.1
            }
        );
    }

    #[test]
    fn test_from_flat_rejects_short_input() {
        let err = HandSample::from_flat(&[0.5; 10]).unwrap_err();
        assert_eq!(
            err,
            LandmarkError::TooShort {
                expected: 63,
                actual: 10
            }
        );
        assert!(err.to_string().contains("63"));
    }

    #[test]
    fn test_from_flat_rejects_nan() {
        let mut data = vec![0.5f32; 63];
        data[INDEX_TIP * 3 + 1] = f32::NAN;
        assert_eq!(
            HandSample::from_flat(&data).unwrap_err(),
            LandmarkError::NonFinite { index: INDEX_TIP }
        );
    }

    #[test]
    fn test_pinch_distance_ignores_depth() {
        let mut sample = hand(0.5, 0.5, 0.03);
        sample.landmarks[INDEX_TIP].z = 5.0;
        assert!((sample.pinch_distance() - 0.03).abs() < 1e-6);
    }

    // ---- Mapper ----

    #[test]
    fn test_mapper_starts_centred() {
        let mapper = InputMapper::new(InputConfig::default(), &viewport());
        assert_eq!(mapper.pointer(), Position::new(500.0, 250.0));
    }

    #[test]
    fn test_mapper_holds_pointer_without_hand() {
        let vp = viewport();
        let mut mapper = InputMapper::new(InputConfig::default(), &vp);
        let moved = mapper.update(Some(&hand(0.3, 0.3, 0.5)), &vp, 0.0);
        assert!(moved.hand_visible);
        for i in 1..10 {
            let frame = mapper.update(None, &vp, i as f64 * 16.0);
            assert!(!frame.hand_visible);
            assert!(!frame.fire);
            assert_eq!(frame.pointer, moved.pointer);
        }
    }

    #[test]
    fn test_mapper_fires_on_pinch() {
        let vp = viewport();
        let mut mapper = InputMapper::new(InputConfig::default(), &vp);
        assert!(!mapper.update(Some(&hand(0.5, 0.5, 0.3)), &vp, 0.0).fire);
        let frame = mapper.update(Some(&hand(0.5, 0.5, 0.01)), &vp, 16.0);
        assert!(frame.fire);
        assert!(frame.pinching);
    }

    #[test]
    fn test_mapper_dropout_does_not_create_edge() {
        let vp = viewport();
        let mut mapper = InputMapper::new(InputConfig::default(), &vp);
        assert!(mapper.update(Some(&hand(0.5, 0.5, 0.01)), &vp, 0.0).fire);
        // Detector loses the hand for a moment while the pinch is held.
        mapper.update(None, &vp, 500.0);
        let frame = mapper.update(Some(&hand(0.5, 0.5, 0.01)), &vp, 1000.0);
        assert!(!frame.fire);
    }

    #[test]
    fn test_mapper_reset_recentres() {
        let vp = viewport();
        let mut mapper = InputMapper::new(InputConfig::default(), &vp);
        mapper.update(Some(&hand(0.1, 0.9, 0.5)), &vp, 0.0);
        assert_ne!(mapper.pointer(), vp.center());
        mapper.reset(&vp);
        assert_eq!(mapper.pointer(), vp.center());
    }

    #[test]
    fn test_config_partial_json() {
        let cfg: InputConfig = serde_json::from_str(r#"{"sensitivity": 2.0}"#).unwrap();
        assert_eq!(cfg.sensitivity, 2.0);
        assert_eq!(cfg.debounce_ms, InputConfig::default().debounce_ms);
    }
}
