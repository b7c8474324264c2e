#[cfg(test)]
mod tests {
    use duckhunt_core::components::WingAnimation;
    use duckhunt_core::constants::*;
    use duckhunt_core::enums::{DuckPhase, DuckStatus, Facing};
    use duckhunt_core::types::{Position, Viewport};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::difficulty::{duck_lifetime_ms, duck_speed, get_profile, hit_radius, hit_reward};
    use crate::fsm::{animate, evaluate, facing_toward, struck, DuckContext};
    use crate::waypoints::{random_waypoint, spawn_point};

    fn make_context(status: DuckStatus, position: Position, elapsed_ms: f64) -> DuckContext {
        DuckContext {
            status,
            position,
            waypoint: Position::new(900.0, 100.0),
            speed: duck_speed(1),
            elapsed_ms,
            lifetime_ms: duck_lifetime_ms(1),
            viewport: Viewport::new(1280.0, 720.0),
        }
    }

    // ---- Flying ----

    #[test]
    fn test_flying_approaches_waypoint() {
        let ctx = make_context(DuckStatus::Flying, Position::new(100.0, 600.0), 0.0);
        let before = ctx.position.distance_to(&ctx.waypoint);
        let update = evaluate(&ctx);
        let after = update.new_position.distance_to(&ctx.waypoint);
        assert!(!update.status_changed);
        assert!(after < before, "duck should close distance to waypoint");
        assert!(!update.reached_waypoint);
    }

    #[test]
    fn test_flying_approach_is_proportional() {
        let ctx = make_context(DuckStatus::Flying, Position::new(100.0, 100.0), 0.0);
        let update = evaluate(&ctx);
        let rate = duck_speed(1) * FLIGHT_RATE_PER_SPEED;
        let expected_x = 100.0 + (900.0 - 100.0) * rate;
        assert!((update.new_position.x - expected_x).abs() < 1e-3);
        assert!((update.new_position.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_flying_reports_arrival() {
        let mut ctx = make_context(DuckStatus::Flying, Position::new(905.0, 100.0), 0.0);
        ctx.waypoint = Position::new(900.0, 100.0);
        let update = evaluate(&ctx);
        assert!(update.reached_waypoint);
        assert_eq!(update.new_status, DuckStatus::Flying);
    }

    #[test]
    fn test_flying_flees_when_lifetime_expires() {
        // Round 1 lifetime is 10000 - 800.
        assert_eq!(duck_lifetime_ms(1), 9200.0);
        let ctx = make_context(DuckStatus::Flying, Position::new(400.0, 200.0), 9200.0);
        let update = evaluate(&ctx);
        assert!(update.status_changed);
        assert!(update.escaped);
        assert_eq!(update.new_status, DuckStatus::Fleeing);
    }

    #[test]
    fn test_flying_just_before_lifetime_stays() {
        let ctx = make_context(DuckStatus::Flying, Position::new(400.0, 200.0), 9199.0);
        let update = evaluate(&ctx);
        assert!(!update.escaped);
        assert_eq!(update.new_status, DuckStatus::Flying);
    }

    // ---- Hit ----

    #[test]
    fn test_hit_pauses_then_falls() {
        let mut ctx = make_context(struck(), Position::new(400.0, 200.0), 0.0);
        for _ in 0..HIT_PAUSE_TICKS - 1 {
            let update = evaluate(&ctx);
            assert_eq!(update.new_status.kind(), DuckPhase::Hit);
            assert_eq!(update.new_position, ctx.position, "hit duck must not move");
            ctx.status = update.new_status;
        }
        let update = evaluate(&ctx);
        assert!(update.status_changed);
        assert_eq!(update.new_status, DuckStatus::Falling { fall_velocity: 0.0 });
    }

    #[test]
    fn test_hit_duck_does_not_flee() {
        // Even long past its lifetime, a hit duck is no longer counted as escaping.
        let ctx = make_context(struck(), Position::new(400.0, 200.0), 60_000.0);
        let update = evaluate(&ctx);
        assert!(!update.escaped);
        assert_eq!(update.new_status.kind(), DuckPhase::Hit);
    }

    // ---- Falling ----

    #[test]
    fn test_falling_accelerates_downward() {
        let ctx = make_context(
            DuckStatus::Falling { fall_velocity: 0.0 },
            Position::new(400.0, 200.0),
            0.0,
        );
        let first = evaluate(&ctx);
        let second = evaluate(&DuckContext {
            status: first.new_status,
            position: first.new_position,
            ..ctx
        });
        let step1 = first.new_position.y - 200.0;
        let step2 = second.new_position.y - first.new_position.y;
        assert!(step1 > 0.0);
        assert!(step2 > step1, "fall should accelerate");
        assert_eq!(second.new_position.x, 400.0);
    }

    #[test]
    fn test_falling_removed_below_screen() {
        let ctx = make_context(
            DuckStatus::Falling { fall_velocity: 20.0 },
            Position::new(400.0, 720.0 + DUCK_DRAW_SIZE * 0.5),
            0.0,
        );
        assert!(evaluate(&ctx).offscreen);
    }

    // ---- Fleeing ----

    #[test]
    fn test_fleeing_moves_up_until_offscreen() {
        let mut ctx = make_context(DuckStatus::Fleeing, Position::new(400.0, 300.0), 0.0);
        let mut ticks = 0;
        loop {
            let update = evaluate(&ctx);
            assert_eq!(update.new_status, DuckStatus::Fleeing);
            assert!(update.new_position.y < ctx.position.y);
            ctx.position = update.new_position;
            ticks += 1;
            if update.offscreen {
                break;
            }
            assert!(ticks < 1000, "fleeing duck never left the screen");
        }
        assert!(ctx.position.y < 0.0);
    }

    // ---- Animation ----

    #[test]
    fn test_wing_flap_cycles() {
        let mut anim = WingAnimation::default();
        let mut frames = Vec::new();
        for _ in 0..FLAP_INTERVAL_TICKS * 4 {
            anim = animate(anim, DuckPhase::Flying);
            frames.push(anim.frame);
        }
        assert_eq!(frames[(FLAP_INTERVAL_TICKS - 1) as usize], 1);
        assert!(frames.iter().all(|f| *f < FLAP_FRAME_COUNT));
        assert_eq!(*frames.last().unwrap(), 4 % FLAP_FRAME_COUNT);
    }

    #[test]
    fn test_hit_and_falling_hold_frame() {
        let anim = WingAnimation {
            frame: 2,
            facing: Facing::Left,
            ticks: FLAP_INTERVAL_TICKS - 1,
        };
        assert_eq!(animate(anim, DuckPhase::Hit).frame, 2);
        assert_eq!(animate(anim, DuckPhase::Falling).ticks, anim.ticks);
        assert_eq!(animate(anim, DuckPhase::Fleeing).frame, 0);
    }

    #[test]
    fn test_facing_toward() {
        let a = Position::new(100.0, 100.0);
        let b = Position::new(200.0, 50.0);
        assert_eq!(facing_toward(&a, &b, Facing::Left), Facing::Right);
        assert_eq!(facing_toward(&b, &a, Facing::Right), Facing::Left);
        let above = Position::new(100.0, 10.0);
        assert_eq!(facing_toward(&a, &above, Facing::Left), Facing::Left);
    }

    // ---- Difficulty ----

    #[test]
    fn test_lifetime_has_floor() {
        assert_eq!(duck_lifetime_ms(0), DUCK_BASE_LIFETIME_MS);
        assert_eq!(duck_lifetime_ms(5), 6000.0);
        assert_eq!(duck_lifetime_ms(20), DUCK_MIN_LIFETIME_MS);
    }

    #[test]
    fn test_speed_grows_with_round() {
        assert!(get_profile(3).duck_speed > get_profile(1).duck_speed);
        assert_eq!(get_profile(1).lifetime_ms, 9200.0);
    }

    #[test]
    fn test_reward_matches_round() {
        assert_eq!(hit_reward(1), 600);
        assert_eq!(hit_reward(4), 900);
    }

    #[test]
    fn test_hit_radius_scales_with_width() {
        let r = hit_radius(&Viewport::new(1000.0, 500.0));
        assert!((r - 1000.0 * HIT_RADIUS_FRACTION).abs() < 1e-4);
    }

    // ---- Waypoints ----

    #[test]
    fn test_waypoints_stay_in_upper_half() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let vp = Viewport::new(1280.0, 720.0);
        for _ in 0..500 {
            let wp = random_waypoint(&mut rng, &vp);
            assert!(wp.y <= vp.height * WAYPOINT_HEIGHT_FRACTION);
            assert!(wp.y >= 0.0);
            assert!(wp.x >= 0.0 && wp.x <= vp.width);
        }
    }

    #[test]
    fn test_spawn_point_on_bottom_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let vp = Viewport::new(640.0, 480.0);
        let p = spawn_point(&mut rng, &vp);
        assert_eq!(p.y, 480.0);
        assert!(p.x > 0.0 && p.x < 640.0);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let vp = Viewport::new(10.0, 10.0);
        let wp = random_waypoint(&mut rng, &vp);
        assert!(wp.x.is_finite() && wp.y.is_finite());
    }
}
