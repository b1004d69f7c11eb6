use super::*;

fn sample(direction: SwipeDirection, abs_x: f32, abs_y: f32, velocity: f32) -> SwipeSample {
    SwipeSample {
        direction,
        abs_x,
        abs_y,
        velocity,
    }
}

mod offset {
    use super::*;

    #[test]
    fn horizontal_offset_is_a_signed_viewport_fraction() {
        let offset = calculate_swipe_offset(200.0, 0.0, 800.0, 600.0, SwipeDirection::Left, false);
        assert_eq!(offset, -25.0);
        let offset = calculate_swipe_offset(200.0, 0.0, 800.0, 600.0, SwipeDirection::Right, false);
        assert_eq!(offset, 25.0);
    }

    #[test]
    fn vertical_mode_reads_the_y_axis() {
        let offset = calculate_swipe_offset(10.0, 150.0, 800.0, 600.0, SwipeDirection::Up, true);
        assert_eq!(offset, -25.0);
        let offset = calculate_swipe_offset(10.0, 150.0, 800.0, 600.0, SwipeDirection::Down, true);
        assert_eq!(offset, 25.0);
    }

    #[test]
    fn offset_clamps_at_one_viewport() {
        for abs_x in [801.0, 1_600.0, 1e6] {
            let offset =
                calculate_swipe_offset(abs_x, 0.0, 800.0, 600.0, SwipeDirection::Left, false);
            assert_eq!(offset.abs(), 100.0, "abs_x {}", abs_x);
        }
    }

    #[test]
    fn zero_viewport_yields_zero() {
        assert_eq!(
            calculate_swipe_offset(50.0, 0.0, 0.0, 600.0, SwipeDirection::Left, false),
            0.0
        );
    }
}

mod direction_sign {
    use super::*;

    #[test]
    fn horizontal_ltr() {
        assert_eq!(swipe_direction_sign(SwipeDirection::Left, false, false), 1);
        assert_eq!(swipe_direction_sign(SwipeDirection::Right, false, false), -1);
    }

    #[test]
    fn horizontal_rtl_negates() {
        assert_eq!(swipe_direction_sign(SwipeDirection::Left, true, false), -1);
        assert_eq!(swipe_direction_sign(SwipeDirection::Right, true, false), 1);
    }

    #[test]
    fn vertical_ignores_rtl() {
        for is_rtl in [false, true] {
            assert_eq!(swipe_direction_sign(SwipeDirection::Up, is_rtl, true), 1);
            assert_eq!(swipe_direction_sign(SwipeDirection::Down, is_rtl, true), -1);
        }
    }

    #[test]
    fn off_axis_directions_move_nothing() {
        assert_eq!(swipe_direction_sign(SwipeDirection::Up, false, false), 0);
        assert_eq!(swipe_direction_sign(SwipeDirection::Left, false, true), 0);
    }
}

mod classification {
    use super::*;

    #[test]
    fn sufficient_swipe_is_strict() {
        assert!(!is_sufficient_swipe(30.0, 30.0));
        assert!(is_sufficient_swipe(30.1, 30.0));
        assert!(is_sufficient_swipe(-45.0, 30.0));
    }

    #[test]
    fn flick_requires_the_slide_axis() {
        // Vertical gestures never flick a horizontal gallery, no matter how
        // fast.
        for velocity in [0.0, 0.5, 5.0, 100.0] {
            for threshold in [0.0, 0.4] {
                assert!(!is_flick_swipe(velocity, threshold, SwipeDirection::Up, false));
                assert!(!is_flick_swipe(velocity, threshold, SwipeDirection::Down, false));
            }
        }
        assert!(is_flick_swipe(0.5, 0.4, SwipeDirection::Left, false));
        assert!(!is_flick_swipe(0.5, 0.4, SwipeDirection::Left, true));
        assert!(is_flick_swipe(0.5, 0.4, SwipeDirection::Up, true));
    }

    #[test]
    fn flick_threshold_is_strict() {
        assert!(!is_flick_swipe(0.4, 0.4, SwipeDirection::Left, false));
        assert!(is_flick_swipe(0.41, 0.4, SwipeDirection::Left, false));
    }
}

mod session {
    use super::*;

    fn config() -> GalleryConfig {
        GalleryConfig::new()
    }

    #[test]
    fn dead_zone_produces_no_offset() {
        let mut session = SwipeSession::new();
        let result = session.update(
            sample(SwipeDirection::Left, 5.0, 1.0, 0.1),
            800.0,
            600.0,
            &config(),
        );
        assert_eq!(result, None);
        assert_eq!(session.offset_percent(), 0.0);
    }

    #[test]
    fn first_meaningful_sample_locks_the_axis() {
        let mut session = SwipeSession::new();
        let result = session.update(
            sample(SwipeDirection::Left, 40.0, 3.0, 0.2),
            800.0,
            600.0,
            &config(),
        );
        assert_eq!(result, Some(-5.0));

        // A vertical wobble mid-gesture is ignored outright.
        let result = session.update(
            sample(SwipeDirection::Down, 42.0, 39.0, 0.2),
            800.0,
            600.0,
            &config(),
        );
        assert_eq!(result, None);
        assert_eq!(session.offset_percent(), -5.0);

        // Back on the locked axis the offset keeps accumulating.
        let result = session.update(
            sample(SwipeDirection::Left, 80.0, 3.0, 0.3),
            800.0,
            600.0,
            &config(),
        );
        assert_eq!(result, Some(-10.0));
    }

    #[test]
    fn gesture_locked_off_the_slide_axis_never_offsets() {
        let mut session = SwipeSession::new();
        // Mostly-vertical first meaningful sample on a horizontal gallery:
        // this gesture belongs to the page scroll.
        let result = session.update(
            sample(SwipeDirection::Down, 4.0, 30.0, 0.2),
            800.0,
            600.0,
            &config(),
        );
        assert_eq!(result, None);

        let result = session.update(
            sample(SwipeDirection::Down, 6.0, 90.0, 0.4),
            800.0,
            600.0,
            &config(),
        );
        assert_eq!(result, None);
        assert_eq!(session.offset_percent(), 0.0);
    }

    #[test]
    fn release_classifies_the_final_sample() {
        let mut session = SwipeSession::new();
        let config = config();
        session.update(sample(SwipeDirection::Left, 100.0, 2.0, 0.2), 800.0, 600.0, &config);
        session.update(sample(SwipeDirection::Left, 300.0, 4.0, 0.6), 800.0, 600.0, &config);

        let verdict = session.release(&config);
        assert_eq!(verdict.direction_sign, 1);
        assert!(verdict.is_sufficient_swipe, "37.5% beats the 30% threshold");
        assert!(verdict.is_flick, "0.6 px/ms beats the 0.4 threshold");
        assert_eq!(verdict.offset_percent, -37.5);
        assert_eq!(verdict.velocity, 0.6);
        assert!(verdict.triggers_move());
    }

    #[test]
    fn release_without_meaningful_samples_is_still() {
        let session = SwipeSession::new();
        let verdict = session.release(&config());
        assert_eq!(verdict.direction_sign, 0);
        assert!(!verdict.triggers_move());
    }

    #[test]
    fn short_slow_swipe_does_not_trigger() {
        let mut session = SwipeSession::new();
        let config = config();
        session.update(sample(SwipeDirection::Right, 50.0, 0.0, 0.1), 800.0, 600.0, &config);
        let verdict = session.release(&config);
        assert_eq!(verdict.direction_sign, -1);
        assert!(!verdict.is_sufficient_swipe);
        assert!(!verdict.is_flick);
        assert!(!verdict.triggers_move());
    }
}
