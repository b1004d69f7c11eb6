//! End-to-end drives of the gallery engine: pointer input through
//! navigation, transforms, thumbnails and the clock, with no rendering
//! layer involved.

use galleria::{Easing, Gallery, GalleryConfig, SwipeDirection};
use std::cell::RefCell;
use std::rc::Rc;

fn gallery(config: GalleryConfig, total: usize) -> Gallery {
    let mut gallery = Gallery::new(config, total);
    gallery.set_viewport(800.0, 600.0);
    gallery.set_thumbnail_metrics(800.0, 400.0);
    gallery
}

#[test]
fn swipe_through_the_whole_pipeline() {
    let mut gallery = gallery(GalleryConfig::new().with_infinite(false), 5);
    let commits = Rc::new(RefCell::new(Vec::new()));
    let commit_log = Rc::clone(&commits);
    gallery.on_slide_committed(move |event| {
        commit_log.borrow_mut().push((event.previous_index, event.index));
    });

    // The embedder advances the engine clock with the same event-loop time
    // it stamps pointer samples with.
    gallery.pointer_down(700.0, 300.0);
    gallery.advance_to(100);
    gallery.pointer_move_at(100, 600.0, 302.0);
    gallery.advance_to(200);
    let offset = gallery.pointer_move_at(200, 500.0, 303.0);
    assert_eq!(offset, Some(-25.0));
    assert_eq!(gallery.state().current_slide_offset, -25.0);

    // Mid-gesture the current slide tracks the finger.
    let snapshot = gallery.snapshot();
    assert_eq!(snapshot.slides[0].offset_percent, -25.0);
    assert_eq!(snapshot.slides[1].offset_percent, 75.0);

    gallery.advance_to(400);
    let release = gallery.pointer_up_at(400, 380.0, 305.0).expect("gesture was active");
    assert!(release.verdict.is_sufficient_swipe);
    assert!(release.outcome.moved);
    assert_eq!(release.outcome.target_index, 1);
    assert!(gallery.is_transitioning());

    // Commit waits for slide duration plus the grace period.
    gallery.advance_to(400 + 450 + 49);
    assert!(gallery.is_transitioning());
    gallery.advance_to(400 + 450 + 50);
    assert!(!gallery.is_transitioning());
    assert_eq!(gallery.current_index(), 1);
    assert_eq!(commits.borrow().as_slice(), &[(0, 1)]);

    // The thumbnail track followed: one step of 100px.
    assert_eq!(gallery.snapshot().thumbs_translate_px, -100.0);
}

#[test]
fn flick_advances_despite_short_distance() {
    let mut gallery = gallery(GalleryConfig::new(), 5);
    gallery.pointer_down(400.0, 300.0);
    // 80px in 100ms: only 10% of the viewport, but 0.8 px/ms beats the
    // 0.4 flick threshold.
    gallery.pointer_move_at(50, 360.0, 300.0);
    let release = gallery.pointer_up_at(100, 320.0, 300.0).expect("gesture was active");

    assert!(!release.verdict.is_sufficient_swipe);
    assert!(release.verdict.is_flick);
    assert!(release.outcome.moved);
    assert_eq!(release.outcome.target_index, 1);
}

#[test]
fn cancelled_swipe_snaps_back_quietly() {
    let mut gallery = gallery(GalleryConfig::new(), 5);
    let commits = Rc::new(RefCell::new(0));
    let commit_count = Rc::clone(&commits);
    gallery.on_slide_committed(move |_| *commit_count.borrow_mut() += 1);

    gallery.pointer_down(400.0, 300.0);
    // Slow 100px drag with a long still hold at the end: under the 30%
    // threshold and zero release velocity.
    gallery.pointer_move_at(200, 300.0, 300.0);
    gallery.pointer_move_at(500, 300.0, 300.0);
    let release = gallery.pointer_up_at(700, 300.0, 300.0).expect("gesture was active");

    assert!(!release.outcome.moved);
    assert_eq!(gallery.current_index(), 0);
    assert_eq!(gallery.state().current_slide_offset, 0.0);
    gallery.advance_to(10_000);
    assert_eq!(*commits.borrow(), 0);
}

#[test]
fn release_duration_continues_at_the_finger_speed() {
    let mut gallery = gallery(GalleryConfig::new(), 5);
    gallery.pointer_down(700.0, 300.0);
    // A steady 1.0 px/ms drag covering 60% of the viewport; the last two
    // samples sit inside the velocity window.
    gallery.pointer_move_at(400, 300.0, 300.0);
    let release = gallery.pointer_up_at(480, 220.0, 300.0).expect("gesture was active");

    assert!(release.outcome.moved);
    // 40% of 800px remaining at 1.0 px/ms.
    assert_eq!(release.transition.duration_ms, 320);
    assert_eq!(release.transition.easing, Easing::EaseOut);
}

#[test]
fn vertical_gallery_swipes_on_the_y_axis() {
    let mut gallery = gallery(GalleryConfig::new().with_vertical(true), 4);
    gallery.pointer_down(400.0, 500.0);
    // Upward drag: 40% of the 600px viewport.
    gallery.pointer_move_at(150, 398.0, 380.0);
    let release = gallery.pointer_up_at(300, 396.0, 260.0).expect("gesture was active");

    assert!(release.verdict.is_sufficient_swipe);
    assert_eq!(release.outcome.target_index, 1, "upward swipe advances");
}

#[test]
fn rtl_swipe_retreats_where_ltr_advances() {
    let mut gallery = gallery(
        GalleryConfig::new().with_infinite(false).with_rtl(true),
        5,
    );
    gallery.jump_to(2);
    gallery.pointer_down(700.0, 300.0);
    gallery.pointer_move_at(150, 500.0, 300.0);
    let release = gallery.pointer_up_at(300, 380.0, 300.0).expect("gesture was active");

    assert!(release.outcome.moved);
    assert_eq!(release.outcome.target_index, 1, "leftward swipe retreats in RTL");
}

#[test]
fn two_slide_wrap_keeps_resting_sides_consistent() {
    let mut gallery = gallery(GalleryConfig::new(), 2);

    // Swipe forward 0 -> 1 by dragging left.
    gallery.pointer_down(700.0, 300.0);
    gallery.pointer_move_at(150, 420.0, 300.0);
    let release = gallery.pointer_up_at(300, 380.0, 300.0).expect("gesture was active");
    assert!(release.outcome.moved);
    assert_eq!(release.outcome.target_index, 1);

    gallery.advance_to(1_000);
    let snapshot = gallery.snapshot();
    assert_eq!(snapshot.current_index, 1);
    assert_eq!(snapshot.slides[1].offset_percent, 0.0);
    assert_eq!(
        snapshot.slides[0].offset_percent, -100.0,
        "slide 0 rests on the side it exited toward"
    );
}

#[test]
fn items_change_cancels_the_inflight_transition() {
    let mut gallery = gallery(GalleryConfig::new(), 8);
    let commits = Rc::new(RefCell::new(0));
    let commit_count = Rc::clone(&commits);
    gallery.on_slide_committed(move |_| *commit_count.borrow_mut() += 1);

    assert!(gallery.slide_to(5));
    gallery.reset_items(3, 0);
    gallery.advance_to(10_000);

    assert_eq!(*commits.borrow(), 0, "stale commit must not fire");
    assert_eq!(gallery.current_index(), 0);
    assert_eq!(gallery.state().total_slides, 3);
    assert_eq!(gallery.snapshot().slides.len(), 3);
}

#[test]
fn autoplay_advances_and_survives_manual_moves() {
    let mut gallery = gallery(GalleryConfig::new(), 4).with_slide_interval(2_000);
    gallery.play();
    assert!(gallery.is_playing());

    gallery.advance_to(2_000);
    assert_eq!(gallery.current_index(), 1);
    gallery.advance_to(4_000);
    assert_eq!(gallery.current_index(), 2);

    gallery.pause();
    gallery.advance_to(20_000);
    assert_eq!(gallery.current_index(), 2);
}

#[test]
fn thumbnail_fling_rides_the_release_velocity() {
    let mut gallery = gallery(GalleryConfig::new(), 5);
    let result = gallery.thumb_fling(1.0, SwipeDirection::Left);
    assert_eq!(result.target_translate, -150.0);
    assert_eq!(gallery.snapshot().thumbs_translate_px, -150.0);

    // The next committed slide re-syncs the track to the index fraction.
    gallery.slide_to(2);
    assert_eq!(gallery.snapshot().thumbs_translate_px, -200.0);
}

#[test]
fn gestures_during_a_transition_change_nothing() {
    let mut gallery = gallery(GalleryConfig::new(), 5);
    assert!(gallery.slide_next());
    assert!(gallery.is_transitioning());

    gallery.pointer_down(700.0, 300.0);
    gallery.pointer_move_at(100, 400.0, 300.0);
    assert_eq!(gallery.state().current_slide_offset, 0.0);
    let release = gallery.pointer_up_at(200, 300.0, 300.0).expect("gesture was active");
    assert!(!release.outcome.moved);

    gallery.advance_to(10_000);
    assert_eq!(gallery.current_index(), 1);
}

#[test]
fn pointer_up_without_a_gesture_is_none() {
    let mut gallery = gallery(GalleryConfig::new(), 5);
    assert!(gallery.pointer_up_at(100, 400.0, 300.0).is_none());
}
