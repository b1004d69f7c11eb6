//! Scripted drive of the gallery engine with no UI attached.
//!
//! Runs a swipe, a flick, a thumbnail fling and a stretch of autoplay on an
//! explicit timeline, logging the snapshots a rendering layer would paint.
//! Run with `RUST_LOG=info` (or `debug` for engine internals).

use galleria::{Gallery, GalleryConfig, SwipeDirection};

fn dump_snapshot(label: &str, gallery: &Gallery) {
    let snapshot = gallery.snapshot();
    log::info!(
        "[{label}] slide {}/{} transitioning={} thumbs={}px",
        snapshot.current_index,
        snapshot.slides.len(),
        snapshot.is_transitioning,
        snapshot.thumbs_translate_px,
    );
    for (index, slide) in snapshot.slides.iter().enumerate() {
        log::info!(
            "  slide {index}: offset {:+7.2}% visible={}",
            slide.offset_percent,
            slide.visible
        );
    }
}

fn main() {
    env_logger::init();

    let config = GalleryConfig::new();
    let mut gallery = Gallery::new(config, 5).with_slide_interval(3_000);
    gallery.set_viewport(800.0, 600.0);
    gallery.set_thumbnail_metrics(1_000.0, 400.0);
    gallery.on_slide_committed(|event| {
        log::info!("committed: slide {} -> {}", event.previous_index, event.index);
    });

    dump_snapshot("start", &gallery);

    // A deliberate swipe: 45% of the viewport, released while moving.
    gallery.pointer_down(700.0, 300.0);
    gallery.advance_to(120);
    gallery.pointer_move_at(120, 520.0, 304.0);
    gallery.advance_to(240);
    gallery.pointer_move_at(240, 340.0, 306.0);
    dump_snapshot("mid-gesture", &gallery);
    gallery.advance_to(300);
    if let Some(release) = gallery.pointer_up_at(300, 340.0, 306.0) {
        log::info!(
            "release: moved={} target={} duration={}ms",
            release.outcome.moved,
            release.outcome.target_index,
            release.transition.duration_ms
        );
    }
    gallery.advance_to(1_000);
    dump_snapshot("after swipe", &gallery);

    // A flick: short distance, high velocity.
    gallery.pointer_down(400.0, 300.0);
    gallery.advance_to(1_060);
    if let Some(release) = gallery.pointer_up_at(60, 330.0, 300.0) {
        log::info!(
            "flick release: flick={} moved={} duration={}ms",
            release.verdict.is_flick,
            release.outcome.moved,
            release.transition.duration_ms
        );
    }
    gallery.advance_to(2_000);
    dump_snapshot("after flick", &gallery);

    // Thumbnail fling, physical and independent of the slide index.
    let momentum = gallery.thumb_fling(1.2, SwipeDirection::Left);
    log::info!(
        "thumb fling: target {}px over {}ms",
        momentum.target_translate,
        momentum.transition_duration_ms
    );
    dump_snapshot("after thumb fling", &gallery);

    // Autoplay for three intervals, wrapping past the end.
    gallery.play();
    for tick in 1..=3u64 {
        gallery.advance_to(2_000 + tick * 3_000);
    }
    gallery.pause();
    dump_snapshot("after autoplay", &gallery);
}
