//! Autoplay scheduler.
//!
//! Drives the navigator forward on a fixed interval using the shared
//! transition clock. Each tick is a programmatic move, so the user-move
//! cooldown does not apply; a tick landing mid-transition is simply dropped
//! and the slideshow keeps its cadence.

use crate::clock::{TimerRegistration, TransitionClock};
use crate::navigation::SlideNavigator;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct SlideshowInner {
    playing: bool,
    pending_tick: Option<TimerRegistration>,
}

/// Interval-driven auto-advance over a [`SlideNavigator`].
#[derive(Clone)]
pub struct Slideshow {
    inner: Rc<RefCell<SlideshowInner>>,
    navigator: SlideNavigator,
    clock: TransitionClock,
    interval_ms: u64,
}

impl Slideshow {
    /// Creates a paused slideshow ticking every `interval_ms` once played.
    pub fn new(navigator: &SlideNavigator, interval_ms: u64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SlideshowInner {
                playing: false,
                pending_tick: None,
            })),
            navigator: navigator.clone(),
            clock: navigator.clock(),
            interval_ms,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().playing
    }

    /// Starts ticking. A second call while playing is a no-op.
    pub fn play(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.playing {
                return;
            }
            inner.playing = true;
        }
        log::debug!("slideshow playing every {}ms", self.interval_ms);
        schedule_tick(
            Rc::downgrade(&self.inner),
            self.navigator.clone(),
            self.clock.clone(),
            self.interval_ms,
        );
    }

    /// Stops ticking and cancels the pending tick.
    pub fn pause(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.playing {
            log::debug!("slideshow paused");
        }
        inner.playing = false;
        inner.pending_tick = None;
    }
}

/// Schedules the next tick; reschedules itself until paused or the gallery
/// runs out of slides to advance to.
fn schedule_tick(
    weak: Weak<RefCell<SlideshowInner>>,
    navigator: SlideNavigator,
    clock: TransitionClock,
    interval_ms: u64,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let tick_weak = weak.clone();
    let tick_clock = clock.clone();
    let registration = clock.schedule(interval_ms, move |_| {
        let Some(inner) = tick_weak.upgrade() else {
            return;
        };
        if !inner.borrow().playing {
            return;
        }
        let config = navigator.config();
        if !config.infinite && !navigator.has_next() {
            // Reached the end with nowhere to wrap to.
            log::debug!("slideshow reached the last slide, pausing");
            inner.borrow_mut().playing = false;
            inner.borrow_mut().pending_tick = None;
            return;
        }
        navigator.advance_programmatic(1);
        schedule_tick(tick_weak.clone(), navigator.clone(), tick_clock.clone(), interval_ms);
    });
    inner.borrow_mut().pending_tick = Some(registration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;

    fn navigator(infinite: bool, total: usize) -> (TransitionClock, SlideNavigator) {
        let clock = TransitionClock::new();
        let config = GalleryConfig::new().with_infinite(infinite);
        let navigator = SlideNavigator::new(config, total, 0, &clock);
        (clock, navigator)
    }

    #[test]
    fn ticks_advance_one_slide_per_interval() {
        let (clock, navigator) = navigator(true, 4);
        let slideshow = Slideshow::new(&navigator, 3_000);
        slideshow.play();

        clock.advance_to(3_000);
        assert_eq!(navigator.current_index(), 1);
        clock.advance_to(6_000);
        assert_eq!(navigator.current_index(), 2);
    }

    #[test]
    fn wraps_past_the_end_when_infinite() {
        let (clock, navigator) = navigator(true, 3);
        let slideshow = Slideshow::new(&navigator, 1_000);
        slideshow.play();

        clock.advance_to(3_000);
        assert_eq!(navigator.current_index(), 0);
        assert!(slideshow.is_playing());
    }

    #[test]
    fn pauses_itself_at_the_end_when_not_infinite() {
        let (clock, navigator) = navigator(false, 3);
        let slideshow = Slideshow::new(&navigator, 1_000);
        slideshow.play();

        clock.advance_to(10_000);
        assert_eq!(navigator.current_index(), 2);
        assert!(!slideshow.is_playing());
    }

    #[test]
    fn pause_cancels_the_pending_tick() {
        let (clock, navigator) = navigator(true, 4);
        let slideshow = Slideshow::new(&navigator, 2_000);
        slideshow.play();
        slideshow.pause();

        clock.advance_to(20_000);
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn tick_during_transition_is_dropped_but_cadence_continues() {
        let clock = TransitionClock::new();
        // Transition (600 + 50ms grace) outlasts the 500ms tick interval.
        let config = GalleryConfig::new().with_slide_duration(600);
        let navigator = SlideNavigator::new(config, 5, 0, &clock);
        let slideshow = Slideshow::new(&navigator, 500);
        slideshow.play();

        clock.advance_to(500);
        assert_eq!(navigator.current_index(), 1);
        // 1000ms tick lands mid-transition (runs until 1150ms) and drops.
        clock.advance_to(1_000);
        assert_eq!(navigator.current_index(), 1);
        // Next tick after the transition completes advances again.
        clock.advance_to(1_500);
        assert_eq!(navigator.current_index(), 2);
        assert!(slideshow.is_playing());
    }
}
