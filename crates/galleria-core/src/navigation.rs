//! Navigation state machine.
//!
//! Decides the next committed slide index and manages transition state.
//! The pure target/display-index math lives in free functions; the stateful
//! [`SlideNavigator`] is the single component allowed to mutate
//! [`GalleryState`].

use crate::clock::{TimerRegistration, TransitionClock};
use crate::config::GalleryConfig;
use crate::direction::SwipeDirection;
use crate::events::{CommitListeners, ListenerId, SlideCommitted};
use crate::state::GalleryState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Extra delay added to the commit timer past the slide animation, absorbing
/// animation-frame jitter so the commit never lands mid-frame.
pub const TRANSITION_GRACE_MS: u64 = 50;

/// Whether a slide before the current one exists.
pub fn has_previous(current_index: usize) -> bool {
    current_index > 0
}

/// Whether a slide after the current one exists.
pub fn has_next(current_index: usize, total_slides: usize) -> bool {
    current_index + 1 < total_slides
}

/// Whether navigation is meaningful at all (needs at least two slides).
pub fn can_slide(total_slides: usize) -> bool {
    total_slides >= 2
}

/// Whether a leftward move is allowed from `current_index`.
///
/// In RTL reading order the left side holds the next slide, so the blocking
/// boundary swaps.
pub fn can_slide_left(
    current_index: usize,
    total_slides: usize,
    infinite: bool,
    is_rtl: bool,
) -> bool {
    infinite
        || if is_rtl {
            has_next(current_index, total_slides)
        } else {
            has_previous(current_index)
        }
}

/// Whether a rightward move is allowed from `current_index`.
pub fn can_slide_right(
    current_index: usize,
    total_slides: usize,
    infinite: bool,
    is_rtl: bool,
) -> bool {
    infinite
        || if is_rtl {
            has_previous(current_index)
        } else {
            has_next(current_index, total_slides)
        }
}

/// Computes the logical index a released gesture should land on.
///
/// Returns `current_index` unchanged while a transition is in flight (later
/// gestures are dropped, not queued) or when the gesture was neither a
/// sufficient swipe nor a flick. A move whose direction is blocked by the
/// matching boundary flag clamps back to `current_index`. The result may be
/// `-1` or `total_slides` to signal a wraparound, to be normalized by the
/// caller (see [`compute_target_display_index`]).
pub fn compute_slide_target(
    current_index: usize,
    swipe_direction: isize,
    is_sufficient_swipe: bool,
    is_flick: bool,
    is_transitioning: bool,
    can_slide_left: bool,
    can_slide_right: bool,
) -> isize {
    let current = current_index as isize;
    if is_transitioning {
        return current;
    }
    let blocked = (swipe_direction < 0 && !can_slide_left)
        || (swipe_direction > 0 && !can_slide_right);
    if blocked || !(is_sufficient_swipe || is_flick) {
        return current;
    }
    current + swipe_direction
}

/// Maps a logical index onto the rendered (possibly clone-padded) sequence.
///
/// With `infinite` and more than one slide, the display sequence carries one
/// clone at each end: logical `i` sits at display `i + 1`, logical `-1` at
/// display `0` (leading clone) and logical `total_slides` at
/// `total_display_slides - 1` (trailing clone). Otherwise logical and
/// display indices coincide, with out-of-range values clamped.
pub fn compute_target_display_index(
    slide_to: isize,
    total_slides: usize,
    total_display_slides: usize,
    infinite: bool,
) -> usize {
    if total_slides == 0 {
        return 0;
    }
    if infinite && total_slides > 1 {
        if slide_to < 0 {
            0
        } else if slide_to >= total_slides as isize {
            total_display_slides.saturating_sub(1)
        } else {
            (slide_to + 1) as usize
        }
    } else {
        slide_to.clamp(0, (total_slides - 1) as isize) as usize
    }
}

/// Number of rendered slides including clone padding.
pub fn total_display_slides(total_slides: usize, infinite: bool) -> usize {
    if infinite && total_slides > 1 {
        total_slides + 2
    } else {
        total_slides
    }
}

/// One entry of the rendered slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySlide {
    /// Index of the real slide this entry shows.
    pub logical_index: usize,
    /// Whether this entry is wraparound clone padding.
    pub is_clone: bool,
}

/// The rendered order of logical indices, clone padding included.
pub fn display_sequence(total_slides: usize, infinite: bool) -> Vec<DisplaySlide> {
    let mut sequence = Vec::with_capacity(total_display_slides(total_slides, infinite));
    let padded = infinite && total_slides > 1;
    if padded {
        sequence.push(DisplaySlide {
            logical_index: total_slides - 1,
            is_clone: true,
        });
    }
    for logical_index in 0..total_slides {
        sequence.push(DisplaySlide {
            logical_index,
            is_clone: false,
        });
    }
    if padded {
        sequence.push(DisplaySlide {
            logical_index: 0,
            is_clone: true,
        });
    }
    sequence
}

/// Result of handing a released gesture to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseOutcome {
    /// Index held when the gesture was released.
    pub from_index: usize,
    /// Index the gallery is heading to (equals `from_index` on a snap-back).
    pub target_index: usize,
    /// Whether a transition was started.
    pub moved: bool,
}

enum MoveKind {
    /// Cooldown-throttled: button, bullet and thumbnail style triggers.
    Throttled,
    /// Gesture releases and scheduler ticks; not throttled.
    Unthrottled,
}

struct NavigatorInner {
    state: GalleryState,
    config: GalleryConfig,
    pending_commit: Option<TimerRegistration>,
    cooldown_until_ms: Option<u64>,
}

/// Owner of [`GalleryState`] and the only component that mutates it.
///
/// A cheap-to-clone handle; all clones share the same state. Transition
/// completion rides on the [`TransitionClock`] the navigator was created
/// with, so the embedder's single `advance_to` call drives everything.
#[derive(Clone)]
pub struct SlideNavigator {
    inner: Rc<RefCell<NavigatorInner>>,
    listeners: Rc<RefCell<CommitListeners>>,
    clock: TransitionClock,
}

impl SlideNavigator {
    /// Creates a navigator over `total_slides` items starting at
    /// `start_index`. An out-of-range start index is clamped.
    pub fn new(
        config: GalleryConfig,
        total_slides: usize,
        start_index: usize,
        clock: &TransitionClock,
    ) -> Self {
        let start = clamp_start_index(start_index, total_slides);
        Self {
            inner: Rc::new(RefCell::new(NavigatorInner {
                state: GalleryState::new(total_slides, start),
                config,
                pending_commit: None,
                cooldown_until_ms: None,
            })),
            listeners: Rc::new(RefCell::new(CommitListeners::new())),
            clock: clock.clone(),
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> GalleryState {
        self.inner.borrow().state
    }

    /// This navigator's configuration.
    pub fn config(&self) -> GalleryConfig {
        self.inner.borrow().config
    }

    /// The clock transitions are scheduled on.
    pub fn clock(&self) -> TransitionClock {
        self.clock.clone()
    }

    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.inner.borrow().state.is_transitioning
    }

    pub fn has_previous(&self) -> bool {
        has_previous(self.current_index())
    }

    pub fn has_next(&self) -> bool {
        let inner = self.inner.borrow();
        has_next(inner.state.current_index, inner.state.total_slides)
    }

    pub fn can_slide(&self) -> bool {
        can_slide(self.inner.borrow().state.total_slides)
    }

    pub fn can_slide_left(&self) -> bool {
        let inner = self.inner.borrow();
        can_slide_left(
            inner.state.current_index,
            inner.state.total_slides,
            inner.config.infinite,
            inner.config.is_rtl,
        )
    }

    pub fn can_slide_right(&self) -> bool {
        let inner = self.inner.borrow();
        can_slide_right(
            inner.state.current_index,
            inner.state.total_slides,
            inner.config.infinite,
            inner.config.is_rtl,
        )
    }

    /// Registers a listener fired exactly once per committed move.
    pub fn on_slide_committed(
        &self,
        callback: impl Fn(&SlideCommitted) + 'static,
    ) -> ListenerId {
        self.listeners.borrow_mut().add(Box::new(callback))
    }

    /// Removes a previously registered commit listener.
    pub fn remove_slide_committed(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id)
    }

    /// Applies a live gesture displacement in viewport percent.
    ///
    /// Ignored while a transition is in flight; the in-flight move is
    /// authoritative. A nonzero offset records the swipe side for the
    /// two-slide transform.
    pub fn update_swipe_offset(&self, offset_percent: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_transitioning {
            return;
        }
        inner.state.current_slide_offset = offset_percent;
        if offset_percent > 0.0 {
            inner.state.last_swipe_direction = Some(SwipeDirection::Left);
        } else if offset_percent < 0.0 {
            inner.state.last_swipe_direction = Some(SwipeDirection::Right);
        }
    }

    /// Concludes a gesture with its classified outcome.
    ///
    /// `direction_sign` is the index delta of the gesture (+1 advances).
    /// A changed target starts a transition; an unchanged one snaps the
    /// offset back to zero without firing any commit event. Gesture
    /// releases are never cooldown-throttled.
    pub fn release_swipe(
        &self,
        direction_sign: isize,
        is_sufficient_swipe: bool,
        is_flick: bool,
    ) -> ReleaseOutcome {
        let (from_index, target) = {
            let inner = self.inner.borrow();
            let state = &inner.state;
            let config = &inner.config;
            let target = compute_slide_target(
                state.current_index,
                direction_sign,
                is_sufficient_swipe,
                is_flick,
                state.is_transitioning,
                can_slide_left(
                    state.current_index,
                    state.total_slides,
                    config.infinite,
                    config.is_rtl,
                ),
                can_slide_right(
                    state.current_index,
                    state.total_slides,
                    config.infinite,
                    config.is_rtl,
                ),
            );
            (state.current_index, target)
        };

        if target == from_index as isize {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.is_transitioning {
                inner.state.current_slide_offset = 0.0;
            }
            return ReleaseOutcome {
                from_index,
                target_index: from_index,
                moved: false,
            };
        }

        let moved = self.begin_transition(target, MoveKind::Unthrottled);
        ReleaseOutcome {
            from_index,
            target_index: self.normalize_index(target),
            moved,
        }
    }

    /// Starts a throttled transition to `index`.
    ///
    /// Returns whether a transition actually began; requests landing inside
    /// the cooldown window or during a transition are dropped.
    pub fn slide_to(&self, index: usize) -> bool {
        self.begin_transition(index as isize, MoveKind::Throttled)
    }

    /// Throttled move to the previous slide (wraps when infinite).
    pub fn slide_previous(&self) -> bool {
        let current = self.current_index();
        self.record_approach(SwipeDirection::Left);
        self.begin_transition(current as isize - 1, MoveKind::Throttled)
    }

    /// Throttled move to the next slide (wraps when infinite).
    pub fn slide_next(&self) -> bool {
        let current = self.current_index();
        self.record_approach(SwipeDirection::Right);
        self.begin_transition(current as isize + 1, MoveKind::Throttled)
    }

    /// Moves toward the slide lying visually to the left.
    pub fn slide_left(&self) -> bool {
        if self.config().is_rtl {
            self.slide_next()
        } else {
            self.slide_previous()
        }
    }

    /// Moves toward the slide lying visually to the right.
    pub fn slide_right(&self) -> bool {
        if self.config().is_rtl {
            self.slide_previous()
        } else {
            self.slide_next()
        }
    }

    /// Snaps straight to `index` with no animation and no commit event.
    pub fn jump_to(&self, index: usize) {
        let mut inner = self.inner.borrow_mut();
        inner.pending_commit = None;
        let total = inner.state.total_slides;
        let clamped = clamp_start_index(index, total);
        inner.state.current_index = clamped;
        inner.state.previous_index = clamped;
        inner.state.is_transitioning = false;
        inner.state.current_slide_offset = 0.0;
    }

    /// Wholesale reset for a changed item collection.
    ///
    /// Cancels any in-flight transition timer (a stale commit must never
    /// fire for indices that no longer exist) and returns to idle at the
    /// clamped start index.
    pub fn reset_items(&self, total_slides: usize, start_index: usize) {
        let mut inner = self.inner.borrow_mut();
        if inner.pending_commit.take().is_some() {
            log::debug!("items changed mid-transition, cancelling pending commit");
        }
        let start = clamp_start_index(start_index, total_slides);
        inner.state = GalleryState::new(total_slides, start);
        inner.cooldown_until_ms = None;
    }

    /// Unthrottled single-step advance used by the slideshow scheduler.
    pub(crate) fn advance_programmatic(&self, delta: isize) -> bool {
        let current = self.current_index();
        self.record_approach(if delta < 0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        });
        self.begin_transition(current as isize + delta, MoveKind::Unthrottled)
    }

    /// Records which side the upcoming move approaches from, for the
    /// two-slide transform. Only meaningful mid-move, so no-op elsewhere.
    fn record_approach(&self, side: SwipeDirection) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.total_slides == 2 && !inner.state.is_transitioning {
            inner.state.last_swipe_direction = Some(side);
        }
    }

    fn normalize_index(&self, logical: isize) -> usize {
        let inner = self.inner.borrow();
        let total = inner.state.total_slides;
        if total == 0 {
            return 0;
        }
        if inner.config.infinite {
            logical.rem_euclid(total as isize) as usize
        } else {
            logical.clamp(0, (total - 1) as isize) as usize
        }
    }

    fn begin_transition(&self, logical_to: isize, kind: MoveKind) -> bool {
        let (duration_ms, payload) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state.is_transitioning {
                log::trace!("move to {} dropped: transition in flight", logical_to);
                return false;
            }
            if inner.state.total_slides == 0 {
                return false;
            }
            if matches!(kind, MoveKind::Throttled) {
                let now = self.clock.now_ms();
                if let Some(until) = inner.cooldown_until_ms {
                    if now < until {
                        log::trace!("move to {} dropped: cooldown until {}ms", logical_to, until);
                        return false;
                    }
                }
                // Leading-edge window: even a boundary no-op consumes it.
                inner.cooldown_until_ms = Some(now + inner.config.slide_duration_ms);
            }

            let total = inner.state.total_slides as isize;
            let target = if inner.config.infinite {
                logical_to.rem_euclid(total) as usize
            } else {
                logical_to.clamp(0, total - 1) as usize
            };
            if target == inner.state.current_index {
                inner.state.current_slide_offset = 0.0;
                return false;
            }

            inner.state.previous_index = inner.state.current_index;
            inner.state.current_index = target;
            inner.state.current_slide_offset = 0.0;
            inner.state.is_transitioning = true;
            (
                inner.config.slide_duration_ms + TRANSITION_GRACE_MS,
                SlideCommitted {
                    index: target,
                    previous_index: inner.state.previous_index,
                },
            )
        };

        let weak = Rc::downgrade(&self.inner);
        let listeners = Rc::clone(&self.listeners);
        let registration = self.clock.schedule(duration_ms, move |_| {
            commit_transition(&weak, &listeners, payload);
        });
        self.inner.borrow_mut().pending_commit = Some(registration);
        true
    }
}

fn commit_transition(
    weak: &Weak<RefCell<NavigatorInner>>,
    listeners: &Rc<RefCell<CommitListeners>>,
    payload: SlideCommitted,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    {
        let mut inner = inner.borrow_mut();
        if !inner.state.is_transitioning {
            return;
        }
        inner.state.is_transitioning = false;
        inner.state.current_slide_offset = 0.0;
        inner.pending_commit = None;
    }
    listeners.borrow().dispatch(&payload);
}

fn clamp_start_index(start_index: usize, total_slides: usize) -> usize {
    if total_slides == 0 {
        return 0;
    }
    if start_index >= total_slides {
        log::warn!(
            "start index {} out of range for {} slides, clamping",
            start_index,
            total_slides
        );
        total_slides - 1
    } else {
        start_index
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
