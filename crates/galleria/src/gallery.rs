//! The embedder-facing gallery controller.

use crate::snapshot::GallerySnapshot;
use crate::thumbs::ThumbnailTrack;
use galleria_animation::{compute_velocity_duration, Easing, MomentumResult, TransitionSpec};
use galleria_core::{
    slide_transform, GalleryConfig, GalleryState, ListenerId, ReleaseOutcome, SlideCommitted,
    SlideNavigator, Slideshow, SwipeDirection, TransitionClock,
};
use galleria_gesture::{PointerTracker, SwipeSession, SwipeVerdict};
use std::cell::RefCell;
use std::rc::Rc;

/// Default autoplay interval in milliseconds.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 3_000;

/// Everything a gesture release produced, for embedders that want to react
/// beyond repainting the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseSummary {
    /// The navigator's decision.
    pub outcome: ReleaseOutcome,
    /// The classified gesture.
    pub verdict: SwipeVerdict,
    /// Duration and easing for the resulting visual move.
    pub transition: TransitionSpec,
}

/// One gallery instance: navigation, gestures, thumbnails and autoplay
/// composed behind a single API.
///
/// The embedder feeds in measured sizes, pointer input and clock time, and
/// reads back an immutable [`GallerySnapshot`] to paint from.
pub struct Gallery {
    config: GalleryConfig,
    clock: TransitionClock,
    navigator: SlideNavigator,
    slideshow: Slideshow,
    thumbs: Rc<RefCell<ThumbnailTrack>>,
    pointer: Option<PointerTracker>,
    session: Option<SwipeSession>,
    viewport_width: f32,
    viewport_height: f32,
    last_transition: TransitionSpec,
}

impl Gallery {
    /// Gallery over `total_slides` items starting at the first.
    pub fn new(config: GalleryConfig, total_slides: usize) -> Self {
        Self::with_start_index(config, total_slides, 0)
    }

    /// Gallery starting at `start_index` (clamped if out of range).
    pub fn with_start_index(
        config: GalleryConfig,
        total_slides: usize,
        start_index: usize,
    ) -> Self {
        let clock = TransitionClock::new();
        let navigator = SlideNavigator::new(config, total_slides, start_index, &clock);
        let slideshow = Slideshow::new(&navigator, DEFAULT_SLIDE_INTERVAL_MS);
        let thumbs = Rc::new(RefCell::new(ThumbnailTrack::new(
            total_slides,
            config.slide_vertically,
        )));

        // Timer-driven moves (slideshow ticks) bypass the facade, so the
        // thumbnail sync also rides the commit event.
        let thumbs_on_commit = Rc::clone(&thumbs);
        navigator.on_slide_committed(move |event: &SlideCommitted| {
            thumbs_on_commit.borrow_mut().sync_to_index(event.index);
        });

        Self {
            config,
            clock,
            navigator,
            slideshow,
            thumbs,
            pointer: None,
            session: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            last_transition: TransitionSpec::none(),
        }
    }

    /// Replaces the autoplay interval. Call before `play`.
    pub fn with_slide_interval(mut self, interval_ms: u64) -> Self {
        self.slideshow = Slideshow::new(&self.navigator, interval_ms);
        self
    }

    /// Updates the measured viewport size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Updates the measured thumbnail track sizes in pixels.
    pub fn set_thumbnail_metrics(&mut self, scroll_size: f32, wrapper_size: f32) {
        self.thumbs
            .borrow_mut()
            .set_metrics(scroll_size, wrapper_size);
    }

    /// Advances the engine's timeline, firing due transitions and ticks.
    pub fn advance_to(&self, now_ms: u64) {
        self.clock.advance_to(now_ms);
    }

    /// Advances the engine's timeline by a delta.
    pub fn advance(&self, delta_ms: u64) {
        self.clock.advance(delta_ms);
    }

    /// The clock transitions and autoplay ride on.
    pub fn clock(&self) -> TransitionClock {
        self.clock.clone()
    }

    pub fn state(&self) -> GalleryState {
        self.navigator.state()
    }

    pub fn config(&self) -> GalleryConfig {
        self.config
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    pub fn can_slide(&self) -> bool {
        self.navigator.can_slide()
    }

    pub fn can_slide_left(&self) -> bool {
        self.navigator.can_slide_left()
    }

    pub fn can_slide_right(&self) -> bool {
        self.navigator.can_slide_right()
    }

    /// Registers a listener fired once per committed move.
    pub fn on_slide_committed(
        &self,
        callback: impl Fn(&SlideCommitted) + 'static,
    ) -> ListenerId {
        self.navigator.on_slide_committed(callback)
    }

    pub fn remove_slide_committed(&self, id: ListenerId) -> bool {
        self.navigator.remove_slide_committed(id)
    }

    /// Starts a gesture at the pointer-down position.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = Some(PointerTracker::begin(x, y));
        self.session = Some(SwipeSession::new());
    }

    /// Feeds a pointer position stamped `time_ms` after pointer-down.
    /// Returns the new live offset when the sample moved it.
    pub fn pointer_move_at(&mut self, time_ms: u64, x: f32, y: f32) -> Option<f32> {
        let (Some(pointer), Some(session)) = (self.pointer.as_mut(), self.session.as_mut()) else {
            return None;
        };
        let sample = pointer.sample_at(time_ms, x, y);
        let offset = session.update(
            sample,
            self.viewport_width,
            self.viewport_height,
            &self.config,
        );
        if let Some(offset_percent) = offset {
            self.navigator.update_swipe_offset(offset_percent);
        }
        offset
    }

    /// Feeds a pointer position stamped with real elapsed time.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<f32> {
        let (Some(pointer), Some(session)) = (self.pointer.as_mut(), self.session.as_mut()) else {
            return None;
        };
        let sample = pointer.sample(x, y);
        let offset = session.update(
            sample,
            self.viewport_width,
            self.viewport_height,
            &self.config,
        );
        if let Some(offset_percent) = offset {
            self.navigator.update_swipe_offset(offset_percent);
        }
        offset
    }

    /// Ends the gesture at the final pointer position and acts on its
    /// classification. Returns `None` when no gesture was in progress.
    pub fn pointer_up_at(&mut self, time_ms: u64, x: f32, y: f32) -> Option<ReleaseSummary> {
        self.pointer_move_at(time_ms, x, y);
        self.finish_gesture()
    }

    /// Real-time variant of [`Gallery::pointer_up_at`].
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<ReleaseSummary> {
        self.pointer_move(x, y);
        self.finish_gesture()
    }

    fn finish_gesture(&mut self) -> Option<ReleaseSummary> {
        self.pointer = None;
        let session = self.session.take()?;
        let verdict = session.release(&self.config);
        log::trace!(
            "gesture released: offset {:.1}% velocity {:.2} sufficient={} flick={}",
            verdict.offset_percent,
            verdict.velocity,
            verdict.is_sufficient_swipe,
            verdict.is_flick
        );
        let outcome = self.navigator.release_swipe(
            verdict.direction_sign,
            verdict.is_sufficient_swipe,
            verdict.is_flick,
        );

        let duration_ms = compute_velocity_duration(
            verdict.offset_percent,
            outcome.target_index,
            outcome.from_index,
            verdict.velocity,
            self.config.slide_duration_ms,
            self.slide_dimension(),
        );
        self.last_transition = TransitionSpec::new(duration_ms, Easing::EaseOut);
        if outcome.moved {
            self.thumbs
                .borrow_mut()
                .sync_to_index(outcome.target_index);
        }

        Some(ReleaseSummary {
            outcome,
            verdict,
            transition: self.last_transition,
        })
    }

    /// Throttled move to `index`.
    pub fn slide_to(&mut self, index: usize) -> bool {
        let moved = self.navigator.slide_to(index);
        self.after_button_move(moved);
        moved
    }

    pub fn slide_previous(&mut self) -> bool {
        let moved = self.navigator.slide_previous();
        self.after_button_move(moved);
        moved
    }

    pub fn slide_next(&mut self) -> bool {
        let moved = self.navigator.slide_next();
        self.after_button_move(moved);
        moved
    }

    pub fn slide_left(&mut self) -> bool {
        let moved = self.navigator.slide_left();
        self.after_button_move(moved);
        moved
    }

    pub fn slide_right(&mut self) -> bool {
        let moved = self.navigator.slide_right();
        self.after_button_move(moved);
        moved
    }

    /// Snaps to `index` with no animation.
    pub fn jump_to(&mut self, index: usize) {
        self.navigator.jump_to(index);
        self.last_transition = TransitionSpec::none();
        self.thumbs
            .borrow_mut()
            .sync_to_index(self.navigator.current_index());
    }

    /// Swaps in a new item collection, resetting navigation wholesale.
    pub fn reset_items(&mut self, total_slides: usize, start_index: usize) {
        log::debug!("items changed: {} slides, restarting at {}", total_slides, start_index);
        self.navigator.reset_items(total_slides, start_index);
        self.pointer = None;
        self.session = None;
        self.last_transition = TransitionSpec::none();
        let mut thumbs = self.thumbs.borrow_mut();
        thumbs.set_total_slides(total_slides);
        thumbs.sync_to_index(self.navigator.current_index());
    }

    /// Starts autoplay.
    pub fn play(&self) {
        self.slideshow.play();
    }

    /// Stops autoplay.
    pub fn pause(&self) {
        self.slideshow.pause();
    }

    pub fn is_playing(&self) -> bool {
        self.slideshow.is_playing()
    }

    /// Applies a live thumbnail drag delta. Returns the amount applied.
    pub fn thumb_scroll_by(&mut self, delta: f32) -> f32 {
        self.thumbs.borrow_mut().scroll_by(delta)
    }

    /// Concludes a thumbnail drag with a fling.
    pub fn thumb_fling(&mut self, velocity: f32, direction: SwipeDirection) -> MomentumResult {
        let mut result = self.thumbs.borrow_mut().fling(
            velocity,
            direction,
            self.config.slide_duration_ms,
            self.config.momentum_multiplier,
        );
        if result.transition_duration_ms > self.config.max_momentum_duration_ms {
            result.transition_duration_ms = self.config.max_momentum_duration_ms;
            result.transition_style = TransitionSpec::new(
                result.transition_duration_ms,
                result.transition_style.easing,
            );
        }
        result
    }

    /// Immutable render snapshot of the whole engine.
    pub fn snapshot(&self) -> GallerySnapshot {
        let state = self.navigator.state();
        let slides = (0..state.total_slides)
            .map(|index| slide_transform(index, &state, &self.config))
            .collect();
        GallerySnapshot {
            current_index: state.current_index,
            previous_index: state.previous_index,
            is_transitioning: state.is_transitioning,
            slides,
            thumbs_translate_px: self.thumbs.borrow().translate(),
            transition: self.last_transition,
        }
    }

    fn after_button_move(&mut self, moved: bool) {
        if moved {
            self.last_transition =
                TransitionSpec::new(self.config.slide_duration_ms, Easing::EaseOut);
            self.thumbs
                .borrow_mut()
                .sync_to_index(self.navigator.current_index());
        }
    }

    fn slide_dimension(&self) -> f32 {
        if self.config.slide_vertically {
            self.viewport_height
        } else {
            self.viewport_width
        }
    }
}
