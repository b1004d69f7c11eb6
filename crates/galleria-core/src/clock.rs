//! One-shot deadline scheduling on an explicit millisecond timeline.
//!
//! The engine has exactly one kind of time-based behavior: deadlines (the
//! transition-complete commit, slideshow ticks). `TransitionClock` models
//! them without touching wall-clock time. The embedder drives the timeline
//! by calling [`TransitionClock::advance_to`] from its event loop or frame
//! callback; tests drive it the same way, which keeps every timing test
//! deterministic.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct ScheduledTimer {
    deadline_ms: u64,
    callback: Box<dyn FnOnce(u64)>,
}

struct ClockInner {
    now_ms: u64,
    next_id: u64,
    timers: FxHashMap<u64, ScheduledTimer>,
}

/// Shared handle to a deadline scheduler.
///
/// Cheap to clone; all clones observe the same timeline.
#[derive(Clone)]
pub struct TransitionClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl TransitionClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ClockInner {
                now_ms: 0,
                next_id: 1,
                timers: FxHashMap::default(),
            })),
        }
    }

    /// Current position on the clock's timeline.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Schedules `callback` to fire once `delay_ms` from now.
    ///
    /// The callback receives its deadline time. Dropping the returned
    /// registration cancels the timer; a fired timer's registration becomes
    /// inert.
    pub fn schedule(
        &self,
        delay_ms: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> TimerRegistration {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let deadline_ms = inner.now_ms.saturating_add(delay_ms);
        inner.timers.insert(
            id,
            ScheduledTimer {
                deadline_ms,
                callback: Box::new(callback),
            },
        );
        TimerRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Advances the timeline by `delta_ms`, firing due timers.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms().saturating_add(delta_ms);
        self.advance_to(target);
    }

    /// Advances the timeline to `now_ms`, firing every timer whose deadline
    /// has been reached, in deadline order (FIFO among equal deadlines).
    ///
    /// Callbacks run with no clock borrow held, so they may schedule or
    /// cancel timers; a timer scheduled from a callback fires in the same
    /// drain if its deadline also falls within `now_ms`. Moving the clock
    /// backwards is refused.
    pub fn advance_to(&self, now_ms: u64) {
        {
            let inner = self.inner.borrow();
            if now_ms < inner.now_ms {
                log::trace!(
                    "ignoring clock rewind to {}ms (now {}ms)",
                    now_ms,
                    inner.now_ms
                );
                return;
            }
        }

        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                // Earliest due timer; ids are monotonically assigned, so the
                // id tie-break preserves scheduling order within a deadline.
                let due: SmallVec<[(u64, u64); 4]> = inner
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.deadline_ms <= now_ms)
                    .map(|(id, timer)| (timer.deadline_ms, *id))
                    .collect();
                match due.iter().min().copied() {
                    Some((deadline, id)) => {
                        inner.now_ms = inner.now_ms.max(deadline);
                        inner.timers.remove(&id)
                    }
                    None => {
                        inner.now_ms = now_ms;
                        None
                    }
                }
            };

            match next {
                Some(timer) => {
                    let ScheduledTimer {
                        deadline_ms,
                        callback,
                    } = timer;
                    callback(deadline_ms);
                }
                None => break,
            }
        }
    }

    fn cancel(&self, id: u64) {
        self.inner.borrow_mut().timers.remove(&id);
    }

    /// Number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }
}

impl Default for TransitionClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a scheduled timer. Cancels the timer when dropped.
pub struct TimerRegistration {
    clock: Weak<RefCell<ClockInner>>,
    id: Option<u64>,
}

impl TimerRegistration {
    /// Cancels the timer explicitly.
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let (Some(id), Some(inner)) = (self.id.take(), self.clock.upgrade()) {
            TransitionClock { inner }.cancel(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}
