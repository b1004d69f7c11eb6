//! Slide-commit notifications.

use indexmap::IndexMap;

/// Payload delivered when a slide transition commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCommitted {
    /// The index the gallery settled on.
    pub index: usize,
    /// The index held before the move.
    pub previous_index: usize,
}

/// Identifies a registered commit listener for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of commit listeners, dispatched in registration order.
pub(crate) struct CommitListeners {
    next_id: u64,
    callbacks: IndexMap<u64, Box<dyn Fn(&SlideCommitted)>>,
}

impl CommitListeners {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 1,
            callbacks: IndexMap::new(),
        }
    }

    pub(crate) fn add(&mut self, callback: Box<dyn Fn(&SlideCommitted)>) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.insert(id, callback);
        ListenerId(id)
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        self.callbacks.shift_remove(&id.0).is_some()
    }

    pub(crate) fn dispatch(&self, event: &SlideCommitted) {
        for callback in self.callbacks.values() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_fire_in_registration_order() {
        let mut listeners = CommitListeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&seen);
        let second = Rc::clone(&seen);
        listeners.add(Box::new(move |_| first.borrow_mut().push(1)));
        listeners.add(Box::new(move |_| second.borrow_mut().push(2)));

        listeners.dispatch(&SlideCommitted {
            index: 1,
            previous_index: 0,
        });
        assert_eq!(seen.borrow().as_slice(), &[1, 2]);
    }

    #[test]
    fn removed_listener_stops_firing() {
        let mut listeners = CommitListeners::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = listeners.add(Box::new(move |_| *counter.borrow_mut() += 1));

        let event = SlideCommitted {
            index: 2,
            previous_index: 1,
        };
        listeners.dispatch(&event);
        assert!(listeners.remove(id));
        listeners.dispatch(&event);
        assert_eq!(*count.borrow(), 1);
        assert!(!listeners.remove(id), "second removal is a no-op");
    }
}
