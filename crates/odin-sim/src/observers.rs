//! Subscription registry. Observers are notified with `(state, metrics)` after every mutation.
//!
//! Delivery works from a copy of the subscriber list taken when a notification starts, so
//! unsubscribing inside a callback never skips or repeats delivery to anyone else.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use odin_core::state::{LiveMetrics, SimulationState};

type Callback = dyn FnMut(&SimulationState, &LiveMetrics);

struct Slot {
    id: u64,
    callback: Rc<RefCell<Box<Callback>>>,
}

type Slots = RefCell<Vec<Slot>>;

/// Ordered collection of observer callbacks.
#[derive(Default)]
pub struct ObserverRegistry {
    slots: Rc<Slots>,
    next_id: u64,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. The returned handle removes it again.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&SimulationState, &LiveMetrics) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.borrow_mut().push(Slot {
            id,
            callback: Rc::new(RefCell::new(Box::new(callback))),
        });
        Subscription {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Deliver one notification to every subscriber present right now.
    pub fn notify(&self, state: &SimulationState, metrics: &LiveMetrics) {
        let present: Vec<_> = self
            .slots
            .borrow()
            .iter()
            .map(|slot| Rc::clone(&slot.callback))
            .collect();

        for callback in present {
            // A callback already on the stack is not re-entered.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(state, metrics);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Handle returned by `subscribe`. Dropping it keeps the subscription alive;
/// call [`Subscription::unsubscribe`] to remove it.
#[derive(Clone)]
pub struct Subscription {
    id: u64,
    slots: Weak<Slots>,
}

impl Subscription {
    /// Remove the callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&self) -> bool {
        let Some(slots) = self.slots.upgrade() else {
            return false;
        };
        let mut slots = slots.borrow_mut();
        let before = slots.len();
        slots.retain(|slot| slot.id != self.id);
        slots.len() != before
    }

    pub fn is_active(&self) -> bool {
        let Some(slots) = self.slots.upgrade() else {
            return false;
        };
        let present = slots.borrow().iter().any(|slot| slot.id == self.id);
        present
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use odin_core::catalog;
    use odin_core::types::TimeScale;

    use super::*;
    use crate::systems::metrics;

    fn fixture() -> (SimulationState, LiveMetrics) {
        let state = SimulationState::new(catalog::baseline(), TimeScale::default());
        let metrics = metrics::derive(&state);
        (state, metrics)
    }

    #[test]
    fn test_every_subscriber_notified() {
        let (state, metrics) = fixture();
        let mut registry = ObserverRegistry::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            registry.subscribe(move |_, _| hits.set(hits.get() + 1));
        }
        registry.notify(&state, &metrics);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut registry = ObserverRegistry::new();
        let sub = registry.subscribe(|_, _| {});
        assert!(sub.is_active());
        assert!(sub.unsubscribe());
        assert!(!sub.unsubscribe());
        assert!(!sub.is_active());
        assert!(registry.is_empty());
    }

    /// A subscriber removed mid-notification by an earlier callback still
    /// receives the in-flight notification, but not the next one.
    #[test]
    fn test_removal_during_delivery_does_not_skip() {
        let (state, metrics) = fixture();
        let mut registry = ObserverRegistry::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let victim_hits = Rc::new(Cell::new(0));

        let target = Rc::clone(&victim);
        registry.subscribe(move |_, _| {
            if let Some(sub) = target.borrow().as_ref() {
                sub.unsubscribe();
            }
        });
        let hits = Rc::clone(&victim_hits);
        *victim.borrow_mut() = Some(registry.subscribe(move |_, _| hits.set(hits.get() + 1)));

        registry.notify(&state, &metrics);
        assert_eq!(victim_hits.get(), 1);
        registry.notify(&state, &metrics);
        assert_eq!(victim_hits.get(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handle_outlives_registry() {
        let sub = {
            let mut registry = ObserverRegistry::new();
            registry.subscribe(|_, _| {})
        };
        assert!(!sub.unsubscribe());
    }
}
