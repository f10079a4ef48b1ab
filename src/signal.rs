//! Single-threaded change notification with scoped listeners.
//!
//! Scroll and media-query sources push values into a [`Signal`]; consumers hold
//! a [`Subscription`] for as long as they want updates. Dropping the guard
//! removes the listener before the drop returns.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    animation::{
        mapper::{PhaseMapper, PhaseSet},
        table::ChannelTable,
    },
    foundation::core::{MotionPreference, ScrollRange},
};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Holds the latest value and notifies subscribers synchronously on every `set`.
pub struct Signal<T> {
    inner: Rc<RefCell<Slots<T>>>,
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slots {
                value: initial,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Store `value` and call every live listener in subscription order.
    pub fn set(&self, value: T) {
        // Listeners run outside the borrow so they may read the signal or drop
        // subscriptions, including ones later in this same round.
        let listeners: Vec<(u64, Listener<T>)> = {
            let mut slots = self.inner.borrow_mut();
            slots.value = value.clone();
            slots
                .listeners
                .iter()
                .map(|(id, f)| (*id, Rc::clone(f)))
                .collect()
        };
        for (id, f) in listeners {
            let live = self
                .inner
                .borrow()
                .listeners
                .iter()
                .any(|(lid, _)| *lid == id);
            if live {
                f(&value);
            }
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slots = self.inner.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.listeners.push((id, Rc::new(f)));
            id
        };

        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Listener guard. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Turns raw scroll positions into published phase sets.
pub struct ScrollDriver {
    mapper: PhaseMapper,
    range: ScrollRange,
    motion: MotionPreference,
    position: f64,
    phases: Signal<PhaseSet>,
}

impl ScrollDriver {
    pub fn new(table: ChannelTable, range: ScrollRange, motion: MotionPreference) -> Self {
        let mapper = PhaseMapper::new(table);
        let initial = mapper.evaluate(range.progress_at(range.start).get(), motion);
        Self {
            mapper,
            range,
            motion,
            position: range.start,
            phases: Signal::new(initial),
        }
    }

    pub fn mapper(&self) -> &PhaseMapper {
        &self.mapper
    }

    pub fn current(&self) -> PhaseSet {
        self.phases.get()
    }

    pub fn subscribe(&self, f: impl Fn(&PhaseSet) + 'static) -> Subscription {
        self.phases.subscribe(f)
    }

    pub fn subscriber_count(&self) -> usize {
        self.phases.subscriber_count()
    }

    pub fn on_scroll(&mut self, position: f64) {
        self.position = position;
        self.publish();
    }

    pub fn set_motion(&mut self, motion: MotionPreference) {
        if self.motion != motion {
            tracing::debug!(?motion, "motion preference changed");
            self.motion = motion;
            self.publish();
        }
    }

    /// Container resized; progress is recomputed for the current position.
    pub fn set_range(&mut self, range: ScrollRange) {
        self.range = range;
        self.publish();
    }

    fn publish(&self) {
        let progress = self.range.progress_at(self.position);
        self.phases.set(self.mapper.evaluate(progress.get(), self.motion));
    }
}

#[cfg(test)]
#[path = "../tests/unit/signal.rs"]
mod tests;
