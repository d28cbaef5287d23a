//! Multicast subject that replays its latest value to late subscribers

use super::disposable::Subscription;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

struct Observer<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    on_next: Rc<RefCell<dyn FnMut(&T)>>,
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Rc::clone(&self.active),
            on_next: Rc::clone(&self.on_next),
        }
    }
}

struct Inner<T> {
    observers: Vec<Observer<T>>,
    latest: Option<T>,
    next_id: u64,
}

/// Broadcasts each value to every current subscriber and caches the most
/// recent one. A subscriber attaching after the first emission receives the
/// cached value synchronously inside `subscribe`.
///
/// Single-threaded: clones share state through `Rc`. Not re-entrant: an
/// observer must not call [`next`](ReplaySubject::next) on the subject it is
/// subscribed to, or the nested delivery panics on the observer's borrow.
pub struct ReplaySubject<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ReplaySubject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Default for ReplaySubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> ReplaySubject<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                observers: Vec::new(),
                latest: None,
                next_id: 0,
            })),
        }
    }

    /// Store `value` as the latest and deliver it to every active subscriber
    pub fn next(&self, value: T) {
        // Snapshot the observer list so callbacks may subscribe or dispose
        // on this subject without a double borrow.
        let observers: Vec<Observer<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = Some(value.clone());
            inner.observers.clone()
        };

        for observer in observers {
            if observer.active.get() {
                (observer.on_next.borrow_mut())(&value);
            }
        }
    }

    /// Register `on_next`. If a value has already been emitted it is
    /// replayed immediately.
    pub fn subscribe(&self, on_next: impl FnMut(&T) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let on_next: Rc<RefCell<dyn FnMut(&T)>> = Rc::new(RefCell::new(on_next));

        let (id, replay) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push(Observer {
                id,
                active: Rc::clone(&active),
                on_next: Rc::clone(&on_next),
            });
            (id, inner.latest.clone())
        };

        if let Some(value) = replay {
            (on_next.borrow_mut())(&value);
        }

        let inner: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            active.set(false);
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().observers.retain(|o| o.id != id);
            }
        })
    }

    /// The most recently emitted value, if any
    pub fn value(&self) -> Option<T> {
        self.inner.borrow().latest.clone()
    }

    #[cfg(test)]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReplaySubject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ReplaySubject")
            .field("latest", &inner.latest)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
