//! Subscription handles and the bag that releases them together

use std::fmt;

/// Cancellation handle returned by every `subscribe` call.
///
/// Dropping a `Subscription` does not cancel it; it must be disposed
/// explicitly or registered with a [`DisposeBag`].
#[must_use = "a subscription leaks unless it is disposed or added to a DisposeBag"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Run the teardown. Calling this more than once is a no-op.
    pub fn dispose(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.teardown.is_none()
    }

    /// Hand ownership of this subscription to `bag`
    pub fn disposed_by(self, bag: &mut DisposeBag) {
        bag.insert(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Owns a set of subscriptions and disposes all of them at once, either on
/// [`DisposeBag::dispose`] or when the bag is dropped.
#[derive(Debug, Default)]
pub struct DisposeBag {
    subscriptions: Vec<Subscription>,
}

impl DisposeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Dispose every held subscription exactly once and empty the bag
    pub fn dispose(&mut self) {
        for mut subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_subscription(counter: &Rc<Cell<usize>>) -> Subscription {
        let counter = Rc::clone(counter);
        Subscription::new(move || counter.set(counter.get() + 1))
    }

    mod subscription {
        use super::*;

        #[test]
        fn test_dispose_runs_teardown_once() {
            let count = Rc::new(Cell::new(0));
            let mut sub = counting_subscription(&count);

            assert!(!sub.is_disposed());
            sub.dispose();
            sub.dispose();

            assert_eq!(count.get(), 1);
            assert!(sub.is_disposed());
        }

        #[test]
        fn test_drop_without_dispose_does_not_run_teardown() {
            let count = Rc::new(Cell::new(0));
            drop(counting_subscription(&count));
            assert_eq!(count.get(), 0);
        }
    }

    mod dispose_bag {
        use super::*;

        #[test]
        fn test_dispose_releases_every_subscription_once() {
            let count = Rc::new(Cell::new(0));
            let mut bag = DisposeBag::new();
            for _ in 0..3 {
                counting_subscription(&count).disposed_by(&mut bag);
            }
            assert_eq!(count.get(), 0);

            bag.dispose();
            bag.dispose();

            assert_eq!(count.get(), 3);
        }

        #[test]
        fn test_drop_disposes_contents() {
            let count = Rc::new(Cell::new(0));
            {
                let mut bag = DisposeBag::new();
                bag.insert(counting_subscription(&count));
                bag.insert(counting_subscription(&count));
            }
            assert_eq!(count.get(), 2);
        }

        #[test]
        fn test_already_disposed_entries_are_not_rerun() {
            let count = Rc::new(Cell::new(0));
            let mut sub = counting_subscription(&count);
            sub.dispose();

            let mut bag = DisposeBag::new();
            sub.disposed_by(&mut bag);
            bag.dispose();

            assert_eq!(count.get(), 1);
        }
    }
}
