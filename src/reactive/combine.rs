//! Latest-value combination of two subjects

use super::disposable::Subscription;
use super::subject::ReplaySubject;
use std::cell::RefCell;
use std::rc::Rc;

struct Latest<A, B> {
    left: Option<A>,
    right: Option<B>,
}

/// Combine `left` and `right` with `combine` whenever either side emits,
/// using the most recent value of the other side. Nothing is emitted until
/// both sides have produced a value.
///
/// The returned subject replays its latest combined value. The two upstream
/// subscriptions are returned so the caller can register them for disposal.
pub fn combine_latest<A, B, R, F>(
    left: &ReplaySubject<A>,
    right: &ReplaySubject<B>,
    combine: F,
) -> (ReplaySubject<R>, [Subscription; 2])
where
    A: Clone + 'static,
    B: Clone + 'static,
    R: Clone + 'static,
    F: Fn(&A, &B) -> R + 'static,
{
    let output = ReplaySubject::new();
    let latest = Rc::new(RefCell::new(Latest {
        left: None,
        right: None,
    }));
    let combine = Rc::new(combine);

    let left_sub = {
        let latest = Rc::clone(&latest);
        let combine = Rc::clone(&combine);
        let output = output.clone();
        left.subscribe(move |value: &A| {
            let combined = {
                let mut latest = latest.borrow_mut();
                latest.left = Some(value.clone());
                latest.right.as_ref().map(|right| combine(value, right))
            };
            if let Some(combined) = combined {
                output.next(combined);
            }
        })
    };

    let right_sub = {
        let output = output.clone();
        right.subscribe(move |value: &B| {
            let combined = {
                let mut latest = latest.borrow_mut();
                latest.right = Some(value.clone());
                latest.left.as_ref().map(|left| combine(left, value))
            };
            if let Some(combined) = combined {
                output.next(combined);
            }
        })
    };

    (output, [left_sub, right_sub])
}
