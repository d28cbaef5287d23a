//! Minimal single-threaded reactive primitives
//!
//! Just enough of a stream toolkit for the login pipeline: a replaying
//! multicast subject, latest-value combination, a trailing debounce and
//! bulk subscription disposal.

mod combine;
mod debounce;
mod disposable;
mod subject;

pub use combine::combine_latest;
pub use debounce::Debouncer;
pub use disposable::DisposeBag;
pub use subject::ReplaySubject;
