//! Interval algebra over totally ordered endpoints, and sets of disjoint intervals.
//!
//! All intervals are half-open `[start, end)` and never empty: whatever may come out
//! empty is an [`Option`].

mod endpoint;
mod error;
mod relation;
mod span;
pub mod set;
pub mod time;

pub use self::{
    endpoint::Endpoint,
    error::Error,
    relation::Relation,
    set::{
        IntervalSet,
        MutableIntervalSet,
        disjoint::DisjointSet,
        immutable::ImmutableSet,
        intersection,
    },
    span::Span,
    time::{Align, TimeSpan},
};
