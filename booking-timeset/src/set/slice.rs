//! Queries shared by the set implementations, over a sorted slice of disjoint spans.

use std::fmt::{Formatter, Result as FmtResult};

use itertools::Itertools;

use crate::{endpoint::Endpoint, span::Span};

/// Stored spans overlapping the span, found by two binary searches.
pub fn window<T: Endpoint>(spans: &[Span<T>], span: Span<T>) -> &[Span<T>] {
    let low = spans.partition_point(|stored| stored.before(span));
    let high = spans.partition_point(|stored| !span.before(*stored));
    &spans[low..high.max(low)]
}

pub fn contains<T: Endpoint>(spans: &[Span<T>], span: Span<T>) -> bool {
    let mut remainder = span;
    for stored in window(spans, span) {
        match remainder.bisect(*stored) {
            (Some(_), _) => return false,
            (None, Some(right)) => remainder = right,
            (None, None) => return true,
        }
    }
    false
}

/// Only the first span which is not before the span may overlap it.
pub fn overlaps<T: Endpoint>(spans: &[Span<T>], span: Span<T>) -> bool {
    let index = spans.partition_point(|stored| stored.before(span));
    spans.get(index).is_some_and(|stored| stored.overlaps(span))
}

pub fn extent<T: Endpoint>(spans: &[Span<T>]) -> Option<Span<T>> {
    Some(spans.first()?.encompass(*spans.last()?))
}

pub fn is_disjoint<T: Endpoint>(spans: &[Span<T>]) -> bool {
    spans.iter().tuple_windows().all(|(left, right)| left.end < right.start)
}

pub fn fmt<T: Endpoint>(spans: &[Span<T>], f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "{{{}}}", spans.iter().join(", "))
}
