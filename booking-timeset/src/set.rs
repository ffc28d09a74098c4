//! Ordered containers of disjoint spans.
//!
//! Both containers keep their spans sorted, non-overlapping and non-adjacent:
//! for any two neighbours `left.end < right.start` holds strictly.

mod between;
pub mod disjoint;
pub mod immutable;
mod slice;

pub use self::between::Between;
use crate::{endpoint::Endpoint, span::Span};

/// Read-only view over a set of disjoint spans.
pub trait IntervalSet<T: Endpoint> {
    /// Stored spans which overlap the extent, clamped to it, in ascending order.
    ///
    /// The iterator is lazy and may be cloned to restart the walk.
    fn between(&self, extent: Span<T>) -> impl Iterator<Item = Span<T>> + Clone + '_;

    /// Whether the span is entirely covered, without any gap.
    ///
    /// ```text
    /// span: [===================)
    /// set:  [====)[===)   [===)[=)
    ///                 |gap|
    /// ```
    fn contains(&self, span: Span<T>) -> bool;

    /// Whether any stored span overlaps the span. Touching is not an overlap.
    fn overlaps(&self, span: Span<T>) -> bool;

    /// Span covering the whole set, `None` for an empty set.
    fn extent(&self) -> Option<Span<T>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_vec(&self) -> Vec<Span<T>>;
}

/// Set that can be modified in place.
///
/// Every operation leaves the set sorted, disjoint and without adjacent spans.
pub trait MutableIntervalSet<T: Endpoint>: IntervalSet<T> {
    /// Add the span, merging it with whatever it overlaps or touches.
    fn insert(&mut self, span: Span<T>);

    /// Cut the span out of the set.
    fn remove(&mut self, span: Span<T>);

    /// Insert every span of the other set.
    fn union_with(&mut self, other: &impl IntervalSet<T>);

    /// Cut every span of the other set out.
    fn subtract(&mut self, other: &impl IntervalSet<T>);

    /// Keep only what is covered by the other set too.
    fn intersect_with(&mut self, other: &impl IntervalSet<T>);
}

/// Pairwise intersection of two sets, in ascending order.
///
/// Walks both sets once, advancing whichever current span lies before the other one.
pub fn intersection<T: Endpoint>(a: &impl IntervalSet<T>, b: &impl IntervalSet<T>) -> Vec<Span<T>> {
    let (Some(extent_a), Some(extent_b)) = (a.extent(), b.extent()) else {
        return Vec::new();
    };
    let mut xs = a.between(extent_b);
    let mut ys = b.between(extent_a);
    let mut common = Vec::new();

    let (mut x, mut y) = (xs.next(), ys.next());
    while let (Some(current_x), Some(current_y)) = (x, y) {
        if current_x.before(current_y) {
            x = xs.next();
            continue;
        }
        if current_y.before(current_x) {
            y = ys.next();
            continue;
        }
        common.extend(current_x.intersect(current_y));
        x = match current_x.bisect(current_y) {
            (_, Some(right)) => Some(right),
            (_, None) => xs.next(),
        };
    }
    common
}
