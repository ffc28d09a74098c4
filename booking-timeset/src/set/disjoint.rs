use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::{
    endpoint::Endpoint,
    error::Error,
    set::{Between, IntervalSet, MutableIntervalSet, immutable::ImmutableSet, intersection, slice},
    span::Span,
};

/// Sorted, disjoint, non-adjacent spans stored in a vector.
///
/// Lookups are `O(log n)`, a single insertion is `O(n)`, set operations are `O(n + m)`.
#[must_use]
#[derive(Clone, Eq, PartialEq, Hash, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
pub struct DisjointSet<T> {
    spans: Vec<Span<T>>,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self { spans: Vec::new() }
    }
}

impl<T: Endpoint> DisjointSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from spans sorted in ascending order.
    ///
    /// Each span must be before the next one. Exactly touching neighbours are merged.
    pub fn try_from_sorted(spans: Vec<Span<T>>) -> Result<Self, Error> {
        if let Some((index, (left, right))) = spans
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (left, right))| !left.before(**right))
        {
            return Err(Error::Unsorted { index, left: left.to_string(), right: right.to_string() });
        }
        let mut coalesced = Vec::with_capacity(spans.len());
        for span in spans {
            adjoin_or_append(&mut coalesced, span);
        }
        Ok(Self::from_disjoint(coalesced))
    }

    /// Wrap spans which are already sorted, disjoint and not adjacent.
    pub(crate) fn from_disjoint(spans: Vec<Span<T>>) -> Self {
        let this = Self { spans };
        this.debug_assert_invariant();
        this
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Span<T>] {
        &self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span<T>> {
        self.spans.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Span<T>> {
        self.spans
    }

    /// Snapshot the current spans. Later changes to this set do not affect the snapshot.
    pub fn freeze(&self) -> ImmutableSet<T> {
        ImmutableSet::from(self.clone())
    }

    fn debug_assert_invariant(&self) {
        debug_assert!(slice::is_disjoint(&self.spans), "spans must be sorted and disjoint: {self}");
    }
}

impl<T: Endpoint> IntervalSet<T> for DisjointSet<T> {
    fn between(&self, extent: Span<T>) -> impl Iterator<Item = Span<T>> + Clone + '_ {
        Between::new(&self.spans, extent)
    }

    fn contains(&self, span: Span<T>) -> bool {
        slice::contains(&self.spans, span)
    }

    fn overlaps(&self, span: Span<T>) -> bool {
        slice::overlaps(&self.spans, span)
    }

    fn extent(&self) -> Option<Span<T>> {
        slice::extent(&self.spans)
    }

    fn len(&self) -> usize {
        self.spans.len()
    }

    fn to_vec(&self) -> Vec<Span<T>> {
        self.spans.clone()
    }
}

impl<T: Endpoint> MutableIntervalSet<T> for DisjointSet<T> {
    /// Single walk: bisect the yet unplaced remainder against each stored span.
    ///
    /// ```text
    /// set:    [==A==)     [==B==)
    /// span:      [=============)
    /// pushed: [==A==)[=L=)[==B==)[R)
    /// result: [=====================)
    /// ```
    fn insert(&mut self, span: Span<T>) {
        if self.contains(span) {
            return;
        }
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        let mut remainder = Some(span);
        for &stored in &self.spans {
            if let Some(unplaced) = remainder {
                if unplaced.before(stored) {
                    adjoin_or_append(&mut spans, unplaced);
                    remainder = None;
                } else {
                    let (left, right) = unplaced.bisect(stored);
                    if let Some(left) = left {
                        adjoin_or_append(&mut spans, left);
                    }
                    remainder = right;
                }
            }
            adjoin_or_append(&mut spans, stored);
        }
        if let Some(unplaced) = remainder {
            adjoin_or_append(&mut spans, unplaced);
        }
        self.spans = spans;
        self.debug_assert_invariant();
    }

    fn remove(&mut self, span: Span<T>) {
        self.subtract(&Self::from(span));
    }

    fn union_with(&mut self, other: &impl IntervalSet<T>) {
        let Some(extent) = other.extent() else {
            return;
        };
        for span in other.between(extent) {
            self.insert(span);
        }
    }

    /// Two-pointer sweep restricted to this set's extent.
    ///
    /// What is left of `x` before `y` is final since the following `y`s come later.
    fn subtract(&mut self, other: &impl IntervalSet<T>) {
        let Some(extent) = self.extent() else {
            return;
        };
        let mut spans = Vec::with_capacity(self.spans.len());
        let mut xs = self.spans.iter().copied();
        let mut ys = other.between(extent);

        let (mut x, mut y) = (xs.next(), ys.next());
        while let Some(current_x) = x {
            let Some(current_y) = y else {
                spans.push(current_x);
                x = xs.next();
                continue;
            };
            let (left, right) = current_x.bisect(current_y);
            spans.extend(left);
            if let Some(right) = right {
                x = Some(right);
                y = ys.next();
            } else {
                x = xs.next();
            }
        }
        self.spans = spans;
        self.debug_assert_invariant();
    }

    fn intersect_with(&mut self, other: &impl IntervalSet<T>) {
        self.spans = intersection(&*self, other);
        self.debug_assert_invariant();
    }
}

/// Push the span, merging it into the last one when they touch exactly.
fn adjoin_or_append<T: Endpoint>(spans: &mut Vec<Span<T>>, span: Span<T>) {
    if let Some(last) = spans.last_mut()
        && let Some(adjoined) = last.adjoin(span)
    {
        *last = adjoined;
    } else {
        spans.push(span);
    }
}

impl<T: Endpoint> From<Span<T>> for DisjointSet<T> {
    fn from(span: Span<T>) -> Self {
        Self { spans: vec![span] }
    }
}

impl<T: Endpoint> FromIterator<Span<T>> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = Span<T>>>(iter: I) -> Self {
        let mut this = Self::new();
        for span in iter {
            this.insert(span);
        }
        this
    }
}

impl<T: Endpoint> Display for DisjointSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        slice::fmt(&self.spans, f)
    }
}

impl<T: Endpoint> Debug for DisjointSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        slice::fmt(&self.spans, f)
    }
}
