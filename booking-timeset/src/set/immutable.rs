use std::{
    fmt::{Debug, Display, Formatter},
    sync::Arc,
};

use crate::{
    endpoint::Endpoint,
    error::Error,
    set::{Between, IntervalSet, MutableIntervalSet, disjoint::DisjointSet, slice},
    span::Span,
};

/// Frozen set of disjoint spans, cheap to clone and to share between threads.
///
/// Operations return a new set and never touch `self`.
#[must_use]
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct ImmutableSet<T> {
    spans: Arc<[Span<T>]>,
}

impl<T> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self { spans: Arc::new([]) }
    }
}

impl<T: Endpoint> ImmutableSet<T> {
    /// See [`DisjointSet::try_from_sorted`].
    pub fn try_from_sorted(spans: Vec<Span<T>>) -> Result<Self, Error> {
        DisjointSet::try_from_sorted(spans).map(Self::from)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Span<T>] {
        &self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span<T>> {
        self.spans.iter()
    }

    /// Mutable copy of the spans.
    pub fn thaw(&self) -> DisjointSet<T> {
        DisjointSet::from_disjoint(self.spans.to_vec())
    }

    pub fn union(&self, other: &impl IntervalSet<T>) -> Self {
        let mut set = self.thaw();
        set.union_with(other);
        set.into()
    }

    pub fn subtract(&self, other: &impl IntervalSet<T>) -> Self {
        let mut set = self.thaw();
        set.subtract(other);
        set.into()
    }

    pub fn intersect(&self, other: &impl IntervalSet<T>) -> Self {
        let mut set = self.thaw();
        set.intersect_with(other);
        set.into()
    }
}

impl<T: Endpoint> From<DisjointSet<T>> for ImmutableSet<T> {
    fn from(set: DisjointSet<T>) -> Self {
        Self { spans: set.into_vec().into() }
    }
}

impl<T: Endpoint> IntervalSet<T> for ImmutableSet<T> {
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
        self.spans.to_vec()
    }
}

impl<T: Endpoint> Display for ImmutableSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        slice::fmt(&self.spans, f)
    }
}

impl<T: Endpoint> Debug for ImmutableSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        slice::fmt(&self.spans, f)
    }
}
