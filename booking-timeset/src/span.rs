use std::{
    fmt::{Debug, Display, Formatter},
    ops::Sub,
};

use crate::{endpoint::Endpoint, error::Error, relation::Relation};

/// Non-empty half-open interval `[start, end)`.
///
/// There is no «zero span»: operations that may come out empty return [`Option`] instead.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span<T> {
    /// Inclusive.
    pub(crate) start: T,

    /// Exclusive, always strictly after the start.
    pub(crate) end: T,
}

impl<T: Debug> Debug for Span<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?})", self.start, self.end)
    }
}

impl<T: Debug> Display for Span<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl<T: Endpoint> Span<T> {
    /// Build the span, or `None` if it would be empty or inverted.
    pub fn new(start: T, end: T) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn try_new(start: T, end: T) -> Result<Self, Error> {
        Self::new(start, end).ok_or_else(|| Error::InvalidSpan {
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        })
    }

    #[must_use]
    pub fn start(self) -> T {
        self.start
    }

    #[must_use]
    pub fn end(self) -> T {
        self.end
    }

    pub fn relation(self, other: Self) -> Relation {
        Relation::of(self, other)
    }

    /// Entirely before or end-touching the other span.
    #[must_use]
    pub fn before(self, other: Self) -> bool {
        self.relation(other).is_before()
    }

    /// Start-touching or entirely after the other span.
    #[must_use]
    pub fn after(self, other: Self) -> bool {
        self.relation(other).is_after()
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.relation(other).is_overlap()
    }

    #[must_use]
    pub fn contains_point(self, point: T) -> bool {
        (self.start <= point) && (point < self.end)
    }

    /// Common part of the two spans.
    ///
    /// ```text
    /// [===A===)
    ///     [===B===)
    ///     [===)
    /// ```
    pub fn intersect(self, other: Self) -> Option<Self> {
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Subtract the other span, returning what is left on either side of it.
    ///
    /// ```text
    /// [===============)
    ///     [===X===)
    /// [=L=)       [=R=)
    /// ```
    ///
    /// A span that does not overlap `other` comes back whole, on the side where it lies.
    #[must_use]
    pub fn bisect(self, other: Self) -> (Option<Self>, Option<Self>) {
        let Some(common) = self.intersect(other) else {
            return if self.before(other) { (Some(self), None) } else { (None, Some(self)) };
        };
        (Self::new(self.start, common.start), Self::new(common.end, self.end))
    }

    /// Divide the span at the point.
    ///
    /// ```text
    /// [===============)
    ///         X
    /// [===L===)
    ///         [===R===)
    /// ```
    #[must_use]
    pub fn split(self, point: T) -> (Option<Self>, Option<Self>) {
        (Self::new(self.start, point.min(self.end)), Self::new(point.max(self.start), self.end))
    }

    /// Union of two exactly adjacent spans, `None` if there is a gap or an overlap.
    ///
    /// ```text
    /// [===A===)
    ///         [===B===)
    /// [===============)
    /// ```
    pub fn adjoin(self, other: Self) -> Option<Self> {
        if self.end == other.start {
            Some(Self { start: self.start, end: other.end })
        } else if other.end == self.start {
            Some(Self { start: other.start, end: self.end })
        } else {
            None
        }
    }

    /// Smallest span covering both, regardless of what lies in between.
    ///
    /// ```text
    /// [==A==)     [==B==)
    /// [=================)
    /// ```
    pub fn encompass(self, other: Self) -> Self {
        Self { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

impl<T: Endpoint + Sub> Span<T> {
    #[must_use]
    pub fn length(self) -> <T as Sub>::Output {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: i32, end: i32) -> Span<i32> {
        Span::new(start, end).unwrap()
    }

    #[test]
    fn new_rejects_empty_and_inverted() {
        assert_eq!(Span::new(1, 1), None);
        assert_eq!(Span::new(2, 1), None);
        assert!(Span::try_new(2, 1).is_err());
        assert_eq!(span(1, 2).length(), 1);
    }

    #[test]
    fn intersect_ok() {
        assert_eq!(span(0, 10).intersect(span(5, 15)), Some(span(5, 10)));
        assert_eq!(span(0, 10).intersect(span(2, 3)), Some(span(2, 3)));
        assert_eq!(span(0, 10).intersect(span(10, 15)), None);
        assert_eq!(span(0, 10).intersect(span(20, 25)), None);
    }

    #[test]
    fn intersect_with_itself_is_identity() {
        let s = span(3, 7);
        assert_eq!(s.intersect(s), Some(s));
    }

    #[test]
    fn bisect_with_itself_is_empty() {
        let s = span(3, 7);
        assert_eq!(s.bisect(s), (None, None));
    }

    #[test]
    fn bisect_ok() {
        assert_eq!(span(0, 10).bisect(span(3, 6)), (Some(span(0, 3)), Some(span(6, 10))));
        assert_eq!(span(0, 10).bisect(span(0, 6)), (None, Some(span(6, 10))));
        assert_eq!(span(0, 10).bisect(span(5, 15)), (Some(span(0, 5)), None));
        assert_eq!(span(3, 6).bisect(span(0, 10)), (None, None));
    }

    #[test]
    fn bisect_disjoint_keeps_side() {
        assert_eq!(span(0, 5).bisect(span(10, 15)), (Some(span(0, 5)), None));
        assert_eq!(span(0, 5).bisect(span(5, 15)), (Some(span(0, 5)), None));
        assert_eq!(span(20, 25).bisect(span(10, 15)), (None, Some(span(20, 25))));
        assert_eq!(span(15, 25).bisect(span(10, 15)), (None, Some(span(15, 25))));
    }

    #[test]
    fn split_ok() {
        assert_eq!(span(0, 10).split(4), (Some(span(0, 4)), Some(span(4, 10))));
        assert_eq!(span(0, 10).split(0), (None, Some(span(0, 10))));
        assert_eq!(span(0, 10).split(10), (Some(span(0, 10)), None));
        assert_eq!(span(0, 10).split(-5), (None, Some(span(0, 10))));
        assert_eq!(span(0, 10).split(15), (Some(span(0, 10)), None));
    }

    #[test]
    fn adjoin_ok() {
        assert_eq!(span(0, 5).adjoin(span(5, 10)), Some(span(0, 10)));
        assert_eq!(span(5, 10).adjoin(span(0, 5)), Some(span(0, 10)));
        assert_eq!(span(0, 5).adjoin(span(6, 10)), None);
        assert_eq!(span(0, 6).adjoin(span(5, 10)), None);
    }

    #[test]
    fn encompass_ok() {
        assert_eq!(span(0, 2).encompass(span(8, 10)), span(0, 10));
        assert_eq!(span(8, 10).encompass(span(0, 2)), span(0, 10));
        assert_eq!(span(0, 10).encompass(span(2, 3)), span(0, 10));
    }

    #[test]
    fn predicates_ok() {
        assert!(span(0, 5).before(span(5, 10)));
        assert!(span(5, 10).after(span(0, 5)));
        assert!(!span(0, 5).overlaps(span(5, 10)));
        assert!(span(0, 6).overlaps(span(5, 10)));
        assert!(span(0, 5).contains_point(0));
        assert!(!span(0, 5).contains_point(5));
    }

    #[test]
    fn display_ok() {
        assert_eq!(span(1, 2).to_string(), "[1, 2)");
    }
}
