use std::{iter::FusedIterator, slice};

use crate::{endpoint::Endpoint, span::Span};

/// Lazy walk over the stored spans overlapping an extent, each clamped to the extent.
///
/// Cloning the iterator restarts the walk from the clone's position.
#[must_use]
#[derive(Clone, Debug)]
pub struct Between<'a, T> {
    spans: slice::Iter<'a, Span<T>>,
    extent: Span<T>,
}

impl<'a, T: Endpoint> Between<'a, T> {
    /// Skip, by binary search, everything before the extent.
    pub(crate) fn new(spans: &'a [Span<T>], extent: Span<T>) -> Self {
        let low = spans.partition_point(|span| span.before(extent));
        Self { spans: spans[low..].iter(), extent }
    }
}

impl<T: Endpoint> Iterator for Between<'_, T> {
    type Item = Span<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let span = *self.spans.next()?;
            if self.extent.before(span) {
                // Sorted: everything further is after the extent too.
                self.spans = slice::Iter::default();
                return None;
            }
            if let Some(clamped) = span.intersect(self.extent) {
                return Some(clamped);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.spans.len()))
    }
}

impl<T: Endpoint> FusedIterator for Between<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: i32, end: i32) -> Span<i32> {
        Span::new(start, end).unwrap()
    }

    #[test]
    fn clamps_to_extent() {
        let spans = [span(0, 2), span(4, 6), span(8, 10), span(12, 14)];
        let between: Vec<_> = Between::new(&spans, span(1, 9)).collect();
        assert_eq!(between, [span(1, 2), span(4, 6), span(8, 9)]);
    }

    #[test]
    fn touching_is_skipped() {
        let spans = [span(0, 2), span(4, 6)];
        assert_eq!(Between::new(&spans, span(2, 4)).count(), 0);
        assert_eq!(Between::new(&spans, span(6, 8)).count(), 0);
    }

    #[test]
    fn restartable() {
        let spans = [span(0, 2), span(4, 6)];
        let mut between = Between::new(&spans, span(0, 6));
        let restarted = between.clone();
        assert_eq!(between.next(), Some(span(0, 2)));
        assert_eq!(restarted.count(), 2);
        assert_eq!(between.next(), Some(span(4, 6)));
        assert_eq!(between.next(), None);
        assert_eq!(between.next(), None);
    }
}
