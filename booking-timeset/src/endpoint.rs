use std::fmt::Debug;

/// Point bounding a [`crate::Span`].
///
/// Anything cheap to copy and totally ordered qualifies: `Ord::cmp` is the only primitive
/// the algebra relies on.
pub trait Endpoint: Copy + Ord + Debug {}

impl<T> Endpoint for T where T: Copy + Ord + Debug {}
