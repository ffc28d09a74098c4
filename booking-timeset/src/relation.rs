use std::{
    cmp::Ordering::{Equal, Greater, Less},
    fmt::{Debug, Display, Formatter},
};

use crate::{endpoint::Endpoint, span::Span};

/// Position of an interval `i` relative to an interval `j`.
///
/// The cases are declared along the axis from «entirely before» to «entirely after»,
/// so the derived ordering matches the axis and every predicate below is a range check:
///
/// ```text
///                |<=== j ===>|
///   <= i =>      |           |            EntirelyBefore
///        <= i => |           |            EndTouching
///          <= i =|=>         |            EndInside
///          <=====|==== i ===>|            EnclosingEndTouching
///          <=====|==== i ====|===>        Enclosing
///                |<=== i ====|===>        EnclosingStartTouching
///                |<=== i ===>|            ExactMatch
///                |<= i =>    |            InsideStartTouching
///                |  <= i =>  |            Inside
///                |    <= i =>|            InsideEndTouching
///                |         <=|= i =>      StartInside
///                |           |<= i =>     StartTouching
///                |           |   <= i =>  EntirelyAfter
/// ```
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Relation {
    EntirelyBefore,
    EndTouching,
    EndInside,
    EnclosingEndTouching,
    Enclosing,
    EnclosingStartTouching,
    ExactMatch,
    InsideStartTouching,
    Inside,
    InsideEndTouching,
    StartInside,
    StartTouching,
    EntirelyAfter,
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Relation {
    /// All the cases in axis order.
    pub const ALL: [Self; 13] = [
        Self::EntirelyBefore,
        Self::EndTouching,
        Self::EndInside,
        Self::EnclosingEndTouching,
        Self::Enclosing,
        Self::EnclosingStartTouching,
        Self::ExactMatch,
        Self::InsideStartTouching,
        Self::Inside,
        Self::InsideEndTouching,
        Self::StartInside,
        Self::StartTouching,
        Self::EntirelyAfter,
    ];

    /// Classify `i` against `j`.
    pub fn of<T: Endpoint>(i: Span<T>, j: Span<T>) -> Self {
        match i.end().cmp(&j.start()) {
            Less => return Self::EntirelyBefore,
            Equal => return Self::EndTouching,
            Greater => {}
        }
        match i.start().cmp(&j.end()) {
            Equal => return Self::StartTouching,
            Greater => return Self::EntirelyAfter,
            Less => {}
        }
        match (i.start().cmp(&j.start()), i.end().cmp(&j.end())) {
            (Less, Less) => Self::EndInside,
            (Less, Equal) => Self::EnclosingEndTouching,
            (Less, Greater) => Self::Enclosing,
            (Equal, Less) => Self::InsideStartTouching,
            (Equal, Equal) => Self::ExactMatch,
            (Equal, Greater) => Self::EnclosingStartTouching,
            (Greater, Less) => Self::Inside,
            (Greater, Equal) => Self::InsideEndTouching,
            (Greater, Greater) => Self::StartInside,
        }
    }

    /// Touching is not an overlap.
    #[must_use]
    pub fn is_overlap(self) -> bool {
        (Self::EndInside..=Self::StartInside).contains(&self)
    }

    #[must_use]
    pub fn is_before(self) -> bool {
        (Self::EntirelyBefore..=Self::EndTouching).contains(&self)
    }

    #[must_use]
    pub fn is_after(self) -> bool {
        (Self::StartTouching..=Self::EntirelyAfter).contains(&self)
    }

    /// The same relation seen from the other interval.
    pub const fn inverse(self) -> Self {
        match self {
            Self::EntirelyBefore => Self::EntirelyAfter,
            Self::EndTouching => Self::StartTouching,
            Self::EndInside => Self::StartInside,
            Self::EnclosingEndTouching => Self::InsideEndTouching,
            Self::Enclosing => Self::Inside,
            Self::EnclosingStartTouching => Self::InsideStartTouching,
            Self::ExactMatch => Self::ExactMatch,
            Self::InsideStartTouching => Self::EnclosingStartTouching,
            Self::Inside => Self::Enclosing,
            Self::InsideEndTouching => Self::EnclosingEndTouching,
            Self::StartInside => Self::EndInside,
            Self::StartTouching => Self::EndTouching,
            Self::EntirelyAfter => Self::EntirelyBefore,
        }
    }
}
