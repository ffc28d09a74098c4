use bon::bon;
use booking_timeset::TimeSpan;
use chrono::TimeDelta;

use crate::prelude::*;

/// Reservation rules applied by the booking service.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    /// Reservations are widened to multiples of this precision.
    pub precision: TimeDelta,

    /// Free slots shorter than this are not offered.
    pub min_duration: TimeDelta,
}

impl Default for Policy {
    fn default() -> Self {
        Self { precision: TimeDelta::hours(1), min_duration: TimeDelta::hours(1) }
    }
}

#[bon]
impl Policy {
    #[builder]
    pub fn new(
        #[builder(default = TimeDelta::hours(1))] precision: TimeDelta,
        #[builder(default = TimeDelta::hours(1))] min_duration: TimeDelta,
    ) -> Result<Self> {
        ensure!(precision > TimeDelta::zero(), "the precision must be positive: {precision}");
        ensure!(min_duration > TimeDelta::zero(), "the minimum duration must be positive: {min_duration}");
        Ok(Self { precision, min_duration })
    }
}

impl Policy {
    /// Widen the span to the precision boundaries.
    pub fn align(&self, span: TimeSpan) -> Result<TimeSpan> {
        span.align(self.precision)
            .with_context(|| format!("failed to align {span} to {}", self.precision))
    }
}
