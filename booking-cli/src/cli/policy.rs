use chrono::TimeDelta;
use clap::Parser;

use crate::{core::policy::Policy, prelude::*};

#[derive(Parser)]
pub struct PolicyArgs {
    /// Reservations are widened to multiples of this precision.
    #[clap(long, env = "BOOKING_PRECISION", default_value = "1h", global = true)]
    precision: humantime::Duration,

    /// Free slots shorter than this are not offered.
    #[clap(long, env = "BOOKING_MIN_DURATION", default_value = "1h", global = true)]
    min_duration: humantime::Duration,
}

impl PolicyArgs {
    pub fn policy(&self) -> Result<Policy> {
        Policy::builder()
            .precision(to_time_delta(self.precision)?)
            .min_duration(to_time_delta(self.min_duration)?)
            .build()
    }
}

fn to_time_delta(duration: humantime::Duration) -> Result<TimeDelta> {
    TimeDelta::from_std(duration.into()).with_context(|| format!("`{duration}` is too long"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ok() -> Result {
        let args = PolicyArgs::try_parse_from(["booking"])?;
        assert_eq!(args.policy()?, Policy::default());
        Ok(())
    }

    #[test]
    fn custom_ok() -> Result {
        let args =
            PolicyArgs::try_parse_from(["booking", "--precision", "15m", "--min-duration", "30m"])?;
        let policy = args.policy()?;
        assert_eq!(policy.precision, TimeDelta::minutes(15));
        assert_eq!(policy.min_duration, TimeDelta::minutes(30));
        Ok(())
    }

    #[test]
    fn zero_precision_is_rejected() -> Result {
        let args = PolicyArgs::try_parse_from(["booking", "--precision", "0s"])?;
        assert!(args.policy().is_err());
        Ok(())
    }
}
