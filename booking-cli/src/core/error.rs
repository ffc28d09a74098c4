use std::process::ExitCode;

use booking_timeset::TimeSpan;

use crate::core::room::RoomRef;

/// Business rule violations, as opposed to infrastructure failures.
///
/// They travel inside [`anyhow::Error`] like everything else and are recognized with
/// [`anyhow::Error::downcast_ref`].
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("invalid `{field}`: {description}")]
    Validation { field: &'static str, description: String },

    #[error("room `{room}` is already reserved within {interval}")]
    Conflict { room: RoomRef, interval: TimeSpan },

    #[error("{resource} not found")]
    NotFound { resource: String },
}

impl BookingError {
    pub fn validation(field: &'static str, description: impl Into<String>) -> Self {
        Self::Validation { field, description: description.into() }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation { .. } => ExitCode::from(2),
            Self::Conflict { .. } => ExitCode::from(3),
            Self::NotFound { .. } => ExitCode::from(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn downcast_through_anyhow_ok() {
        let error = Error::from(BookingError::not_found("room `C01`"));
        assert!(matches!(error.downcast_ref::<BookingError>(), Some(BookingError::NotFound { .. })));
        assert_eq!(error.to_string(), "room `C01` not found");
    }

    #[test]
    fn downcast_through_context_ok() {
        let error = Err::<(), _>(BookingError::validation("to", "the interval is empty"))
            .context("failed to reserve")
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BookingError>(),
            Some(BookingError::Validation { field: "to", .. })
        ));
    }
}
