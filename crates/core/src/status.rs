//! Complaint lifecycle states.
//!
//! Transitions are deliberately permissive (any state may follow any
//! other), matching the triage workflow: admins can reject, reopen, or
//! resolve without walking a fixed graph. The enum still keeps illegal
//! *values* unrepresentable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a complaint, stored as the `complaint_status`
/// Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    Assigned,
    InProgress,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    /// Canonical wire/database spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Assigned => "assigned",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplaintStatus::Pending),
            "assigned" => Ok(ComplaintStatus::Assigned),
            "in_progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            "rejected" => Ok(ComplaintStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Unknown complaint status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string_form() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::Assigned,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
            ComplaintStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ComplaintStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let err = "escalated".parse::<ComplaintStatus>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
