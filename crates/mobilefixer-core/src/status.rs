//! # Repair Status Workflow
//!
//! The lifecycle of a repair job, as a closed enumeration with an explicit
//! transition table.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Repair Lifecycle                                  │
//! │                                                                         │
//! │   ┌─────────┐  Start   ┌─────────────┐  Mark    ┌──────────┐           │
//! │   │ pending │ ───────► │ in-progress │ ───────► │ repaired │           │
//! │   └────┬────┘          └──────┬──────┘ Repaired └────┬─────┘           │
//! │        │                      │                      │ Mark            │
//! │        │ Cancel               │ Cancel               │ Delivered       │
//! │        ▼                      ▼                      ▼                  │
//! │   ┌───────────┐◄──────────────┘               ┌───────────┐            │
//! │   │ cancelled │  (terminal)                   │ delivered │ (terminal) │
//! │   └───────────┘                               └───────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coarse Grouping
//! The dashboard groups repairs into four coarse buckets. The grouping is a
//! pure function of the fine status, so the two can never disagree:
//!
//! | Fine status   | Coarse status |
//! |---------------|---------------|
//! | pending       | pending       |
//! | in-progress   | in-progress   |
//! | repaired      | completed     |
//! | delivered     | delivered     |
//! | cancelled     | (none)        |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

// =============================================================================
// Repair Status
// =============================================================================

/// Fine-grained stage of a repair job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum RepairStatus {
    /// Device received, work not started.
    #[default]
    Pending,
    /// A technician is working on it.
    InProgress,
    /// Work done, waiting for the customer to collect.
    Repaired,
    /// Handed back to the customer.
    Delivered,
    /// Abandoned before completion.
    Cancelled,
}

impl RepairStatus {
    /// Every status, in lifecycle order (used for filter chips).
    pub const ALL: [RepairStatus; 5] = [
        RepairStatus::Pending,
        RepairStatus::InProgress,
        RepairStatus::Repaired,
        RepairStatus::Delivered,
        RepairStatus::Cancelled,
    ];

    /// Wire / display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "pending",
            RepairStatus::InProgress => "in-progress",
            RepairStatus::Repaired => "repaired",
            RepairStatus::Delivered => "delivered",
            RepairStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true when no further transition is possible.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, RepairStatus::Delivered | RepairStatus::Cancelled)
    }

    /// Statuses reachable from this one in a single step.
    pub const fn next_statuses(&self) -> &'static [RepairStatus] {
        match self {
            RepairStatus::Pending => &[RepairStatus::InProgress, RepairStatus::Cancelled],
            RepairStatus::InProgress => &[RepairStatus::Repaired, RepairStatus::Cancelled],
            RepairStatus::Repaired => &[RepairStatus::Delivered],
            RepairStatus::Delivered | RepairStatus::Cancelled => &[],
        }
    }

    /// Checks the transition table.
    pub fn can_transition_to(&self, next: RepairStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Validates a move from `self` to `next`.
    ///
    /// ## Example
    /// ```rust
    /// use mobilefixer_core::status::RepairStatus;
    ///
    /// assert!(RepairStatus::Pending.transition_to(RepairStatus::InProgress).is_ok());
    /// assert!(RepairStatus::Pending.transition_to(RepairStatus::Delivered).is_err());
    /// ```
    pub fn transition_to(&self, next: RepairStatus) -> CoreResult<RepairStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                from: *self,
                to: next,
            })
        }
    }

    /// The coarse dashboard bucket, or `None` for cancelled jobs.
    pub const fn coarse(&self) -> Option<CoarseStatus> {
        match self {
            RepairStatus::Pending => Some(CoarseStatus::Pending),
            RepairStatus::InProgress => Some(CoarseStatus::InProgress),
            RepairStatus::Repaired => Some(CoarseStatus::Completed),
            RepairStatus::Delivered => Some(CoarseStatus::Delivered),
            RepairStatus::Cancelled => None,
        }
    }

    /// Label of the button that moves a repair forward from this stage.
    pub const fn next_action_label(&self) -> Option<&'static str> {
        match self {
            RepairStatus::Pending => Some("Start Repair"),
            RepairStatus::InProgress => Some("Mark Repaired"),
            RepairStatus::Repaired => Some("Mark Delivered"),
            RepairStatus::Delivered | RepairStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RepairStatus {
    type Err = ValidationError;

    /// Accepts the wire names plus the legacy `completed` alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(RepairStatus::Pending),
            "in-progress" | "in_progress" | "in progress" => Ok(RepairStatus::InProgress),
            "repaired" | "completed" => Ok(RepairStatus::Repaired),
            "delivered" => Ok(RepairStatus::Delivered),
            "cancelled" | "canceled" => Ok(RepairStatus::Cancelled),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: RepairStatus::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Coarse Status
// =============================================================================

/// Dashboard grouping of repair stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CoarseStatus {
    Pending,
    InProgress,
    Completed,
    Delivered,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_action_label() {
        assert_eq!(RepairStatus::Pending.next_action_label(), Some("Start Repair"));
        assert_eq!(RepairStatus::InProgress.next_action_label(), Some("Mark Repaired"));
        assert_eq!(RepairStatus::Repaired.next_action_label(), Some("Mark Delivered"));
        assert_eq!(RepairStatus::Delivered.next_action_label(), None);
        assert_eq!(RepairStatus::Cancelled.next_action_label(), None);
    }

    #[test]
    fn test_forward_path_is_legal() {
        let mut status = RepairStatus::Pending;
        for next in [
            RepairStatus::InProgress,
            RepairStatus::Repaired,
            RepairStatus::Delivered,
        ] {
            status = status.transition_to(next).unwrap();
        }
        assert_eq!(status, RepairStatus::Delivered);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        assert!(!RepairStatus::Pending.can_transition_to(RepairStatus::Repaired));
        assert!(!RepairStatus::Repaired.can_transition_to(RepairStatus::InProgress));
        assert!(!RepairStatus::Repaired.can_transition_to(RepairStatus::Cancelled));
        assert!(!RepairStatus::InProgress.can_transition_to(RepairStatus::InProgress));

        let err = RepairStatus::Delivered
            .transition_to(RepairStatus::Pending)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTransition {
                from: RepairStatus::Delivered,
                to: RepairStatus::Pending,
            }
        );
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for status in RepairStatus::ALL {
            assert_eq!(status.is_terminal(), status.next_statuses().is_empty());
        }
    }

    #[test]
    fn test_coarse_grouping() {
        assert_eq!(RepairStatus::Repaired.coarse(), Some(CoarseStatus::Completed));
        assert_eq!(RepairStatus::InProgress.coarse(), Some(CoarseStatus::InProgress));
        assert_eq!(RepairStatus::Cancelled.coarse(), None);
    }

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!("completed".parse::<RepairStatus>(), Ok(RepairStatus::Repaired));
        assert_eq!("In-Progress".parse::<RepairStatus>(), Ok(RepairStatus::InProgress));
        assert_eq!("canceled".parse::<RepairStatus>(), Ok(RepairStatus::Cancelled));
        assert!("shipped".parse::<RepairStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&RepairStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: RepairStatus = serde_json::from_str("\"repaired\"").unwrap();
        assert_eq!(back, RepairStatus::Repaired);
    }
}
