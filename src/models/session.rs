//! Per-session status classification and entry-level breakdowns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The payment status assigned to a single matched session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// A regular session, paid in the ordinary course.
    Completed,
    /// A session that happened but has not been paid for yet.
    PendingPayment,
    /// A cancelled session that does not count toward billing.
    Cancelled,
    /// A surplus same-day session consumed as payment for an earlier
    /// pending one.
    PaidForPending,
}

/// A surplus session that settled an earlier unpaid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidPendingSession {
    /// The date the settling session took place.
    pub paid_on: NaiveDate,
    /// The earlier pending date this payment covers.
    pub covers_pending_from: NaiveDate,
}

/// Informational per-client session counts for a payroll entry.
///
/// The breakdown never feeds the money columns. Billing is decided per
/// event by `Event::is_billable`; these counts exist so a reviewer can see
/// how an entry's session total decomposes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionBreakdown {
    /// Sessions paid in the ordinary course.
    pub completed_sessions: u32,
    /// Sessions billed but awaiting payment.
    pub pending_sessions: u32,
    /// Cancelled sessions excluded from billing.
    pub cancelled_sessions: u32,
    /// Surplus sessions consumed against earlier pending dates.
    #[serde(default)]
    pub paid_pending: Vec<PaidPendingSession>,
    /// Prior pending dates left unsettled after this period.
    pub unresolved_pending_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::PaidForPending).unwrap(),
            "\"paid_for_pending\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::PendingPayment).unwrap(),
            "\"pending_payment\""
        );
    }

    #[test]
    fn test_breakdown_defaults_to_zero_counts() {
        let breakdown = SessionBreakdown::default();
        assert_eq!(breakdown.completed_sessions, 0);
        assert_eq!(breakdown.pending_sessions, 0);
        assert_eq!(breakdown.cancelled_sessions, 0);
        assert!(breakdown.paid_pending.is_empty());
        assert_eq!(breakdown.unresolved_pending_count, 0);
    }

    #[test]
    fn test_paid_pending_round_trips() {
        let settlement = PaidPendingSession {
            paid_on: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            covers_pending_from: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
        };
        let json = serde_json::to_string(&settlement).unwrap();
        let parsed: PaidPendingSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settlement);
    }
}
