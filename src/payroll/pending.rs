//! Pending-payment classification.
//!
//! Assigns each bucketed event exactly one [`SessionStatus`] and settles
//! surplus same-day sessions against pending dates carried over from
//! earlier periods.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Event, PaidPendingSession, SessionBreakdown};

/// Unresolved pending session dates carried in from earlier periods.
///
/// Keyed by client name; dates are kept ascending so settlement always
/// consumes the oldest outstanding date first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCarryover {
    dates: HashMap<String, Vec<NaiveDate>>,
}

impl PendingCarryover {
    /// Creates an empty carryover, the common case for a first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the unresolved pending dates for a client. Replaces any
    /// earlier entry for the same client.
    pub fn insert(&mut self, client_name: impl Into<String>, mut dates: Vec<NaiveDate>) {
        dates.sort_unstable();
        self.dates.insert(client_name.into(), dates);
    }

    /// The unresolved pending dates for a client, oldest first.
    pub fn dates_for(&self, client_name: &str) -> &[NaiveDate] {
        self.dates.get(client_name).map_or(&[], Vec::as_slice)
    }
}

/// Classifies one client's bucketed events into session statuses.
///
/// Events are walked in chronological order. The first valid non-pending
/// event of each calendar day is a completed session; every further valid
/// non-pending event on the same day is a surplus payment and settles the
/// oldest outstanding carried-over pending date, when one remains. The
/// four categories are mutually exclusive and sum to the bucket size.
pub fn classify_sessions(events: &[Event], prior_pending: &[NaiveDate]) -> SessionBreakdown {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|e| e.start_time);

    let mut breakdown = SessionBreakdown::default();
    let mut unconsumed = prior_pending.iter();
    let mut current_day: Option<NaiveDate> = None;
    let mut sessions_today = 0u32;

    for event in ordered {
        if !event.is_billable() {
            breakdown.cancelled_sessions += 1;
            continue;
        }
        if event.is_pending_payment {
            breakdown.pending_sessions += 1;
            continue;
        }

        let day = event.start_date();
        if current_day != Some(day) {
            current_day = Some(day);
            sessions_today = 0;
        }
        sessions_today += 1;

        if sessions_today == 1 {
            breakdown.completed_sessions += 1;
        } else if let Some(covered) = unconsumed.next() {
            breakdown.paid_pending.push(PaidPendingSession {
                paid_on: day,
                covers_pending_from: *covered,
            });
        } else {
            // Surplus with nothing left to settle is just another
            // completed session.
            breakdown.completed_sessions += 1;
        }
    }

    breakdown.unresolved_pending_count = unconsumed.count() as u32;
    breakdown
}
