//! Payroll report models.
//!
//! The output side of a calculation run: per-client entries, cumulative
//! totals, and the leftovers (unmatched events and uncertain matches) that
//! need human attention.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::UncertainMatch;
use crate::models::{Event, PayrollPeriod, SessionBreakdown};

/// What kind of work a payroll entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Ordinary client sessions.
    Client,
    /// Pooled supervision sessions.
    Supervision,
}

/// One line of a payroll report: a single client (or the supervision
/// pool) with its matched sessions and the money they produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The client this entry bills for, or the supervision pool label.
    pub client_name: String,
    /// Whether this entry is a client or the supervision pool.
    pub kind: EntryKind,
    /// Price per session used for this entry.
    pub session_price: Decimal,
    /// Employee's share of each session.
    pub employee_share: Decimal,
    /// Company's share of each session.
    pub company_share: Decimal,
    /// Number of billable sessions in the period.
    pub sessions_count: u32,
    /// `sessions_count * session_price`, rounded to cents.
    pub total_revenue: Decimal,
    /// `sessions_count * employee_share`, rounded to cents.
    pub employee_earnings: Decimal,
    /// `sessions_count * company_share`, rounded to cents.
    pub company_earnings: Decimal,
    /// The events that produced this entry, in input order.
    pub events: Vec<Event>,
    /// Informational session-status counts.
    pub breakdown: SessionBreakdown,
}

/// Cumulative totals across all entries of a report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Total billable sessions across all entries.
    pub total_sessions: u32,
    /// Sum of entry revenues, re-rounded to cents after each addition.
    pub total_revenue: Decimal,
    /// Sum of employee earnings, re-rounded to cents after each addition.
    pub total_employee_earnings: Decimal,
    /// Sum of company earnings, re-rounded to cents after each addition.
    pub total_company_earnings: Decimal,
}

/// The complete result of one payroll calculation run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollPeriod, PayrollReport, PayrollTotals};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let report = PayrollReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     employee_id: "emp_001".to_string(),
///     period: PayrollPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     },
///     entries: vec![],
///     totals: PayrollTotals::default(),
///     unmatched_events: vec![],
///     uncertain_matches: vec![],
/// };
/// assert_eq!(report.totals.total_sessions, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this calculation run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The employee the report belongs to.
    pub employee_id: String,
    /// The period the report covers.
    pub period: PayrollPeriod,
    /// Per-client entries, in roster match order.
    pub entries: Vec<PayrollEntry>,
    /// Cumulative totals across all entries.
    pub totals: PayrollTotals,
    /// Events whose titles matched no client at all.
    pub unmatched_events: Vec<Event>,
    /// Events that matched below the confidence threshold and need a
    /// human decision.
    pub uncertain_matches: Vec<UncertainMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_entry_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Supervision).unwrap(),
            "\"supervision\""
        );
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = PayrollReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            employee_id: "emp_001".to_string(),
            period: PayrollPeriod {
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            },
            entries: vec![PayrollEntry {
                client_name: "Maria Papadopoulou".to_string(),
                kind: EntryKind::Client,
                session_price: dec("50.00"),
                employee_share: dec("22.50"),
                company_share: dec("27.50"),
                sessions_count: 3,
                total_revenue: dec("150.00"),
                employee_earnings: dec("67.50"),
                company_earnings: dec("82.50"),
                events: vec![],
                breakdown: SessionBreakdown::default(),
            }],
            totals: PayrollTotals {
                total_sessions: 3,
                total_revenue: dec("150.00"),
                total_employee_earnings: dec("67.50"),
                total_company_earnings: dec("82.50"),
            },
            unmatched_events: vec![],
            uncertain_matches: vec![],
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: PayrollReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
