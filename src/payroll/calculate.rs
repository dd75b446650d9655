//! The payroll aggregation pass.
//!
//! Turns a period's events, an employee's roster, and the confirmation
//! ledger into a [`PayrollReport`]. One synchronous pass: filter, match,
//! bucket, aggregate.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SupervisionConfig;
use crate::confirmations::{ConfirmationMap, MatchResolution};
use crate::error::{EngineError, EngineResult};
use crate::matching::{
    UncertainMatch, find_client_matches, find_client_matches_with_confidence,
};
use crate::models::{
    Client, Employee, EntryKind, Event, PayrollEntry, PayrollPeriod, PayrollReport, PayrollTotals,
};
use crate::payroll::pending::{PendingCarryover, classify_sessions};

/// Entry name used for the pooled supervision pseudo-client.
pub const SUPERVISION_ENTRY_NAME: &str = "supervision";

/// Computes the payroll report for one employee over one period.
///
/// Events outside the period (compared on start date, bounds inclusive)
/// and blank-titled events are dropped before matching. Confidently
/// matched events are bucketed per client or into the supervision pool;
/// the rest are resolved through the confirmation map, surfaced as
/// uncertain matches, or reported unmatched.
///
/// Money follows the cumulative rounding rule: every per-entry total is
/// `sessions × price` rounded to cents, and report totals are re-rounded
/// after each addition.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when the period start is not
/// strictly before its end. No partial report is ever produced.
pub fn calculate_payroll(
    employee: &Employee,
    clients: &[Client],
    events: &[Event],
    period: PayrollPeriod,
    supervision: Option<&SupervisionConfig>,
    confirmations: &ConfirmationMap,
    carryover: &PendingCarryover,
) -> EngineResult<PayrollReport> {
    if period.start_date >= period.end_date {
        return Err(EngineError::InvalidPeriod {
            start: period.start_date,
            end: period.end_date,
        });
    }

    info!(
        employee_id = %employee.id,
        start = %period.start_date,
        end = %period.end_date,
        events = events.len(),
        "calculating payroll"
    );

    let client_names: Vec<String> = clients.iter().map(|c| c.name.clone()).collect();
    let keywords: Vec<String> = supervision
        .filter(|s| s.enabled)
        .map(|s| s.keywords.clone())
        .unwrap_or_default();

    let mut client_buckets: HashMap<String, Vec<Event>> = HashMap::new();
    let mut supervision_bucket: Vec<Event> = Vec::new();
    let mut unmatched_events: Vec<Event> = Vec::new();
    let mut uncertain_matches: Vec<UncertainMatch> = Vec::new();

    for event in events {
        if !period.contains_date(event.start_date()) || event.has_blank_title() {
            continue;
        }

        let confident = find_client_matches(&event.title, &client_names, &keywords);
        if let Some(top) = confident.first() {
            if keywords.contains(&top.client_name) {
                supervision_bucket.push(event.clone());
            } else {
                client_buckets
                    .entry(top.client_name.clone())
                    .or_default()
                    .push(event.clone());
            }
            continue;
        }

        // A saved resolution beats today's candidate generation, so a
        // decision stays honored even after the roster changes.
        match confirmations.resolve(&event.title) {
            Some(MatchResolution::Confirmed(name)) => {
                if client_names.contains(name) {
                    client_buckets
                        .entry(name.clone())
                        .or_default()
                        .push(event.clone());
                } else {
                    debug!(
                        title = %event.title,
                        client = %name,
                        "confirmed client no longer on roster, dropping event"
                    );
                }
                continue;
            }
            Some(MatchResolution::Rejected) => continue,
            None => {}
        }

        let uncertain_candidates: Vec<_> =
            find_client_matches_with_confidence(&event.title, &client_names, &keywords)
                .into_iter()
                .filter(|c| !c.confidence.is_confident())
                .collect();
        match UncertainMatch::from_candidates(
            event.id.clone(),
            event.title.clone(),
            uncertain_candidates,
        ) {
            Some(uncertain) => uncertain_matches.push(uncertain),
            None => unmatched_events.push(event.clone()),
        }
    }

    let mut entries: Vec<PayrollEntry> = Vec::new();
    let mut totals = PayrollTotals::default();

    for client in clients {
        let Some(bucket) = client_buckets.get(&client.name) else {
            continue;
        };
        let valid: Vec<Event> = bucket.iter().filter(|e| e.is_billable()).cloned().collect();
        if valid.is_empty() {
            continue;
        }

        let sessions_count = valid.len() as u32;
        let entry = PayrollEntry {
            client_name: client.name.clone(),
            kind: EntryKind::Client,
            session_price: client.session_price,
            employee_share: client.employee_share,
            company_share: client.company_share,
            sessions_count,
            total_revenue: times_rounded(client.session_price, sessions_count),
            employee_earnings: times_rounded(client.employee_share, sessions_count),
            company_earnings: times_rounded(client.company_share, sessions_count),
            events: valid,
            breakdown: classify_sessions(bucket, carryover.dates_for(&client.name)),
        };
        accumulate(&mut totals, &entry);
        entries.push(entry);
    }

    if let Some(config) = supervision.filter(|s| s.enabled) {
        let valid: Vec<Event> = supervision_bucket
            .iter()
            .filter(|e| e.is_billable())
            .cloned()
            .collect();
        if !valid.is_empty() {
            let session_price = employee.supervision_price.unwrap_or(config.session_price);
            let sessions_count = valid.len() as u32;
            let entry = PayrollEntry {
                client_name: SUPERVISION_ENTRY_NAME.to_string(),
                kind: EntryKind::Supervision,
                session_price,
                employee_share: config.employee_share,
                company_share: config.company_share,
                sessions_count,
                total_revenue: times_rounded(session_price, sessions_count),
                employee_earnings: times_rounded(config.employee_share, sessions_count),
                company_earnings: times_rounded(config.company_share, sessions_count),
                events: valid,
                breakdown: classify_sessions(&supervision_bucket, &[]),
            };
            accumulate(&mut totals, &entry);
            entries.push(entry);
        }
    }

    debug!(
        entries = entries.len(),
        unmatched = unmatched_events.len(),
        uncertain = uncertain_matches.len(),
        "payroll calculation finished"
    );

    Ok(PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        employee_id: employee.id.clone(),
        period,
        entries,
        totals,
        unmatched_events,
        uncertain_matches,
    })
}

/// `price × count`, rounded to the nearest cent.
fn times_rounded(price: Decimal, count: u32) -> Decimal {
    round_cents(price * Decimal::from(count))
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Adds an entry into the running totals, re-rounding after each
/// addition so drift never compounds across entries.
fn accumulate(totals: &mut PayrollTotals, entry: &PayrollEntry) {
    totals.total_sessions += entry.sessions_count;
    totals.total_revenue = round_cents(totals.total_revenue + entry.total_revenue);
    totals.total_employee_earnings =
        round_cents(totals.total_employee_earnings + entry.employee_earnings);
    totals.total_company_earnings =
        round_cents(totals.total_company_earnings + entry.company_earnings);
}
