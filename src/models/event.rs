//! Calendar event model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single calendar event pulled from an employee's calendar.
///
/// Events are the raw input to reconciliation: freeform titles typed by
/// humans, with payment state encoded out-of-band in the event colour.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Event;
/// use chrono::NaiveDate;
///
/// let event = Event {
///     id: "evt_001".to_string(),
///     title: "Maria Papadopoulou".to_string(),
///     start_time: NaiveDate::from_ymd_opt(2026, 1, 5)
///         .unwrap()
///         .and_hms_opt(10, 0, 0)
///         .unwrap(),
///     end_time: NaiveDate::from_ymd_opt(2026, 1, 5)
///         .unwrap()
///         .and_hms_opt(11, 0, 0)
///         .unwrap(),
///     color_id: None,
///     is_cancelled: false,
///     is_pending_payment: false,
/// };
/// assert!(event.is_billable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier from the event source.
    pub id: String,
    /// The freeform event title, usually a client name.
    pub title: String,
    /// When the session starts (calendar-local time).
    pub start_time: NaiveDateTime,
    /// When the session ends (calendar-local time).
    pub end_time: NaiveDateTime,
    /// The colour code carried by the source event, if any.
    #[serde(default)]
    pub color_id: Option<String>,
    /// Whether the session was cancelled.
    #[serde(default)]
    pub is_cancelled: bool,
    /// Whether the session happened but has not been paid for yet.
    #[serde(default)]
    pub is_pending_payment: bool,
}

impl Event {
    /// Returns true if this event counts toward billing.
    ///
    /// A cancelled session is still billable when it is flagged as pending
    /// payment: the slot was reserved and the client owes for it. Only a
    /// plain cancellation drops out of billing.
    pub fn is_billable(&self) -> bool {
        !(self.is_cancelled && !self.is_pending_payment)
    }

    /// Returns true if the title is empty or whitespace-only.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// The calendar date the session starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }
}
