//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod client;
mod employee;
mod event;
mod period;
mod report;
mod session;

pub use client::Client;
pub use employee::Employee;
pub use event::Event;
pub use period::PayrollPeriod;
pub use report::{EntryKind, PayrollEntry, PayrollReport, PayrollTotals};
pub use session::{PaidPendingSession, SessionBreakdown, SessionStatus};
