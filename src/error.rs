//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll reconciliation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested payroll period is malformed (start on or after end).
    #[error("Invalid payroll period: start {start} must be before end {end}")]
    InvalidPeriod {
        /// The start date of the rejected period.
        start: NaiveDate,
        /// The end date of the rejected period.
        end: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A client with the same name already exists in the employee's roster.
    #[error("Client '{name}' already exists for employee '{employee_id}'")]
    DuplicateClient {
        /// The owning employee.
        employee_id: String,
        /// The conflicting client name.
        name: String,
    },

    /// No client exists with the given id.
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// The client id that was not found.
        id: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// The event source could not deliver events for a calendar.
    #[error("Failed to fetch events for calendar '{calendar_id}': {message}")]
    EventFetchFailed {
        /// The calendar that could not be read.
        calendar_id: String,
        /// A description of the fetch failure.
        message: String,
    },

    /// A confirmation could not be persisted.
    ///
    /// A failed save must surface to the caller, never degrade to a silent
    /// no-op.
    #[error("Failed to save confirmation for title '{title}': {message}")]
    ConfirmationSaveFailed {
        /// The event title whose resolution was being saved.
        title: String,
        /// A description of the save failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
