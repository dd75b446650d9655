//! Collaborator contracts consumed by the engine.
//!
//! The calculation core never touches network or disk itself. Whatever
//! fetches calendars or persists rosters implements these traits and
//! hands the engine already-materialized values.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Client, Employee, Event};

/// Read access to an external calendar.
pub trait EventSource: Send + Sync {
    /// Fetches the events of a calendar whose start date falls within
    /// `[start, end]`, bounds inclusive.
    fn events_for_period(
        &self,
        calendar_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Event>>;

    /// Lists the calendars available to the engine.
    fn calendar_list(&self) -> EngineResult<Vec<String>>;
}

/// Persistence for client rosters.
///
/// Implementations enforce the roster uniqueness rule: at most one client
/// per (employee id, name) pair.
pub trait ClientStore: Send + Sync {
    /// Adds a client, rejecting a duplicate (employee, name) pair.
    fn create_client(&self, client: Client) -> EngineResult<()>;

    /// Replaces a client by id, keeping the uniqueness rule intact.
    fn update_client(&self, client: Client) -> EngineResult<()>;

    /// Removes a client by id.
    fn delete_client(&self, id: &str) -> EngineResult<()>;

    /// Looks up a client by id.
    fn client(&self, id: &str) -> EngineResult<Client>;

    /// All clients on one employee's roster, in insertion order.
    fn clients_for_employee(&self, employee_id: &str) -> EngineResult<Vec<Client>>;

    /// The duplicate-detection lookup behind the uniqueness rule.
    fn client_by_employee_and_name(
        &self,
        employee_id: &str,
        name: &str,
    ) -> EngineResult<Option<Client>>;
}

/// Persistence for employee records.
pub trait EmployeeStore: Send + Sync {
    /// Adds an employee record.
    fn create_employee(&self, employee: Employee) -> EngineResult<()>;

    /// Replaces an employee record by id.
    fn update_employee(&self, employee: Employee) -> EngineResult<()>;

    /// Removes an employee by id.
    fn delete_employee(&self, id: &str) -> EngineResult<()>;

    /// Looks up an employee by id.
    fn employee(&self, id: &str) -> EngineResult<Employee>;

    /// All employees, in insertion order.
    fn employees(&self) -> EngineResult<Vec<Employee>>;
}
