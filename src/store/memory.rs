//! In-memory backends for the collaborator contracts.
//!
//! Used by tests and by callers that materialize their data elsewhere.
//! All three are read-write-locked so concurrent calculations can read
//! them freely.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Client, Employee, Event};
use crate::store::traits::{ClientStore, EmployeeStore, EventSource};

/// Event source backed by per-calendar in-memory vectors.
#[derive(Debug, Default)]
pub struct InMemoryEventSource {
    calendars: RwLock<Vec<(String, Vec<Event>)>>,
}

impl InMemoryEventSource {
    /// Creates an empty source with no calendars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds events to a calendar, creating the calendar on first use.
    pub fn insert_events(&self, calendar_id: &str, events: Vec<Event>) {
        let mut calendars = self
            .calendars
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match calendars.iter_mut().find(|(id, _)| id == calendar_id) {
            Some((_, existing)) => existing.extend(events),
            None => calendars.push((calendar_id.to_string(), events)),
        }
    }
}

impl EventSource for InMemoryEventSource {
    fn events_for_period(
        &self,
        calendar_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Event>> {
        let calendars = self
            .calendars
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let Some((_, events)) = calendars.iter().find(|(id, _)| id == calendar_id) else {
            return Err(EngineError::EventFetchFailed {
                calendar_id: calendar_id.to_string(),
                message: "unknown calendar".to_string(),
            });
        };
        Ok(events
            .iter()
            .filter(|e| {
                let date = e.start_date();
                date >= start && date <= end
            })
            .cloned()
            .collect())
    }

    fn calendar_list(&self) -> EngineResult<Vec<String>> {
        let calendars = self
            .calendars
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(calendars.iter().map(|(id, _)| id.clone()).collect())
    }
}

/// Client roster store backed by an in-memory vector.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    clients: RwLock<Vec<Client>>,
}

impl InMemoryClientStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStore for InMemoryClientStore {
    fn create_client(&self, client: Client) -> EngineResult<()> {
        let mut clients = self
            .clients
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if clients
            .iter()
            .any(|c| c.employee_id == client.employee_id && c.name == client.name)
        {
            return Err(EngineError::DuplicateClient {
                employee_id: client.employee_id,
                name: client.name,
            });
        }
        debug!(client_id = %client.id, employee_id = %client.employee_id, "creating client");
        clients.push(client);
        Ok(())
    }

    fn update_client(&self, client: Client) -> EngineResult<()> {
        let mut clients = self
            .clients
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if clients
            .iter()
            .any(|c| c.id != client.id && c.employee_id == client.employee_id && c.name == client.name)
        {
            return Err(EngineError::DuplicateClient {
                employee_id: client.employee_id,
                name: client.name,
            });
        }
        let Some(existing) = clients.iter_mut().find(|c| c.id == client.id) else {
            return Err(EngineError::ClientNotFound { id: client.id });
        };
        *existing = client;
        Ok(())
    }

    fn delete_client(&self, id: &str) -> EngineResult<()> {
        let mut clients = self
            .clients
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Err(EngineError::ClientNotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn client(&self, id: &str) -> EngineResult<Client> {
        let clients = self
            .clients
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| EngineError::ClientNotFound { id: id.to_string() })
    }

    fn clients_for_employee(&self, employee_id: &str) -> EngineResult<Vec<Client>> {
        let clients = self
            .clients
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(clients
            .iter()
            .filter(|c| c.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn client_by_employee_and_name(
        &self,
        employee_id: &str,
        name: &str,
    ) -> EngineResult<Option<Client>> {
        let clients = self
            .clients
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(clients
            .iter()
            .find(|c| c.employee_id == employee_id && c.name == name)
            .cloned())
    }
}

/// Employee store backed by an in-memory vector.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn create_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut employees = self
            .employees
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        debug!(employee_id = %employee.id, "creating employee");
        employees.push(employee);
        Ok(())
    }

    fn update_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut employees = self
            .employees
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(existing) = employees.iter_mut().find(|e| e.id == employee.id) else {
            return Err(EngineError::EmployeeNotFound { id: employee.id });
        };
        *existing = employee;
        Ok(())
    }

    fn delete_employee(&self, id: &str) -> EngineResult<()> {
        let mut employees = self
            .employees
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(EngineError::EmployeeNotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn employee(&self, id: &str) -> EngineResult<Employee> {
        let employees = self
            .employees
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    fn employees(&self) -> EngineResult<Vec<Employee>> {
        let employees = self
            .employees
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(employees.clone())
    }
}
