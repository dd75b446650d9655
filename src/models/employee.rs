//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee whose calendar is reconciled against their client roster.
///
/// The optional `supervision_price` overrides the configured supervision
/// session price for this employee only; the revenue split stays as
/// configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// The calendar this employee's sessions are read from.
    pub calendar_id: String,
    /// Per-employee override of the configured supervision session price.
    #[serde(default)]
    pub supervision_price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_supervision_price_defaults_to_none() {
        let json = r#"{
            "id": "emp_001",
            "name": "Eleni Georgiou",
            "email": "eleni@example.com",
            "calendar_id": "cal_primary"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.supervision_price, None);
    }

    #[test]
    fn test_supervision_price_round_trips() {
        let employee = Employee {
            id: "emp_002".to_string(),
            name: "Nikos Dimitriou".to_string(),
            email: "nikos@example.com".to_string(),
            calendar_id: "cal_secondary".to_string(),
            supervision_price: Some(Decimal::from_str("35.00").unwrap()),
        };
        let json = serde_json::to_string(&employee).unwrap();
        let parsed: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, employee);
    }
}
