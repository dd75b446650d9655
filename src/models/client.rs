//! Billed client model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client billed through an employee's calendar.
///
/// Each client carries its own session price and the split of that price
/// between the employee and the company. Client names are unique within an
/// employee's roster, a rule enforced at the store layer.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Client;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let client = Client {
///     id: "client_001".to_string(),
///     name: "Maria Papadopoulou".to_string(),
///     session_price: Decimal::from_str("50.00").unwrap(),
///     employee_share: Decimal::from_str("22.50").unwrap(),
///     company_share: Decimal::from_str("27.50").unwrap(),
///     employee_id: "emp_001".to_string(),
///     has_pending_balance: false,
/// };
/// assert_eq!(client.session_price, client.employee_share + client.company_share);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier for the client.
    pub id: String,
    /// Display name, matched against event titles.
    pub name: String,
    /// Price charged per session.
    pub session_price: Decimal,
    /// Portion of the session price paid to the employee.
    pub employee_share: Decimal,
    /// Portion of the session price retained by the company.
    pub company_share: Decimal,
    /// The employee whose roster this client belongs to.
    pub employee_id: String,
    /// Whether the client carries unresolved pending sessions from
    /// earlier periods.
    #[serde(default)]
    pub has_pending_balance: bool,
}
