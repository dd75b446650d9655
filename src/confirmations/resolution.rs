//! Resolution type for uncertain-match decisions.

use serde::{Deserialize, Serialize};

/// A human decision on an uncertain match.
///
/// An explicit enum rather than a sentinel string, so a rejection can
/// never collide with a real client name.
///
/// # Example
///
/// ```
/// use payroll_engine::confirmations::MatchResolution;
///
/// let confirmed = MatchResolution::Confirmed("Maria Papadopoulou".to_string());
/// assert!(matches!(confirmed, MatchResolution::Confirmed(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResolution {
    /// The title belongs to the named client.
    Confirmed(String),
    /// The title belongs to no client; never surface it again.
    Rejected,
}
