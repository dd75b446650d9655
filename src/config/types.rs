//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level engine configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Supervision pooling settings; absent means supervision handling
    /// is disabled entirely.
    #[serde(default)]
    pub supervision: Option<SupervisionConfig>,
}

/// Supervision pooling settings.
///
/// Events whose titles contain any of the configured keywords are pooled
/// into one synthetic payroll entry billed at these prices instead of
/// per-client pricing.
#[derive(Debug, Clone, Deserialize)]
pub struct SupervisionConfig {
    /// Whether supervision pooling is active.
    pub enabled: bool,
    /// Keywords that route an event into the supervision pool.
    pub keywords: Vec<String>,
    /// Price per supervision session.
    pub session_price: Decimal,
    /// Employee's share of each supervision session.
    pub employee_share: Decimal,
    /// Company's share of each supervision session.
    pub company_share: Decimal,
}
