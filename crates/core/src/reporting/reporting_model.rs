//! Reporting domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the commission time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionBucket {
    /// Short Czech month label for chart axes ("Led".."Pro").
    pub label: String,
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub total: Decimal,
}

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    /// Sum of absolute values over non-insurance portfolio items. Loans
    /// count by absolute volume; this is deliberately a gross figure, not
    /// a net asset position.
    pub gross_managed_volume: Decimal,
    pub active_clients: usize,
    /// Commission earned on products created in the reference month.
    pub monthly_commission: Decimal,
}
