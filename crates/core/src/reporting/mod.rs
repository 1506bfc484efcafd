//! Reporting module - derived aggregates over the client book.

mod reporting_model;
mod reporting_service;
#[cfg(test)]
mod reporting_service_tests;

// Re-export the public interface
pub use reporting_model::{CommissionBucket, KpiSnapshot};
pub use reporting_service::{
    commission_time_series, gross_managed_volume, kpi_snapshot, monthly_commission,
};
