//! Advisor Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the advisor CRM:
//! clients and their portfolio items, the commission engine, the editable
//! rate configuration, and the reporting layer. It is storage-agnostic and
//! defines traits that are implemented by the `storage-memory` crate.

pub mod clients;
pub mod commission;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod rates;
pub mod reporting;
pub mod session;

// Re-export common types from the portfolio and commission modules
pub use commission::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
