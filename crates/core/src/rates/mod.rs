//! Rates module - the editable commission rate configuration.

mod rates_model;
mod rates_service;
mod rates_traits;

// Re-export the public interface
pub use rates_model::RateConfiguration;
pub use rates_service::RateService;
pub use rates_traits::{RateRepositoryTrait, RateServiceTrait};
