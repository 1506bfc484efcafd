//! Clients module - domain models, services, and traits.

mod clients_model;
#[cfg(test)]
mod clients_model_tests;
mod clients_service;
mod clients_traits;

// Re-export the public interface
pub use clients_model::{Client, ClientUpdate, NewClient};
pub use clients_service::ClientService;
pub use clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
