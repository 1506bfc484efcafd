//! Session module - the persisted user identity record.

mod session_model;
mod session_service;
mod session_traits;

// Re-export the public interface
pub use session_model::UserProfile;
pub use session_service::SessionService;
pub use session_traits::{SessionServiceTrait, SessionStoreTrait};
