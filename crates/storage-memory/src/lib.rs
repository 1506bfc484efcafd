//! In-memory storage implementation for the advisor CRM.
//!
//! This crate implements the repository traits defined in `advisor-core`
//! with process-local state. The application holds no database in this
//! version: clients and the rate configuration live only for the running
//! session, and the user identity record sits in a small key-value store
//! written as full-record overwrites.
//!
//! All repositories are cheap to clone behind an `Arc` and guard their
//! state with an `RwLock`; every mutation is a whole-object replacement
//! applied synchronously.

pub mod clients;
pub mod rates;
pub mod session;

// Re-export repository implementations
pub use clients::InMemoryClientRepository;
pub use rates::InMemoryRateRepository;
pub use session::InMemorySessionStore;

// Re-export from advisor-core for convenience
pub use advisor_core::errors::{Error, Result, StorageError};
