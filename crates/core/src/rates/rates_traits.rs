//! Rate configuration repository and service traits.
//!
//! These traits define the contract for rate operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::rates_model::RateConfiguration;
use crate::errors::Result;

/// Trait defining the contract for rate configuration storage.
///
/// `replace` is atomic and total: callers express partial updates by
/// constructing a full new record, never by mutating fields in place.
#[async_trait]
pub trait RateRepositoryTrait: Send + Sync {
    /// Returns the current rate configuration.
    fn get(&self) -> Result<RateConfiguration>;

    /// Replaces the whole rate configuration.
    async fn replace(&self, rates: RateConfiguration) -> Result<()>;
}

/// Trait defining the contract for rate configuration service operations.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    /// Returns the current rate configuration.
    fn get_rates(&self) -> Result<RateConfiguration>;

    /// Validates and atomically replaces the rate configuration.
    ///
    /// Items priced before the replacement keep their stored commission.
    async fn replace_rates(&self, rates: RateConfiguration) -> Result<()>;
}
