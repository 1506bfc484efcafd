use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::debug;

use advisor_core::errors::{Error, Result, StorageError};
use advisor_core::rates::{RateConfiguration, RateRepositoryTrait};

/// In-memory rate configuration store.
///
/// Holds exactly one record for the lifetime of the process. Reads hand out
/// a copy; `replace` swaps the whole record under the write lock, so a
/// concurrent reader never observes a partially updated configuration.
pub struct InMemoryRateRepository {
    rates: RwLock<RateConfiguration>,
}

impl InMemoryRateRepository {
    /// Creates a store seeded with the given configuration.
    pub fn new(initial: RateConfiguration) -> Self {
        Self {
            rates: RwLock::new(initial),
        }
    }

    fn poisoned<T>(_: PoisonError<T>) -> Error {
        Error::Storage(StorageError::LockPoisoned("rates".to_string()))
    }
}

impl Default for InMemoryRateRepository {
    fn default() -> Self {
        Self::new(RateConfiguration::default())
    }
}

#[async_trait]
impl RateRepositoryTrait for InMemoryRateRepository {
    fn get(&self) -> Result<RateConfiguration> {
        let rates = self.rates.read().map_err(Self::poisoned)?;
        Ok(rates.clone())
    }

    async fn replace(&self, new_rates: RateConfiguration) -> Result<()> {
        let mut rates = self.rates.write().map_err(Self::poisoned)?;
        debug!("Storing new rate configuration");
        *rates = new_rates;
        Ok(())
    }
}
