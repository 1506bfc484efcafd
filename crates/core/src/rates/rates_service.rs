use log::debug;
use std::sync::Arc;

use super::rates_model::RateConfiguration;
use super::rates_traits::{RateRepositoryTrait, RateServiceTrait};
use crate::errors::Result;

/// Service for managing the commission rate configuration.
pub struct RateService {
    repository: Arc<dyn RateRepositoryTrait>,
}

impl RateService {
    /// Creates a new RateService instance
    pub fn new(repository: Arc<dyn RateRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl RateServiceTrait for RateService {
    fn get_rates(&self) -> Result<RateConfiguration> {
        self.repository.get()
    }

    async fn replace_rates(&self, rates: RateConfiguration) -> Result<()> {
        rates.validate()?;
        debug!("Replacing commission rate configuration");
        self.repository.replace(rates).await
    }
}
