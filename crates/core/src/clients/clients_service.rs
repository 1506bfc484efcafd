use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::clients_model::{Client, ClientUpdate, NewClient};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::commission;
use crate::errors::Result;
use crate::portfolio::{NewPortfolioItem, PortfolioItem};
use crate::rates::RateRepositoryTrait;

/// Service for managing clients and their portfolios.
pub struct ClientService {
    repository: Arc<dyn ClientRepositoryTrait>,
    rate_repository: Arc<dyn RateRepositoryTrait>,
}

impl ClientService {
    /// Creates a new ClientService instance
    pub fn new(
        repository: Arc<dyn ClientRepositoryTrait>,
        rate_repository: Arc<dyn RateRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            rate_repository,
        }
    }
}

#[async_trait::async_trait]
impl ClientServiceTrait for ClientService {
    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        new_client.validate()?;

        let client = Client {
            id: Uuid::new_v4().to_string(),
            first_name: new_client.first_name,
            last_name: new_client.last_name,
            email: new_client.email,
            phone: new_client.phone,
            age: new_client.age,
            occupation: new_client.occupation,
            income: new_client.income,
            portfolio: Vec::new(),
            notes: new_client.notes,
            last_contact: new_client.last_contact,
        };

        debug!("Creating client {}", client.id);
        self.repository.create(client).await
    }

    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client> {
        client_update.validate()?;
        self.repository.update(client_update).await
    }

    async fn delete_client(&self, client_id: &str) -> Result<()> {
        self.repository.delete(client_id).await?;
        Ok(())
    }

    fn get_client(&self, client_id: &str) -> Result<Client> {
        self.repository.get_by_id(client_id)
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        self.repository.list()
    }

    async fn add_product(&self, client_id: &str, draft: NewPortfolioItem) -> Result<Client> {
        let rates = self.rate_repository.get()?;
        let quote = commission::price(&draft.selection(), draft.value, draft.is_existing, &rates)?;

        let item = PortfolioItem {
            id: Uuid::new_v4().to_string(),
            product_type: draft.product_type,
            variant: draft.variant,
            name: draft.display_name(),
            value: draft.value,
            created_date: Utc::now().naive_utc(),
            expiry_date: draft.expiry_date,
            details: draft.stamped_details(),
            is_existing: draft.is_existing,
            commission_kind: quote.kind,
            commission_input: quote.input,
            commission_final: quote.final_amount,
        };

        debug!(
            "Adding product {:?} to client {}, commission {}",
            item.product_type, client_id, item.commission_final
        );
        self.repository.add_item(client_id, item).await
    }

    async fn remove_product(&self, client_id: &str, item_id: &str) -> Result<Client> {
        self.repository.remove_item(client_id, item_id).await
    }

    async fn update_notes(&self, client_id: &str, notes: &str) -> Result<Client> {
        let client = self.repository.get_by_id(client_id)?;
        let update = ClientUpdate {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: client.phone,
            age: client.age,
            occupation: client.occupation,
            income: client.income,
            notes: notes.to_string(),
            last_contact: client.last_contact,
        };
        self.repository.update(update).await
    }
}
