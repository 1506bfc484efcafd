use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::debug;

use advisor_core::clients::{Client, ClientRepositoryTrait, ClientUpdate};
use advisor_core::errors::{Error, Result, StorageError};
use advisor_core::portfolio::PortfolioItem;

/// In-memory client repository.
///
/// Clients are kept as whole aggregates in insertion order; the portfolio
/// travels with the client record.
#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<Vec<Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: PoisonError<T>) -> Error {
        Error::Storage(StorageError::LockPoisoned("clients".to_string()))
    }

    fn not_found(client_id: &str) -> Error {
        Error::Storage(StorageError::NotFound(format!("Client {}", client_id)))
    }

    fn index_of(clients: &[Client], client_id: &str) -> Result<usize> {
        clients
            .iter()
            .position(|client| client.id == client_id)
            .ok_or_else(|| Self::not_found(client_id))
    }
}

#[async_trait]
impl ClientRepositoryTrait for InMemoryClientRepository {
    async fn create(&self, client: Client) -> Result<Client> {
        let mut clients = self.clients.write().map_err(Self::poisoned)?;
        debug!("Inserting client {}", client.id);
        clients.push(client.clone());
        Ok(client)
    }

    async fn update(&self, client_update: ClientUpdate) -> Result<Client> {
        let mut clients = self.clients.write().map_err(Self::poisoned)?;
        let index = Self::index_of(&clients, &client_update.id)?;

        // Replace identity fields wholesale; id and portfolio are kept.
        let existing = &mut clients[index];
        existing.first_name = client_update.first_name;
        existing.last_name = client_update.last_name;
        existing.email = client_update.email;
        existing.phone = client_update.phone;
        existing.age = client_update.age;
        existing.occupation = client_update.occupation;
        existing.income = client_update.income;
        existing.notes = client_update.notes;
        existing.last_contact = client_update.last_contact;

        Ok(existing.clone())
    }

    async fn delete(&self, client_id: &str) -> Result<usize> {
        let mut clients = self.clients.write().map_err(Self::poisoned)?;
        let index = Self::index_of(&clients, client_id)?;
        debug!("Deleting client {}", client_id);
        clients.remove(index);
        Ok(1)
    }

    fn get_by_id(&self, client_id: &str) -> Result<Client> {
        let clients = self.clients.read().map_err(Self::poisoned)?;
        let index = Self::index_of(&clients, client_id)?;
        Ok(clients[index].clone())
    }

    fn list(&self) -> Result<Vec<Client>> {
        let clients = self.clients.read().map_err(Self::poisoned)?;
        Ok(clients.clone())
    }

    async fn add_item(&self, client_id: &str, item: PortfolioItem) -> Result<Client> {
        let mut clients = self.clients.write().map_err(Self::poisoned)?;
        let index = Self::index_of(&clients, client_id)?;
        debug!("Appending item {} to client {}", item.id, client_id);
        clients[index].portfolio.push(item);
        Ok(clients[index].clone())
    }

    async fn remove_item(&self, client_id: &str, item_id: &str) -> Result<Client> {
        let mut clients = self.clients.write().map_err(Self::poisoned)?;
        let index = Self::index_of(&clients, client_id)?;
        let before = clients[index].portfolio.len();
        clients[index].portfolio.retain(|item| item.id != item_id);
        if clients[index].portfolio.len() == before {
            return Err(Error::Storage(StorageError::NotFound(format!(
                "Portfolio item {} on client {}",
                item_id, client_id
            ))));
        }
        debug!("Removed item {} from client {}", item_id, client_id);
        Ok(clients[index].clone())
    }
}
