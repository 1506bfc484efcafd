//! Client repository and service traits.
//!
//! These traits define the contract for client operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::clients_model::{Client, ClientUpdate, NewClient};
use crate::errors::Result;
use crate::portfolio::{NewPortfolioItem, PortfolioItem};

/// Trait defining the contract for Client repository operations.
///
/// Clients are stored as whole aggregates: the portfolio travels with the
/// client record and all mutations are whole-object replacements.
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    /// Inserts a fully constructed client.
    async fn create(&self, client: Client) -> Result<Client>;

    /// Replaces the identity fields of an existing client, keeping its
    /// portfolio untouched.
    async fn update(&self, client_update: ClientUpdate) -> Result<Client>;

    /// Deletes a client by ID. Returns the number of deleted records.
    async fn delete(&self, client_id: &str) -> Result<usize>;

    /// Retrieves a client by ID.
    fn get_by_id(&self, client_id: &str) -> Result<Client>;

    /// Lists all clients in insertion order.
    fn list(&self) -> Result<Vec<Client>>;

    /// Appends a priced portfolio item to a client.
    async fn add_item(&self, client_id: &str, item: PortfolioItem) -> Result<Client>;

    /// Removes a portfolio item from a client.
    async fn remove_item(&self, client_id: &str, item_id: &str) -> Result<Client>;
}

/// Trait defining the contract for Client service operations.
///
/// The service layer handles validation and commission pricing and
/// coordinates between the client repository and the rate configuration.
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    /// Creates a new client with an empty portfolio.
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;

    /// Updates an existing client's identity fields.
    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client>;

    /// Deletes a client. Immediate and irreversible within the session.
    async fn delete_client(&self, client_id: &str) -> Result<()>;

    /// Retrieves a client by ID.
    fn get_client(&self, client_id: &str) -> Result<Client>;

    /// Lists all clients.
    fn list_clients(&self) -> Result<Vec<Client>>;

    /// Prices a product draft against the current rate configuration and
    /// appends it to the client's portfolio. The computed commission is
    /// frozen at this point and never recomputed.
    async fn add_product(&self, client_id: &str, draft: NewPortfolioItem) -> Result<Client>;

    /// Removes a product from a client's portfolio.
    async fn remove_product(&self, client_id: &str, item_id: &str) -> Result<Client>;

    /// Replaces the free-text notes of a client.
    async fn update_notes(&self, client_id: &str, notes: &str) -> Result<Client>;
}
