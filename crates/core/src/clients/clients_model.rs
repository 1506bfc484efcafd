//! Client domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::PortfolioItem;

/// Domain model representing a client in the advisor's book.
///
/// The `id` is immutable once created and the portfolio is exclusively
/// owned by the client; no item is ever shared across clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub occupation: String,
    /// Monthly income in CZK.
    pub income: Decimal,
    pub portfolio: Vec<PortfolioItem>,
    pub notes: String,
    pub last_contact: Option<NaiveDate>,
}

impl Client {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input model for creating a new client.
///
/// A client is always created with an empty portfolio; products are
/// appended one at a time afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub age: u32,
    #[serde(default)]
    pub occupation: String,
    pub income: Decimal,
    #[serde(default)]
    pub notes: String,
    pub last_contact: Option<NaiveDate>,
}

impl NewClient {
    /// Validates the new client data.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Client name cannot be empty".to_string(),
            )));
        }
        if self.income < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing client.
///
/// The portfolio is deliberately absent: it can only change through the
/// add/remove product operations, never through a client update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub occupation: String,
    pub income: Decimal,
    pub notes: String,
    pub last_contact: Option<NaiveDate>,
}

impl ClientUpdate {
    /// Validates the client update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Client name cannot be empty".to_string(),
            )));
        }
        if self.income < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
