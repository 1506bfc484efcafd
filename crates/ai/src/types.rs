//! Shared DTOs for the AI collaborator services.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use advisor_core::clients::Client;

/// Kind of outreach suggested by the daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
}

/// Priority assigned to a suggested activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One suggested sales or service activity for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub client_name: String,
    /// Short reason for the activity, in Czech.
    pub reason: String,
    pub priority: Priority,
}

/// Compact per-client view handed to the daily planner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDigest {
    pub name: String,
    pub age: u32,
    pub last_contact: Option<NaiveDate>,
    /// Product types with their expiry dates, e.g. "Hypotéka (Exp: 2026-03-01)".
    pub portfolio_summary: String,
    pub notes: String,
}

impl ClientDigest {
    pub fn from_client(client: &Client) -> Self {
        let portfolio_summary = client
            .portfolio
            .iter()
            .map(|item| {
                let expiry = item
                    .expiry_date
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                format!("{} (Exp: {})", item.product_type.label(), expiry)
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: client.full_name(),
            age: client.age,
            last_contact: client.last_contact,
            portfolio_summary,
            notes: client.notes.clone(),
        }
    }
}

/// One portfolio line inside a [`ClientSnapshot`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLine {
    #[serde(rename = "type")]
    pub product_type: String,
    pub name: String,
    pub value: Decimal,
    pub details: String,
    pub expiry: Option<NaiveDate>,
    /// "Sjednáno jinde/dříve" for external products, "Aktivní správa" otherwise.
    pub management: String,
}

/// Read-only snapshot of one client handed to the portfolio analyst.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSnapshot {
    pub name: String,
    pub age: u32,
    pub income: Decimal,
    pub occupation: String,
    pub portfolio: Vec<PortfolioLine>,
    pub notes: String,
}

impl ClientSnapshot {
    pub fn from_client(client: &Client) -> Self {
        let portfolio = client
            .portfolio
            .iter()
            .map(|item| PortfolioLine {
                product_type: item.product_type.label().to_string(),
                name: item.name.clone(),
                value: item.value,
                details: item.details.clone(),
                expiry: item.expiry_date,
                management: if item.is_existing {
                    "Sjednáno jinde/dříve".to_string()
                } else {
                    "Aktivní správa".to_string()
                },
            })
            .collect();

        Self {
            name: client.full_name(),
            age: client.age,
            income: client.income,
            occupation: client.occupation.clone(),
            portfolio,
            notes: client.notes.clone(),
        }
    }
}
