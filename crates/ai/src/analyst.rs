//! Portfolio analysis service.
//!
//! Produces a short Czech markdown briefing over one client's data. The
//! result is purely additive for the caller: on any failure the service
//! returns a fixed unavailability message instead of an error.

use async_trait::async_trait;
use log::warn;

use advisor_core::clients::Client;

use crate::error::AiError;
use crate::provider::{complete, GeminiConfig};
use crate::types::ClientSnapshot;

/// Shown when the analysis cannot be generated.
pub const ANALYSIS_UNAVAILABLE: &str =
    "Omlouváme se, AI asistent je momentálně nedostupný. Zkontrolujte API klíč nebo připojení.";

/// Trait for generating a portfolio analysis narrative.
#[async_trait]
pub trait PortfolioAnalystTrait: Send + Sync {
    /// Analyze a client's portfolio and return a markdown-flavored Czech
    /// briefing. Never fails; a fallback message stands in for errors.
    async fn analyze_portfolio(&self, client: &Client) -> String;
}

/// Gemini-backed portfolio analyst.
pub struct GeminiPortfolioAnalyst {
    config: GeminiConfig,
}

impl GeminiPortfolioAnalyst {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    async fn analyze_with_llm(&self, client: &Client) -> Result<String, AiError> {
        let snapshot = ClientSnapshot::from_client(client);
        let snapshot_json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        let prompt = format!(
            "Jsi expertní AI asistent pro finančního poradce. Analyzuj následující data \
klienta a poskytni strukturovanou zprávu v češtině.\n\n\
DŮLEŽITÉ: Vezmi v úvahu \"Poznámky\", které napsal poradce, a zahrň je do kontextu analýzy.\n\n\
Data klienta (JSON):\n{snapshot_json}\n\n\
Tvůj úkol:\n\
1. Identifikuj hlavní finanční rizika.\n\
2. Navrhni 3 konkrétní kroky pro optimalizaci portfolia na základě věku, příjmu a poznámek.\n\
3. Navrhni téma pro příští schůzku.\n\n\
Formátuj výstup pomocí Markdown (použij nadpisy, odrážky). Buď stručný, profesionální a věcný."
        );

        let response = complete(&self.config, &prompt).await?;
        if response.trim().is_empty() {
            return Err(AiError::InvalidResponse("empty completion".to_string()));
        }
        Ok(response)
    }
}

#[async_trait]
impl PortfolioAnalystTrait for GeminiPortfolioAnalyst {
    async fn analyze_portfolio(&self, client: &Client) -> String {
        match self.analyze_with_llm(client).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Portfolio analysis failed, using fallback: {}", e);
                ANALYSIS_UNAVAILABLE.to_string()
            }
        }
    }
}

/// A fake analyst for testing that returns a deterministic narrative.
pub struct FakePortfolioAnalyst {
    /// Fixed narrative to return, or None to simulate an outage.
    pub fixed_analysis: Option<String>,
}

impl FakePortfolioAnalyst {
    pub fn with_analysis(text: &str) -> Self {
        Self {
            fixed_analysis: Some(text.to_string()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            fixed_analysis: None,
        }
    }
}

#[async_trait]
impl PortfolioAnalystTrait for FakePortfolioAnalyst {
    async fn analyze_portfolio(&self, _client: &Client) -> String {
        match &self.fixed_analysis {
            Some(text) => text.clone(),
            None => ANALYSIS_UNAVAILABLE.to_string(),
        }
    }
}
