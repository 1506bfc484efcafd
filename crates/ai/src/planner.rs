//! Daily activity planner.
//!
//! Asks the model for 3-5 prioritized outreach activities over the whole
//! client book and parses the structured JSON answer defensively: fenced
//! output is unwrapped, malformed array elements are skipped, and anything
//! unusable degrades to an empty plan.

use async_trait::async_trait;
use log::warn;

use advisor_core::clients::Client;

use crate::error::AiError;
use crate::provider::{complete, GeminiConfig};
use crate::types::{ClientDigest, DailyActivity};

/// Trait for generating a prioritized daily activity plan.
#[async_trait]
pub trait DailyPlannerTrait: Send + Sync {
    /// Suggest activities for today across the whole client book.
    /// Never fails; an empty plan stands in for errors.
    async fn generate_daily_plan(&self, clients: &[Client]) -> Vec<DailyActivity>;
}

/// Parses the model's plan output into activities.
///
/// Markdown code fences are stripped first. The payload must be a JSON
/// array; elements that do not match the activity shape are dropped
/// individually so one bad element does not void the rest of the plan.
pub fn parse_daily_plan(raw: &str) -> Vec<DailyActivity> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let values: Vec<serde_json::Value> = match serde_json::from_str(trimmed) {
        Ok(values) => values,
        Err(e) => {
            warn!("Daily plan response is not a JSON array: {}", e);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(activity) => Some(activity),
            Err(e) => {
                warn!("Skipping malformed plan activity: {}", e);
                None
            }
        })
        .collect()
}

/// Gemini-backed daily planner.
pub struct GeminiDailyPlanner {
    config: GeminiConfig,
}

impl GeminiDailyPlanner {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    async fn plan_with_llm(&self, clients: &[Client]) -> Result<Vec<DailyActivity>, AiError> {
        let digests: Vec<ClientDigest> = clients.iter().map(ClientDigest::from_client).collect();
        let digests_json =
            serde_json::to_string(&digests).map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        let prompt = format!(
            "Jsi AI manažer klientského kmene finančního poradce. Tvým úkolem je vygenerovat \
3-5 klíčových prodejních nebo servisních aktivit pro dnešní den na základě dat klientů.\n\n\
Hledej příležitosti jako:\n\
- Dlouhá doba od posledního kontaktu (> 3 měsíce)\n\
- Expirující produkty (fixace hypoték)\n\
- Cross-sell příležitosti (např. má hypotéku ale nemá pojištění)\n\
- Klíčová slova v poznámkách (např. \"chtěl řešit investice\")\n\n\
Data klientů:\n{digests_json}\n\n\
Vrať POUZE validní JSON pole (bez markdownu, bez textu okolo) v tomto formátu:\n\
[\n\
  {{\n\
    \"type\": \"CALL\" | \"EMAIL\" | \"MEETING\",\n\
    \"clientName\": \"Jméno Klienta\",\n\
    \"reason\": \"Stručný důvod aktivity (česky)\",\n\
    \"priority\": \"HIGH\" | \"MEDIUM\" | \"LOW\"\n\
  }}\n\
]"
        );

        let response = complete(&self.config, &prompt).await?;
        Ok(parse_daily_plan(&response))
    }
}

#[async_trait]
impl DailyPlannerTrait for GeminiDailyPlanner {
    async fn generate_daily_plan(&self, clients: &[Client]) -> Vec<DailyActivity> {
        match self.plan_with_llm(clients).await {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Daily plan generation failed, returning empty plan: {}", e);
                Vec::new()
            }
        }
    }
}

/// A fake planner for testing that returns a fixed plan.
#[derive(Default)]
pub struct FakeDailyPlanner {
    pub fixed_plan: Vec<DailyActivity>,
}

impl FakeDailyPlanner {
    pub fn with_plan(plan: Vec<DailyActivity>) -> Self {
        Self { fixed_plan: plan }
    }
}

#[async_trait]
impl DailyPlannerTrait for FakeDailyPlanner {
    async fn generate_daily_plan(&self, _clients: &[Client]) -> Vec<DailyActivity> {
        self.fixed_plan.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityType, Priority};

    #[test]
    fn test_parse_plain_json_array() {
        let raw = r#"[
            {"type": "CALL", "clientName": "Jana Nováková", "reason": "Expirující fixace", "priority": "HIGH"},
            {"type": "EMAIL", "clientName": "Petr Svoboda", "reason": "Dlouho bez kontaktu", "priority": "LOW"}
        ]"#;

        let plan = parse_daily_plan(raw);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].activity_type, ActivityType::Call);
        assert_eq!(plan[0].client_name, "Jana Nováková");
        assert_eq!(plan[1].priority, Priority::Low);
    }

    #[test]
    fn test_parse_strips_code_fences() {
        let raw = "```json\n[{\"type\": \"MEETING\", \"clientName\": \"Jana Nováková\", \"reason\": \"Revize portfolia\", \"priority\": \"MEDIUM\"}]\n```";

        let plan = parse_daily_plan(raw);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].activity_type, ActivityType::Meeting);
    }

    #[test]
    fn test_parse_skips_malformed_elements() {
        let raw = r#"[
            {"type": "CALL", "clientName": "Jana Nováková", "reason": "Expirace", "priority": "HIGH"},
            {"type": "FAX", "clientName": "Petr Svoboda", "reason": "?", "priority": "HIGH"},
            {"clientName": "Eva Dvořáková"}
        ]"#;

        let plan = parse_daily_plan(raw);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].client_name, "Jana Nováková");
    }

    #[test]
    fn test_parse_non_json_is_empty() {
        assert!(parse_daily_plan("Bohužel nemohu vygenerovat plán.").is_empty());
        assert!(parse_daily_plan("").is_empty());
        assert!(parse_daily_plan("{\"type\": \"CALL\"}").is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_yields_empty_plan() {
        let planner = GeminiDailyPlanner::new(GeminiConfig::default());
        let plan = planner.generate_daily_plan(&[]).await;
        assert!(plan.is_empty());
    }

    #[tokio::test]
    async fn test_fake_planner_returns_fixed_plan() {
        let planner = FakeDailyPlanner::with_plan(vec![DailyActivity {
            activity_type: ActivityType::Call,
            client_name: "Jana Nováková".to_string(),
            reason: "Expirující fixace".to_string(),
            priority: Priority::High,
        }]);

        let plan = planner.generate_daily_plan(&[]).await;
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].reason, "Expirující fixace");
    }
}
