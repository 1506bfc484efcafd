//! Meeting report generation.
//!
//! Turns raw meeting notes into a polished client-facing summary. Like the
//! other collaborator services, failures degrade to a fixed Czech message.

use async_trait::async_trait;
use log::warn;

use advisor_core::clients::Client;

use crate::error::AiError;
use crate::provider::{complete, GeminiConfig};

/// Shown when the report cannot be generated.
pub const REPORT_UNAVAILABLE: &str = "Chyba při generování reportu.";

/// Trait for turning meeting notes into a client-facing summary.
#[async_trait]
pub trait MeetingReportTrait: Send + Sync {
    /// Produce a formal Czech meeting summary from the advisor's raw notes.
    /// Never fails; a fallback message stands in for errors.
    async fn generate_meeting_report(&self, client: &Client, meeting_notes: &str) -> String;
}

/// Gemini-backed meeting reporter.
pub struct GeminiMeetingReporter {
    config: GeminiConfig,
}

impl GeminiMeetingReporter {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    async fn report_with_llm(
        &self,
        client: &Client,
        meeting_notes: &str,
    ) -> Result<String, AiError> {
        let prompt = format!(
            "Jsi asistent finančního poradce. Na základě poznámek ze schůzky vytvoř \
profesionální shrnutí pro klienta (email/PDF) v češtině.\n\n\
Klient: {}\n\
Poznámky ze schůzky: \"{}\"\n\n\
Výstup by měl obsahovat:\n\
- Poděkování za schůzku\n\
- Shrnutí probraných témat\n\
- Dohodnuté další kroky\n\
- Formální rozloučení",
            client.full_name(),
            meeting_notes
        );

        let response = complete(&self.config, &prompt).await?;
        if response.trim().is_empty() {
            return Err(AiError::InvalidResponse("empty completion".to_string()));
        }
        Ok(response)
    }
}

#[async_trait]
impl MeetingReportTrait for GeminiMeetingReporter {
    async fn generate_meeting_report(&self, client: &Client, meeting_notes: &str) -> String {
        match self.report_with_llm(client, meeting_notes).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Meeting report generation failed, using fallback: {}", e);
                REPORT_UNAVAILABLE.to_string()
            }
        }
    }
}

/// A fake reporter for testing that echoes the notes into a template.
pub struct FakeMeetingReporter;

#[async_trait]
impl MeetingReportTrait for FakeMeetingReporter {
    async fn generate_meeting_report(&self, client: &Client, meeting_notes: &str) -> String {
        format!(
            "Dobrý den, {},\n\nděkujeme za schůzku. Probraná témata: {}\n\nS pozdravem",
            client.full_name(),
            meeting_notes
        )
    }
}
