//! Advisor AI - LLM-backed collaborator services.
//!
//! This crate provides the AI side of the advisor CRM: a portfolio
//! analysis narrative, a generated daily activity plan, and a meeting
//! report, all driven by a Gemini model through `rig-core`.
//!
//! The services are deliberately opaque capabilities from the core's point
//! of view: every failure (network, auth, malformed model output) degrades
//! to an in-band result - a fallback message or an empty plan - and is
//! never propagated to the commission engine or the reporting layer.
//!
//! - `analyst`: Czech markdown briefing for a single client
//! - `planner`: structured daily activity plan over the whole book
//! - `reports`: client-facing meeting summary
//! - `provider`: Gemini client configuration and construction
//! - `types`: shared DTOs (activities, client digests/snapshots)

pub mod analyst;
pub mod error;
pub mod planner;
pub mod provider;
pub mod reports;
pub mod types;

// Re-export main types for convenience
pub use analyst::{FakePortfolioAnalyst, GeminiPortfolioAnalyst, PortfolioAnalystTrait};
pub use error::AiError;
pub use planner::{parse_daily_plan, DailyPlannerTrait, FakeDailyPlanner, GeminiDailyPlanner};
pub use provider::GeminiConfig;
pub use reports::{FakeMeetingReporter, GeminiMeetingReporter, MeetingReportTrait};
pub use types::{ActivityType, ClientDigest, ClientSnapshot, DailyActivity, Priority};
