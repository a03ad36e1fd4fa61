//! Sales agent skills and the outbound voice-call client.

pub use sales_core::{AgentSkill, SkillRegistry};

mod assistant;
mod cross_sector_match;
mod phone;
mod pitch_composer;
mod prompts;
mod sales_caller;
mod solution_lookup;
mod voice_client;

pub use assistant::{
    AssistantMetadata, AssistantOverrides, AssistantDefinition, ComposedAssistant, VariableValues,
    CALL_PURPOSE, CALL_TYPE,
};
pub use cross_sector_match::{parse_keywords, CrossSectorMatch};
pub use phone::is_valid_e164;
pub use pitch_composer::PitchComposer;
pub use prompts::{
    assistant_context, first_message, sector_pitch, solutions_overview, title_case,
    SALES_GUIDELINES,
};
pub use sales_caller::{CallOutcome, SalesCaller};
pub use solution_lookup::SolutionLookup;
pub use voice_client::{CallError, CallHandle, OutboundCall, VapiClient, VoiceClient, ENV_API_KEY};

use sales_core::{CoreConfig, KnowledgeSource};
use std::sync::Arc;

/// Registry with every sales skill wired to `source`.
/// The caller uses `VAPI_API_KEY` from the environment.
pub fn default_registry(
    config: Arc<CoreConfig>,
    source: Arc<dyn KnowledgeSource>,
) -> SkillRegistry {
    let mut registry = SkillRegistry::new();
    registry.register(Arc::new(SolutionLookup::new(Arc::clone(&source))));
    registry.register(Arc::new(CrossSectorMatch::new(Arc::clone(&source))));
    registry.register(Arc::new(PitchComposer::new(Arc::clone(&config), Arc::clone(&source))));
    registry.register(Arc::new(SalesCaller::from_env(config, source)));
    registry
}
