//! PitchComposer skill: assistant payload (first message, context, overrides) for one callee.

use crate::assistant::ComposedAssistant;
use crate::phone::is_valid_e164;
use crate::voice_client::CallError;
use sales_core::{AgentSkill, CoreConfig, KnowledgeSource, TenantContext, PITCH_COMPOSER};
use std::sync::Arc;

pub struct PitchComposer {
    config: Arc<CoreConfig>,
    source: Arc<dyn KnowledgeSource>,
}

impl PitchComposer {
    pub fn new(config: Arc<CoreConfig>, source: Arc<dyn KnowledgeSource>) -> Self {
        Self { config, source }
    }

    /// Validates the number and composes the assistant.
    pub fn compose(
        &self,
        phone_number: &str,
        customer_name: Option<&str>,
    ) -> Result<ComposedAssistant, CallError> {
        if !is_valid_e164(phone_number) {
            return Err(CallError::InvalidPhoneNumber(phone_number.to_string()));
        }
        Ok(ComposedAssistant::compose(
            &self.config,
            self.source.as_ref(),
            phone_number,
            customer_name,
        ))
    }
}

#[async_trait::async_trait]
impl AgentSkill for PitchComposer {
    fn name(&self) -> &str {
        PITCH_COMPOSER
    }

    async fn execute(
        &self,
        _ctx: &TenantContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let payload =
            payload.ok_or("PitchComposer requires payload: { phone_number, customer_name? }")?;
        let phone_number = payload
            .get("phone_number")
            .and_then(|v| v.as_str())
            .ok_or("PitchComposer requires payload.phone_number")?;
        let customer_name = payload.get("customer_name").and_then(|v| v.as_str());

        let composed = self.compose(phone_number, customer_name)?;
        tracing::info!(
            target: "sales::skills",
            context_len = composed.assistant.context.len(),
            "Assistant composed"
        );
        Ok(serde_json::json!({
            "status": "ok",
            "skill": PITCH_COMPOSER,
            "assistant": composed.assistant,
            "assistant_overrides": composed.overrides,
        }))
    }
}
