//! SalesCaller skill: validates the request, composes the assistant, places one outbound call.
//!
//! With `dry_run` set in config the composed request is returned instead of being sent.

use crate::assistant::ComposedAssistant;
use crate::phone::is_valid_e164;
use crate::voice_client::{
    CallError, CallHandle, OutboundCall, VapiClient, VoiceClient, ENV_API_KEY,
};
use sales_core::{AgentSkill, CoreConfig, KnowledgeSource, TenantContext, SALES_CALLER};
use std::sync::Arc;

pub struct SalesCaller {
    config: Arc<CoreConfig>,
    source: Arc<dyn KnowledgeSource>,
    client: Option<Arc<dyn VoiceClient>>,
}

/// Outcome of [`SalesCaller::place_call`].
#[derive(Debug)]
pub enum CallOutcome {
    Started { handle: CallHandle, call: OutboundCall },
    DryRun { call: OutboundCall },
}

impl SalesCaller {
    pub fn new(
        config: Arc<CoreConfig>,
        source: Arc<dyn KnowledgeSource>,
        client: Arc<dyn VoiceClient>,
    ) -> Self {
        Self {
            config,
            source,
            client: Some(client),
        }
    }

    /// Uses [`VapiClient`] keyed from `VAPI_API_KEY`.
    /// A missing key only fails when a live call is attempted.
    pub fn from_env(config: Arc<CoreConfig>, source: Arc<dyn KnowledgeSource>) -> Self {
        let client = match VapiClient::from_env(config.api_base.clone()) {
            Ok(c) => Some(Arc::new(c) as Arc<dyn VoiceClient>),
            Err(e) => {
                if !config.dry_run {
                    tracing::warn!(target: "sales::skills", error = %e, "Voice client unavailable");
                }
                None
            }
        };
        Self {
            config,
            source,
            client,
        }
    }

    /// Validates inputs before any network traffic, then starts the call
    /// (or returns it on dry run).
    pub async fn place_call(
        &self,
        phone_number: &str,
        assistant_id: Option<&str>,
        customer_name: Option<&str>,
    ) -> Result<CallOutcome, CallError> {
        if !is_valid_e164(phone_number) {
            return Err(CallError::InvalidPhoneNumber(phone_number.to_string()));
        }
        let assistant_id = self
            .config
            .resolve_assistant_id(assistant_id)
            .ok_or(CallError::MissingAssistantId)?;

        let customer_name = customer_name.filter(|n| !n.trim().is_empty());
        let call = OutboundCall {
            phone_number: phone_number.to_string(),
            assistant_id,
            customer_name: customer_name.map(str::to_string),
            phone_number_id: self.config.phone_number_id.clone(),
            composed: ComposedAssistant::compose(
                &self.config,
                self.source.as_ref(),
                phone_number,
                customer_name,
            ),
        };

        if self.config.dry_run {
            tracing::info!(
                target: "sales::skills",
                phone = %call.phone_number,
                "Dry run: call composed, not sent"
            );
            return Ok(CallOutcome::DryRun { call });
        }

        let client = self.client.as_ref().ok_or(CallError::MissingApiKey(ENV_API_KEY))?;
        tracing::info!(
            target: "sales::skills",
            phone = %call.phone_number,
            assistant_id = %call.assistant_id,
            "Starting sales call"
        );
        match client.start_call(&call).await {
            Ok(handle) => Ok(CallOutcome::Started { handle, call }),
            Err(e) => {
                tracing::error!(target: "sales::skills", error = %e, "Error making sales call");
                Err(e)
            }
        }
    }
}

#[async_trait::async_trait]
impl AgentSkill for SalesCaller {
    fn name(&self) -> &str {
        SALES_CALLER
    }

    async fn execute(
        &self,
        _ctx: &TenantContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let payload = payload
            .ok_or("SalesCaller requires payload: { phone_number, assistant_id?, customer_name? }")?;
        let field = |key: &str| payload.get(key).and_then(|v| v.as_str());
        let phone_number = field("phone_number")
            .ok_or("SalesCaller requires payload.phone_number")?;

        let outcome = self
            .place_call(phone_number, field("assistant_id"), field("customer_name"))
            .await?;
        Ok(match outcome {
            CallOutcome::Started { handle, call } => serde_json::json!({
                "status": "started",
                "skill": SALES_CALLER,
                "call_id": handle.id,
                "provider_status": handle.status,
                "phone_number": call.phone_number,
            }),
            CallOutcome::DryRun { call } => serde_json::json!({
                "status": "dry_run",
                "skill": SALES_CALLER,
                "phone_number": call.phone_number,
                "request": call.request_body()?,
            }),
        })
    }
}
