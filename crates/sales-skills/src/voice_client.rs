//! Outbound call client for the voice provider REST API.
//!
//! One request per call. Failed requests are reported, never retried.

use crate::assistant::ComposedAssistant;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_API_KEY: &str = "VAPI_API_KEY";

#[derive(Error, Debug)]
pub enum CallError {
    #[error("Invalid phone number format: {0}. Please use E.164 format (e.g., +14155552671)")]
    InvalidPhoneNumber(String),

    #[error(
        "Assistant ID is required. Please provide a valid assistant ID from your voice provider \
         dashboard"
    )]
    MissingAssistantId,

    #[error("{0} not found in environment variables. Please set it in .env file")]
    MissingApiKey(&'static str),

    #[error("Voice API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Voice API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to encode call request: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything needed to place one call.
#[derive(Debug, Clone)]
pub struct OutboundCall {
    pub phone_number: String,
    pub assistant_id: String,
    pub customer_name: Option<String>,
    pub phone_number_id: Option<String>,
    pub composed: ComposedAssistant,
}

#[derive(Debug, Clone, Serialize)]
struct Customer<'a> {
    number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallBody<'a> {
    assistant_id: &'a str,
    assistant: &'a crate::assistant::AssistantDefinition,
    assistant_overrides: &'a crate::assistant::AssistantOverrides,
    customer: Customer<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_id: Option<&'a str>,
}

impl OutboundCall {
    /// JSON body for `POST /call`.
    pub fn request_body(&self) -> Result<serde_json::Value, CallError> {
        let body = CallBody {
            assistant_id: &self.assistant_id,
            assistant: &self.composed.assistant,
            assistant_overrides: &self.composed.overrides,
            customer: Customer {
                number: &self.phone_number,
                name: self.customer_name.as_deref(),
            },
            phone_number_id: self.phone_number_id.as_deref(),
        };
        Ok(serde_json::to_value(body)?)
    }
}

/// Provider acknowledgement of a started call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHandle {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Seam between the sales skill and the telephony provider.
#[async_trait::async_trait]
pub trait VoiceClient: Send + Sync {
    async fn start_call(&self, call: &OutboundCall) -> Result<CallHandle, CallError>;
}

/// Vapi REST client.
pub struct VapiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl VapiClient {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Reads the API key from `VAPI_API_KEY`.
    pub fn from_env(api_base: impl Into<String>) -> Result<Self, CallError> {
        let key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(CallError::MissingApiKey(ENV_API_KEY))?;
        Ok(Self::new(api_base, key))
    }

    pub fn call_url(&self) -> String {
        format!("{}/call", self.api_base)
    }
}

#[async_trait::async_trait]
impl VoiceClient for VapiClient {
    async fn start_call(&self, call: &OutboundCall) -> Result<CallHandle, CallError> {
        let response = self
            .client
            .post(self.call_url())
            .bearer_auth(&self.api_key)
            .json(&call.request_body()?)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(target: "sales::voice", status, "Voice API rejected call");
            return Err(CallError::Api { status, body });
        }

        let handle: CallHandle = response.json().await?;
        tracing::info!(target: "sales::voice", call_id = %handle.id, "Call started successfully");
        Ok(handle)
    }
}
