//! Shared types used across the sales crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Request context passed to every skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantContext {
    /// Unique tenant identifier.
    pub tenant_id: String,
    /// Optional correlation id for request tracing.
    pub correlation_id: Option<String>,
}

impl TenantContext {
    /// Context with a fresh random correlation id.
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            correlation_id: Some(uuid::Uuid::new_v4().to_string()),
        }
    }
}

/// High-level goals the orchestrator can delegate to skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Goal {
    /// Execute a named skill with optional payload.
    ExecuteSkill { name: String, payload: Option<serde_json::Value> },
    /// All solutions of one sector.
    SectorSolutions { sector: String },
    /// One solution record.
    SolutionDetails { sector: String, solution_id: String },
    /// Keyword search over problem statements in every sector.
    CrossSectorSearch { keywords: Vec<String> },
    /// The quick pitch line of one solution.
    QuickPitch { sector: String, solution_id: String },
    /// Build the voice assistant payload without placing a call.
    ComposeAssistant {
        phone_number: String,
        customer_name: Option<String>,
    },
    /// Validate, compose, and place one outbound sales call.
    StartSalesCall {
        phone_number: String,
        assistant_id: Option<String>,
        customer_name: Option<String>,
    },
}

/// Global application configuration. Load from TOML and env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by `/v1/status`.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Legal company name passed to the provider as a template variable.
    pub company_name: String,
    /// Short name spoken in the greeting.
    pub brand_name: String,
    /// Name of the sales representative persona.
    pub sales_rep: String,
    /// Conversation model requested from the voice provider.
    pub model: String,
    /// Voice preset requested from the voice provider.
    pub voice: String,
    /// Base URL of the voice provider REST API.
    pub api_base: String,
    /// Default assistant id when a request does not carry one.
    #[serde(default)]
    pub assistant_id: Option<String>,
    /// Provider phone number to dial out from.
    #[serde(default)]
    pub phone_number_id: Option<String>,
    /// When true, calls are composed and logged but never sent.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "AI Solutions Sales Agent".to_string(),
            port: 8001,
            company_name: "AI Solutions Inc".to_string(),
            brand_name: "AI Solutions".to_string(),
            sales_rep: "Alex".to_string(),
            model: "gpt-4".to_string(),
            voice: "jennifer-playht".to_string(),
            api_base: "https://api.vapi.ai".to_string(),
            assistant_id: None,
            phone_number_id: None,
            dry_run: false,
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: `SALES_*` env > file at `SALES_CONFIG`
    /// (default `config/agent.toml`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("SALES_CONFIG").unwrap_or_else(|_| "config/agent".to_string());
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("company_name", defaults.company_name)?
            .set_default("brand_name", defaults.brand_name)?
            .set_default("sales_rep", defaults.sales_rep)?
            .set_default("model", defaults.model)?
            .set_default("voice", defaults.voice)?
            .set_default("api_base", defaults.api_base)?
            .set_default("dry_run", defaults.dry_run)?;

        let path = Path::new(&config_path);
        let with_ext = path.with_extension("toml");
        let builder = if path.is_file() {
            builder.add_source(config::File::from(path))
        } else if with_ext.is_file() {
            builder.add_source(config::File::from(with_ext.as_path()))
        } else {
            builder
        };

        let built = builder
            .add_source(
                config::Environment::with_prefix("SALES")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let cfg: Self = built.try_deserialize()?;
        tracing::debug!(
            target: "sales::config",
            app = %cfg.app_name,
            port = cfg.port,
            dry_run = cfg.dry_run,
            "Config loaded"
        );
        Ok(cfg)
    }

    /// Request assistant id, falling back to the configured default. Empty strings count as absent.
    pub fn resolve_assistant_id(&self, requested: Option<&str>) -> Option<String> {
        requested
            .filter(|s| !s.trim().is_empty())
            .or(self.assistant_id.as_deref().filter(|s| !s.trim().is_empty()))
            .map(str::to_string)
    }
}
