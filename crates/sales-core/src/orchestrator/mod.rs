//! Goal dispatch: routes high-level goals to registered skills.

use crate::shared::{Goal, TenantContext};
use std::fmt;
use std::sync::Arc;

/// Skill names the orchestrator routes typed goals to.
pub const SOLUTION_LOOKUP: &str = "SolutionLookup";
pub const CROSS_SECTOR_MATCH: &str = "CrossSectorMatch";
pub const PITCH_COMPOSER: &str = "PitchComposer";
pub const SALES_CALLER: &str = "SalesCaller";

#[derive(Debug)]
struct UnknownSkill(String);

impl fmt::Display for UnknownSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown skill: {}", self.0)
    }
}

impl std::error::Error for UnknownSkill {}

/// Trait implemented by all agent capabilities (skills).
#[async_trait::async_trait]
pub trait AgentSkill: Send + Sync {
    /// Unique skill name for routing.
    fn name(&self) -> &str;

    /// Executes the skill with the given context and optional payload.
    async fn execute(
        &self,
        ctx: &TenantContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>>;
}

/// Registry of agent skills that can be dispatched by name.
pub struct SkillRegistry {
    skills: Vec<Arc<dyn AgentSkill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self {
            skills: Vec::new(),
        }
    }

    pub fn register(&mut self, skill: Arc<dyn AgentSkill>) {
        self.skills.push(skill);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AgentSkill>> {
        self.skills.iter().find(|s| s.name() == name).cloned()
    }

    /// Returns the names of all registered skills.
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name().to_string()).collect()
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrator dispatches goals to skills.
pub struct Orchestrator {
    registry: Arc<SkillRegistry>,
}

impl Orchestrator {
    pub fn new(registry: Arc<SkillRegistry>) -> Self {
        Self { registry }
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.registry.skill_names()
    }

    async fn run(
        &self,
        ctx: &TenantContext,
        name: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let skill = self
            .registry
            .get(name)
            .ok_or_else(|| UnknownSkill(name.to_string()))?;
        tracing::debug!(
            target: "sales::orchestrator",
            skill = name,
            tenant = %ctx.tenant_id,
            correlation_id = ctx.correlation_id.as_deref().unwrap_or("-"),
            "Dispatching"
        );
        skill.execute(ctx, payload).await
    }

    /// Dispatches a goal to the skill that owns it.
    pub async fn dispatch(
        &self,
        ctx: &TenantContext,
        goal: Goal,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        match goal {
            Goal::ExecuteSkill { name, payload } => self.run(ctx, &name, payload).await,
            Goal::SectorSolutions { sector } => {
                let payload = serde_json::json!({ "op": "sector", "sector": sector });
                self.run(ctx, SOLUTION_LOOKUP, Some(payload)).await
            }
            Goal::SolutionDetails { sector, solution_id } => {
                let payload = serde_json::json!({
                    "op": "details",
                    "sector": sector,
                    "solution_id": solution_id,
                });
                self.run(ctx, SOLUTION_LOOKUP, Some(payload)).await
            }
            Goal::QuickPitch { sector, solution_id } => {
                let payload = serde_json::json!({
                    "op": "pitch",
                    "sector": sector,
                    "solution_id": solution_id,
                });
                self.run(ctx, SOLUTION_LOOKUP, Some(payload)).await
            }
            Goal::CrossSectorSearch { keywords } => {
                let payload = serde_json::json!({ "keywords": keywords });
                self.run(ctx, CROSS_SECTOR_MATCH, Some(payload)).await
            }
            Goal::ComposeAssistant {
                phone_number,
                customer_name,
            } => {
                let payload = serde_json::json!({
                    "phone_number": phone_number,
                    "customer_name": customer_name
                });
                self.run(ctx, PITCH_COMPOSER, Some(payload)).await
            }
            Goal::StartSalesCall {
                phone_number,
                assistant_id,
                customer_name,
            } => {
                let payload = serde_json::json!({
                    "phone_number": phone_number,
                    "assistant_id": assistant_id,
                    "customer_name": customer_name
                });
                self.run(ctx, SALES_CALLER, Some(payload)).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait::async_trait]
    impl AgentSkill for Echo {
        fn name(&self) -> &str {
            SOLUTION_LOOKUP
        }

        async fn execute(
            &self,
            _ctx: &TenantContext,
            payload: Option<serde_json::Value>,
        ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
            Ok(serde_json::json!({ "echo": payload }))
        }
    }

    fn orchestrator() -> Orchestrator {
        let mut registry = SkillRegistry::new();
        registry.register(Arc::new(Echo));
        Orchestrator::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn typed_goal_becomes_skill_payload() {
        let ctx = TenantContext::new("test");
        let out = orchestrator()
            .dispatch(
                &ctx,
                Goal::QuickPitch {
                    sector: "finance".into(),
                    solution_id: "fraud_detection".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(out["echo"]["op"], "pitch");
        assert_eq!(out["echo"]["solution_id"], "fraud_detection");
    }

    #[tokio::test]
    async fn unregistered_skill_is_an_error() {
        let ctx = TenantContext::new("test");
        let err = orchestrator()
            .dispatch(&ctx, Goal::CrossSectorSearch { keywords: vec!["fraud".into()] })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown skill: CrossSectorMatch");
    }

    #[test]
    fn registry_lists_names() {
        assert_eq!(orchestrator().skill_names(), vec![SOLUTION_LOOKUP.to_string()]);
    }
}
