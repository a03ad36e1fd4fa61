//! SolutionLookup skill: sector listing, solution details, and quick pitches.

use sales_core::{AgentSkill, KnowledgeSource, TenantContext, SOLUTION_LOOKUP};
use std::sync::Arc;

pub struct SolutionLookup {
    source: Arc<dyn KnowledgeSource>,
}

impl SolutionLookup {
    pub fn new(source: Arc<dyn KnowledgeSource>) -> Self {
        Self { source }
    }
}

fn str_field<'a>(payload: &'a serde_json::Value, key: &str) -> &'a str {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

#[async_trait::async_trait]
impl AgentSkill for SolutionLookup {
    fn name(&self) -> &str {
        SOLUTION_LOOKUP
    }

    async fn execute(
        &self,
        _ctx: &TenantContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let payload =
            payload.ok_or("SolutionLookup requires payload: { op, sector, solution_id? }")?;
        let op = str_field(&payload, "op");
        let sector = str_field(&payload, "sector");
        let solution_id = str_field(&payload, "solution_id");
        let graph = self.source.graph();

        let out = match op {
            "sectors" => serde_json::json!({
                "status": "ok",
                "skill": SOLUTION_LOOKUP,
                "sectors": graph.sector_names(),
            }),
            "sector" => {
                let solutions = graph.solutions_for_sector(sector);
                serde_json::json!({
                    "status": "ok",
                    "skill": SOLUTION_LOOKUP,
                    "sector": sector.to_lowercase(),
                    "count": solutions.len(),
                    "solutions": solutions,
                })
            }
            "details" => {
                let record = graph.solution_details(sector, solution_id);
                let similar = graph.resolve_cross_sector(record);
                serde_json::json!({
                    "status": "ok",
                    "skill": SOLUTION_LOOKUP,
                    "found": !record.is_empty(),
                    "record": record,
                    "cross_sector_target": similar,
                })
            }
            "pitch" => serde_json::json!({
                "status": "ok",
                "skill": SOLUTION_LOOKUP,
                "quick_pitch": graph.quick_pitch(sector, solution_id),
            }),
            other => return Err(format!("SolutionLookup: unknown op '{}'", other).into()),
        };
        tracing::debug!(target: "sales::skills", op, sector, solution_id, "SolutionLookup served");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::BuiltinSolutions;

    fn skill() -> SolutionLookup {
        SolutionLookup::new(Arc::new(BuiltinSolutions))
    }

    #[tokio::test]
    async fn details_includes_resolved_cross_sector_target() {
        let ctx = TenantContext::new("t");
        let payload = serde_json::json!({
            "op": "details",
            "sector": "Healthcare",
            "solution_id": "patient_care_optimization",
        });
        let out = skill().execute(&ctx, Some(payload)).await.unwrap();
        assert_eq!(out["found"], true);
        assert_eq!(out["record"]["impact"]["wait_times"], "30% reduction");
        assert_eq!(out["cross_sector_target"]["sector"], "retail");
        assert_eq!(out["cross_sector_target"]["solution_id"], "inventory_optimization");
    }

    #[tokio::test]
    async fn missing_details_are_empty_not_errors() {
        let ctx = TenantContext::new("t");
        let payload = serde_json::json!({ "op": "details", "sector": "space", "solution_id": "x" });
        let out = skill().execute(&ctx, Some(payload)).await.unwrap();
        assert_eq!(out["found"], false);
        assert_eq!(out["record"]["problem"], "");
        assert!(out["cross_sector_target"].is_null());
    }

    #[tokio::test]
    async fn sector_listing_keeps_authored_order() {
        let ctx = TenantContext::new("t");
        let out = skill()
            .execute(&ctx, Some(serde_json::json!({ "op": "sector", "sector": "EDUCATION" })))
            .await
            .unwrap();
        assert_eq!(out["count"], 2);
        let keys: Vec<&String> = out["solutions"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["personalized_learning", "student_performance_prediction"]);
    }

    #[tokio::test]
    async fn pitch_and_unknown_op() {
        let ctx = TenantContext::new("t");
        let out = skill()
            .execute(
                &ctx,
                Some(serde_json::json!({
                    "op": "pitch",
                    "sector": "finance",
                    "solution_id": "missing",
                })),
            )
            .await
            .unwrap();
        assert_eq!(out["quick_pitch"], "");

        let err = skill()
            .execute(&ctx, Some(serde_json::json!({ "op": "delete" })))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unknown op 'delete'"));
    }
}
