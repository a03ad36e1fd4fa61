//! CrossSectorMatch skill: keyword search over problem statements, with analogies.

use sales_core::{AgentSkill, KnowledgeSource, TenantContext, CROSS_SECTOR_MATCH};
use std::sync::Arc;

pub struct CrossSectorMatch {
    source: Arc<dyn KnowledgeSource>,
}

impl CrossSectorMatch {
    pub fn new(source: Arc<dyn KnowledgeSource>) -> Self {
        Self { source }
    }
}

/// Accepts `keywords` as a JSON array of strings or a comma-separated string.
pub fn parse_keywords(value: Option<&serde_json::Value>) -> Vec<String> {
    match value {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
        Some(serde_json::Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[async_trait::async_trait]
impl AgentSkill for CrossSectorMatch {
    fn name(&self) -> &str {
        CROSS_SECTOR_MATCH
    }

    async fn execute(
        &self,
        _ctx: &TenantContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let keywords = parse_keywords(payload.as_ref().and_then(|p| p.get("keywords")));
        let graph = self.source.graph();
        let matches: Vec<serde_json::Value> = graph
            .find_cross_sector_solutions(keywords.as_slice())
            .into_iter()
            .map(|m| {
                let analogy = graph.resolve_cross_sector(m.record).map(|t| {
                    serde_json::json!({
                        "sector": t.sector,
                        "solution_id": t.solution_id,
                        "connection": m.record.cross_sector.connection,
                        "quick_pitch": t.record.quick_pitch,
                    })
                });
                serde_json::json!({
                    "sector": m.sector,
                    "solution_id": m.solution_id,
                    "record": m.record,
                    "analogy": analogy,
                })
            })
            .collect();

        tracing::info!(
            target: "sales::skills",
            keywords = keywords.len(),
            matches = matches.len(),
            "Cross-sector search"
        );

        Ok(serde_json::json!({
            "status": "ok",
            "skill": CROSS_SECTOR_MATCH,
            "keywords": keywords,
            "count": matches.len(),
            "matches": matches,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::BuiltinSolutions;

    #[test]
    fn keywords_from_array_or_csv() {
        let arr = serde_json::json!(["fraud", 3, "risk"]);
        assert_eq!(parse_keywords(Some(&arr)), vec!["fraud", "risk"]);
        let csv = serde_json::json!(" fraud , ,risk");
        assert_eq!(parse_keywords(Some(&csv)), vec!["fraud", "risk"]);
        assert!(parse_keywords(None).is_empty());
    }

    #[tokio::test]
    async fn fraud_search_has_no_analogy_for_dangling_reference() {
        let skill = CrossSectorMatch::new(Arc::new(BuiltinSolutions));
        let ctx = TenantContext::new("t");
        let out = skill
            .execute(&ctx, Some(serde_json::json!({ "keywords": ["Fraud"] })))
            .await
            .unwrap();
        assert_eq!(out["count"], 1);
        assert_eq!(out["matches"][0]["solution_id"], "fraud_detection");
        assert!(out["matches"][0]["analogy"].is_null());
    }

    #[tokio::test]
    async fn analogy_carries_target_pitch() {
        let skill = CrossSectorMatch::new(Arc::new(BuiltinSolutions));
        let ctx = TenantContext::new("t");
        let out = skill
            .execute(&ctx, Some(serde_json::json!({ "keywords": "one-size" })))
            .await
            .unwrap();
        assert_eq!(out["matches"][0]["solution_id"], "personalized_learning");
        assert_eq!(out["matches"][0]["analogy"]["solution_id"], "personalized_recommendations");
        assert_eq!(
            out["matches"][0]["analogy"]["quick_pitch"],
            "Our AI personalizes shopping experiences, increasing sales by 30%"
        );
    }

    #[tokio::test]
    async fn empty_payload_is_empty_result() {
        let skill = CrossSectorMatch::new(Arc::new(BuiltinSolutions));
        let out = skill.execute(&TenantContext::new("t"), None).await.unwrap();
        assert_eq!(out["count"], 0);
    }
}
