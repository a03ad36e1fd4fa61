//! Axum-based HTTP gateway over the solutions graph and sales skills. Config-driven via CoreConfig.

use axum::{
    extract::{Path, Query, State},
    extract::Json,
    routing::{get, post},
    Router,
};
use sales_core::{BuiltinSolutions, CoreConfig, Goal, KnowledgeSource, Orchestrator, TenantContext};
use sales_skills::default_registry;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[sales-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::load() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("[sales-gateway] config load failed: {}", e);
            std::process::exit(1);
        }
    };
    let source: Arc<dyn KnowledgeSource> = Arc::new(BuiltinSolutions);
    let registry = default_registry(Arc::clone(&config), Arc::clone(&source));
    let orchestrator = Arc::new(Orchestrator::new(Arc::new(registry)));

    let app = router(AppState {
        config: Arc::clone(&config),
        orchestrator,
        source,
    })
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(target: "sales::gateway", "{} listening on {}", config.app_name, addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[sales-gateway] port {} unavailable: {}", config.port, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(target: "sales::gateway", error = %e, "server stopped");
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) orchestrator: Arc<Orchestrator>,
    pub(crate) source: Arc<dyn KnowledgeSource>,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/status", get(status))
        .route("/v1/sectors", get(list_sectors))
        .route("/v1/sectors/:sector", get(sector_solutions))
        .route("/v1/solutions/:sector/:solution_id", get(solution_details))
        .route("/v1/pitch/:sector/:solution_id", get(quick_pitch))
        .route("/v1/search", get(search))
        .route("/v1/execute", post(execute))
        .with_state(state)
}

async fn run_goal(state: &AppState, goal: Goal) -> axum::Json<serde_json::Value> {
    run_goal_with(state, TenantContext::new("gateway"), goal).await
}

async fn run_goal_with(
    state: &AppState,
    ctx: TenantContext,
    goal: Goal,
) -> axum::Json<serde_json::Value> {
    match state.orchestrator.dispatch(&ctx, goal).await {
        Ok(result) => axum::Json(result),
        Err(e) => {
            tracing::warn!(target: "sales::gateway", error = %e, "goal failed");
            axum::Json(serde_json::json!({
                "error": e.to_string(),
                "status": "error"
            }))
        }
    }
}

async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let graph = state.source.graph();
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "dry_run": state.config.dry_run,
        "knowledge_source": state.source.name(),
        "sectors": graph.sector_count(),
        "solutions": graph.solution_count(),
        "dangling_cross_references": graph.dangling_cross_references(),
        "skills": state.orchestrator.skill_names(),
    }))
}

async fn list_sectors(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    run_goal(
        &state,
        Goal::ExecuteSkill {
            name: sales_core::SOLUTION_LOOKUP.to_string(),
            payload: Some(serde_json::json!({ "op": "sectors" })),
        },
    )
    .await
}

async fn sector_solutions(
    State(state): State<AppState>,
    Path(sector): Path<String>,
) -> axum::Json<serde_json::Value> {
    run_goal(&state, Goal::SectorSolutions { sector }).await
}

async fn solution_details(
    State(state): State<AppState>,
    Path((sector, solution_id)): Path<(String, String)>,
) -> axum::Json<serde_json::Value> {
    run_goal(&state, Goal::SolutionDetails { sector, solution_id }).await
}

async fn quick_pitch(
    State(state): State<AppState>,
    Path((sector, solution_id)): Path<(String, String)>,
) -> axum::Json<serde_json::Value> {
    run_goal(&state, Goal::QuickPitch { sector, solution_id }).await
}

#[derive(serde::Deserialize)]
struct SearchParams {
    #[serde(default)]
    keywords: String,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> axum::Json<serde_json::Value> {
    let keywords = sales_skills::parse_keywords(Some(&serde_json::Value::String(params.keywords)));
    run_goal(&state, Goal::CrossSectorSearch { keywords }).await
}

#[derive(serde::Deserialize)]
struct ExecuteRequest {
    tenant_id: String,
    correlation_id: Option<String>,
    goal: Goal,
}

async fn execute(
    State(state): State<AppState>,
    Json(req): Json<ExecuteRequest>,
) -> axum::Json<serde_json::Value> {
    let ctx = TenantContext {
        tenant_id: req.tenant_id,
        correlation_id: req.correlation_id,
    };
    run_goal_with(&state, ctx, req.goal).await
}
