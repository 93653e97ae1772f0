// HTTP routes: MCP endpoint plus plain version and health endpoints

mod http;
mod mcp;

use axum::{
    Router,
    routing::{get, post},
};
use jsonrpc_core::IoHandler;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::tools::ToolService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) tools: Arc<ToolService>,
    pub(crate) rpc: Arc<IoHandler>,
}

pub fn app(tools: Arc<ToolService>) -> Router {
    let state = AppState {
        rpc: Arc::new(mcp::rpc_handler(tools.clone())),
        tools,
    };
    Router::new()
        .route("/", get(|| async { "cameras-mcp: camera infraction tools over MCP" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/health", get(http::health_handler)) // GET /health
        .route("/mcp", post(mcp::mcp_handler)) // POST /mcp
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
