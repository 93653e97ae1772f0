// POST /mcp: MCP methods registered on a JSON-RPC 2.0 IoHandler

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use jsonrpc_core::{Error, ErrorCode, IoHandler, Params, Value};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::AppState;
use crate::error::ToolError;
use crate::tools::ToolService;
use crate::version::{PROTOCOL_VERSION, SERVICE, VERSION};

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Build the JSON-RPC handler for the tool service.
pub(crate) fn rpc_handler(tools: Arc<ToolService>) -> IoHandler {
    let mut handler = IoHandler::new();

    handler.add_sync_method("initialize", |_params: Params| {
        tracing::info!("MCP initialize called");
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": { "listChanged": false } },
            "serverInfo": { "name": SERVICE, "version": VERSION },
        }))
    });

    handler.add_notification("notifications/initialized", |_params: Params| {
        tracing::debug!("MCP client initialized");
    });

    handler.add_sync_method("ping", |_params: Params| Ok(json!({})));

    let tb = tools.clone();
    handler.add_sync_method("tools/list", move |_params: Params| {
        Ok(json!({ "tools": tb.definitions() }))
    });

    handler.add_method("tools/call", move |params: Params| call_tool(tools.clone(), params));

    handler
}

/// POST /mcp: one JSON-RPC message (or batch) per request. Notifications get 202 with no body.
pub(super) async fn mcp_handler(State(state): State<AppState>, body: String) -> Response {
    match state.rpc.handle_request(&body).await {
        Some(response) => (
            [(header::CONTENT_TYPE, "application/json")],
            response,
        )
            .into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn call_tool(tools: Arc<ToolService>, params: Params) -> jsonrpc_core::Result<Value> {
    let params: CallParams = params.parse()?;
    match tools.call(&params.name, params.arguments).await {
        Ok(text) => Ok(tool_result(text, false)),
        Err(e @ ToolError::UnknownTool(_)) => Err(Error {
            code: ErrorCode::InvalidParams,
            message: e.to_string(),
            data: None,
        }),
        Err(e @ ToolError::InvalidArguments(_)) => Ok(tool_result(format!("Error: {}", e), true)),
        Err(e) => {
            tracing::error!(error = %e, tool = %params.name, "tool failed");
            Ok(tool_result(format!("Error: {}", e), true))
        }
    }
}

fn tool_result(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}
