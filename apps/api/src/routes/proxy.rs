use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

/// POST /api/generate
///
/// Forwards a raw Anthropic Messages body using the server-side key and relays the
/// upstream status and JSON unchanged. Error bodies use the upstream `{"error":{"message"}}` shape.
pub async fn handle_proxy(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(client) = &state.anthropic else {
        return proxy_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: API Key missing.",
        );
    };

    match client.forward(&body).await {
        Ok((status, json)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json)).into_response()
        }
        Err(e) => {
            error!("Proxy error: {e}");
            proxy_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

fn proxy_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}
