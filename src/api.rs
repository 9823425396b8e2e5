use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::client::PapierkramClient;
use crate::error::AppError;
use crate::registry::execute::execute;
use crate::registry::{catalog, CommandRegistry};

// ── Response types ───────────────────────────────────────────────

#[derive(Serialize)]
struct ApiOk<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ApiErr {
    ok: bool,
    error: String,
}

fn ok_json<T: Serialize>(data: T) -> impl IntoResponse {
    Json(ApiOk { ok: true, data })
}

fn err_json(status: StatusCode, msg: String) -> impl IntoResponse {
    (status, Json(ApiErr { ok: false, error: msg }))
}

/// Rejected input is the caller's fault; anything else went wrong upstream.
fn status_for(e: &AppError) -> StatusCode {
    if e.is_rejected_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    }
}

/// Everything the handlers need: the command table and the shared client.
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<CommandRegistry>,
    pub client: Arc<PapierkramClient>,
}

// ── Handlers ─────────────────────────────────────────────────────

async fn post_tool(
    Extension(state): Extension<ApiState>,
    Path(name): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let input = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::json!({})
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(e) => {
                return err_json(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {e}"))
                    .into_response();
            }
        }
    };

    match execute(&state.registry, &state.client, &name, input).await {
        Ok(output) => ok_json(output.into_value()).into_response(),
        Err(e) => err_json(status_for(&e), e.to_string()).into_response(),
    }
}

async fn get_tools(Extension(state): Extension<ApiState>) -> impl IntoResponse {
    ok_json(catalog::to_catalog(&state.registry))
}

// ── Server startup ───────────────────────────────────────────────

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/tools/{name}", post(post_tool))
        .route("/api/tools", get(get_tools))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

/// Start the HTTP API on 127.0.0.1. Port 0 picks a free port. Returns the
/// bound port; the server runs on a background task.
pub async fn start_api_server(state: ApiState, port: u16) -> Result<u16, String> {
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind API server: {e}"))?;
    let port = listener
        .local_addr()
        .map_err(|e| format!("Failed to get API server port: {e}"))?
        .port();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "API server error");
        }
    });

    Ok(port)
}
