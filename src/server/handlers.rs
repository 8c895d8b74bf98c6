use super::types::{
    CacheStatsResponse, ContentInferenceRequest, ErrorResponse, HashInferenceRequest, InfoResponse,
};
use crate::{Error, engine::Label, gateway::InferenceGateway};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gateway: InferenceGateway,
}

type HandlerResult = Result<Json<InfoResponse>, (StatusCode, Json<ErrorResponse>)>;

pub async fn infer_by_hash(
    State(state): State<AppState>,
    Json(request): Json<HashInferenceRequest>,
) -> HandlerResult {
    let request_id = Uuid::new_v4();
    info!("Received hash inference request {}", request_id);

    respond(
        request_id,
        state
            .gateway
            .infer_by_hash(&request.model, &request.input)
            .await,
    )
}

pub async fn infer_by_content(
    State(state): State<AppState>,
    Json(request): Json<ContentInferenceRequest>,
) -> HandlerResult {
    let request_id = Uuid::new_v4();
    info!(
        "Received content inference request {} ({} bytes)",
        request_id,
        request.input.len()
    );

    respond(
        request_id,
        state
            .gateway
            .infer_by_content(&request.model, &request.input)
            .await,
    )
}

pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        enabled: state.gateway.cache_enabled(),
        entries: state.gateway.cache().len(),
    })
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

fn respond(request_id: Uuid, result: crate::Result<Label>) -> HandlerResult {
    match result {
        Ok(label) => {
            info!("Request {} answered", request_id);
            Ok(Json(InfoResponse {
                info: label.to_hex(),
            }))
        }
        Err(e) => {
            error!("Request {} failed: {}", request_id, e);
            Err((
                status_for(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        e if e.is_validation() => StatusCode::BAD_REQUEST,
        Error::Engine(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
