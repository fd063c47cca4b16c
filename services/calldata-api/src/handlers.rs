use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use calldata_core::TransactionRecord;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_transactions(State(state): State<Arc<AppState>>) -> Json<Vec<TransactionRecord>> {
    Json(state.store.list_all())
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TransactionRecord>, ApiError> {
    let Json(payload) = payload?;
    let text = payload
        .get("text")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingField { field: "text" })?
        .to_owned();

    // Key generation can take hundreds of milliseconds; keep it off the
    // async workers.
    let builder = state.builder;
    let record = tokio::task::spawn_blocking(move || builder.build(&text)).await??;

    state.store.append(record.clone());
    info!(
        input_size = record.input_size(),
        stored = state.store.len(),
        "transaction created"
    );

    Ok(Json(record))
}
