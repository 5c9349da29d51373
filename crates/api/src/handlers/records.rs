use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{dto::record::*, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route("/records/{domain}", get(get_record).delete(remove_record))
}

#[instrument(skip(state, req), fields(domain = %req.domain))]
async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .create_record
        .execute(&req.domain, &req.address, req.ttl)
        .map_err(|e| ApiError::new("CreateRecord", e))?;

    Ok(Json(RecordResponse {
        record: record.into(),
    }))
}

#[instrument(skip(state))]
async fn remove_record(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .remove_record
        .execute(&domain)
        .map_err(|e| ApiError::new("RemoveRecord", e))?;

    Ok(Json(RecordResponse {
        record: record.into(),
    }))
}

async fn get_record(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .get_record
        .execute(&domain)
        .map_err(|e| ApiError::new("GetRecord", e))?;

    Ok(Json(RecordResponse {
        record: record.into(),
    }))
}

async fn list_records(State(state): State<AppState>) -> Json<ListRecordsResponse> {
    let records = state
        .list_records
        .execute()
        .iter()
        .map(RecordDto::from)
        .collect();

    Json(ListRecordsResponse { records })
}
