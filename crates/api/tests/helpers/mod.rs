#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use vinyl_api::{create_api_routes, AppState};
use vinyl_application::ports::RecordRepository;
use vinyl_application::use_cases::{
    CreateRecordUseCase, GetRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
};
use vinyl_infrastructure::repositories::InMemoryRecordStore;

pub fn create_test_app(seed: &[(&str, &str, u32)]) -> Router {
    let store = Arc::new(InMemoryRecordStore::new());
    for (domain, address, ttl) in seed {
        store.create(domain, address, *ttl).unwrap();
    }

    let state = AppState {
        create_record: Arc::new(CreateRecordUseCase::new(store.clone())),
        remove_record: Arc::new(RemoveRecordUseCase::new(store.clone())),
        get_record: Arc::new(GetRecordUseCase::new(store.clone())),
        list_records: Arc::new(ListRecordsUseCase::new(store)),
    };

    Router::new().nest("/api", create_api_routes(state))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
