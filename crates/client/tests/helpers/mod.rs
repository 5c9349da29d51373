#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use vinyl_api::{create_api_routes, AppState};
use vinyl_application::use_cases::{
    CreateRecordUseCase, GetRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
};
use vinyl_infrastructure::repositories::InMemoryRecordStore;

/// Serves the management API on an ephemeral local port for the duration of
/// the test runtime.
pub async fn spawn_server() -> (SocketAddr, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    let state = AppState {
        create_record: Arc::new(CreateRecordUseCase::new(store.clone())),
        remove_record: Arc::new(RemoveRecordUseCase::new(store.clone())),
        get_record: Arc::new(GetRecordUseCase::new(store.clone())),
        list_records: Arc::new(ListRecordsUseCase::new(store.clone())),
    };
    let app = Router::new().nest("/api", create_api_routes(state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, store)
}
