//! Shared test helpers for client tests.

#![allow(dead_code)]

use roster_client::StudentsClient;
use roster_server::build_router;
use roster_store::StudentStore;
use roster_types::StudentFields;

/// Spin up the API on an OS-assigned port over a fresh in-memory store.
pub async fn spawn_test_server() -> (StudentsClient, StudentStore) {
    let store = StudentStore::open_in_memory().unwrap();
    let app = build_router(store.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (StudentsClient::new(format!("http://127.0.0.1:{port}/")), store)
}

pub fn fields(name: &str, surname: &str, email: &str) -> StudentFields {
    StudentFields::new(name, surname, email).unwrap()
}
