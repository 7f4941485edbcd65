#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use ttl_shortener::application::services::RegistryService;
use ttl_shortener::infrastructure::memory::InMemoryEntryRepository;
use ttl_shortener::routes::router;
use ttl_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryEntryRepository::new());
    let registry = Arc::new(RegistryService::new(repository));

    AppState::new(registry, BASE_URL)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}
