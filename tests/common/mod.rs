// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use trail_tracker::config::Config;
use trail_tracker::routes::create_router;
use trail_tracker::store::{JourneyStore, MemoryPersistence};
use trail_tracker::AppState;

/// Create a store backed by the in-memory fake, already seeded.
#[allow(dead_code)]
pub async fn seeded_store() -> JourneyStore {
    let store = JourneyStore::new(Arc::new(MemoryPersistence::new()));
    store.ensure_seeded().await.expect("seeding should succeed");
    store
}

/// Create a test app over an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = seeded_store().await;

    let state = Arc::new(AppState { config, store });

    (create_router(state.clone()), state)
}
