// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Journey CRUD endpoints.

use crate::error::{AppError, Result};
use crate::models::Journey;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Journey routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/journeys", get(list_journeys).post(create_journey))
        .route("/api/journeys/{id}/steps", post(record_steps))
        .route("/api/journeys/{id}", delete(delete_journey))
}

// ─── List ────────────────────────────────────────────────────

/// Get all journeys in creation order.
async fn list_journeys(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Journey>>> {
    let journeys = state.store.list().await?;
    Ok(Json(journeys))
}

// ─── Create ──────────────────────────────────────────────────

/// Request body for creating a journey.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJourneyRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    /// Target distance in miles. NaN fails the range check along with
    /// everything below the minimum.
    #[validate(range(min = 0.1, message = "totalMiles must be at least 0.1"))]
    pub total_miles: f64,
    pub members: Option<Vec<String>>,
}

/// Create a new journey.
async fn create_journey(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateJourneyRequest>,
) -> Result<Json<Journey>> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if !body.total_miles.is_finite() {
        return Err(AppError::BadRequest(
            "totalMiles must be a finite number".to_string(),
        ));
    }

    let journey = state
        .store
        .create(body.name, body.total_miles, body.members)
        .await?;
    Ok(Json(journey))
}

// ─── Record Steps ────────────────────────────────────────────

/// Request body for recording steps on a journey.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordStepsRequest {
    /// Steps only ever accumulate; the counter cannot go backwards.
    #[validate(range(min = 1, message = "steps must be at least 1"))]
    pub steps: i64,
    #[validate(length(min = 1, max = 100, message = "memberName must be 1-100 characters"))]
    pub member_name: String,
}

/// Add steps to a journey on behalf of a member.
async fn record_steps(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<RecordStepsRequest>,
) -> Result<Json<Journey>> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let journey = state
        .store
        .record_steps(id, body.steps, body.member_name)
        .await?;
    Ok(Json(journey))
}

// ─── Delete ──────────────────────────────────────────────────

/// Response for journey deletion.
#[derive(Serialize)]
pub struct DeleteJourneyResponse {
    pub success: bool,
}

/// Delete a journey. Succeeds whether or not the id existed.
async fn delete_journey(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteJourneyResponse>> {
    state.store.delete(id).await?;
    Ok(Json(DeleteJourneyResponse { success: true }))
}
