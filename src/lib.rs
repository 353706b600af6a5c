// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trail-Tracker: track group hiking progress toward a distance goal.
//!
//! This crate provides the backend API for journey records: each journey
//! converts a target distance into an expected step count and accumulates
//! steps recorded by its members.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod time_utils;

use config::Config;
use store::JourneyStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: JourneyStore,
}
