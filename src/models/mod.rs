// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod journey;

pub use journey::{Journey, TrailDocument, DEFAULT_MEMBERS, STEPS_PER_MILE};
