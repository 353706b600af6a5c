// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed persistence: the whole document as pretty-printed JSON.

use crate::error::AppError;
use crate::models::TrailDocument;
use crate::store::Persistence;
use std::path::PathBuf;

/// Persists the document as one JSON file, overwritten in full on save.
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persistence for FilePersistence {
    fn load(&self) -> Result<TrailDocument, AppError> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| AppError::Storage(format!("Failed to read {}: {}", self.path.display(), e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("Failed to parse {}: {}", self.path.display(), e)))
    }

    fn save(&self, doc: &TrailDocument) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Storage(format!("Failed to serialize document: {}", e)))?;

        std::fs::write(&self.path, raw)
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e)))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
