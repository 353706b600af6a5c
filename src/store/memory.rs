// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory persistence fake for tests.

use crate::error::AppError;
use crate::models::TrailDocument;
use crate::store::Persistence;
use std::sync::Mutex;

/// Holds the document in memory; `None` means "no document yet" so seeding
/// behaves exactly as it does against a missing file.
#[derive(Default)]
pub struct MemoryPersistence {
    doc: Mutex<Option<TrailDocument>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document instead of an empty slate.
    pub fn with_document(doc: TrailDocument) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
        }
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> Result<TrailDocument, AppError> {
        self.doc
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::Storage("No document".to_string()))
    }

    fn save(&self, doc: &TrailDocument) -> Result<(), AppError> {
        *self.doc.lock().unwrap() = Some(doc.clone());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.doc.lock().unwrap().is_some()
    }
}
