// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Journey store: read-modify-write operations over one persisted document.
//!
//! All state lives in a single [`TrailDocument`]. Every mutation loads the
//! full document, edits it in memory, and saves it back. A write lock makes
//! at-most-one-writer an explicit invariant rather than an accident of
//! scheduling; on a multi-threaded runtime two unserialized read-modify-write
//! cycles would silently drop one side's update.

pub mod file;
pub mod memory;

pub use file::FilePersistence;
pub use memory::MemoryPersistence;

use crate::error::AppError;
use crate::models::{Journey, TrailDocument, DEFAULT_MEMBERS};
use crate::time_utils::format_utc_rfc3339;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Whole-document persistence backend.
///
/// The document is small enough that load/save are synchronous; swapping in
/// [`MemoryPersistence`] gives tests a disk-free store.
pub trait Persistence: Send + Sync {
    /// Load the full document. Fails if it is missing, unreadable, or not
    /// valid JSON.
    fn load(&self) -> Result<TrailDocument, AppError>;
    /// Overwrite the full document.
    fn save(&self, doc: &TrailDocument) -> Result<(), AppError>;
    /// Whether a document has been persisted yet.
    fn exists(&self) -> bool;
}

/// Name of the journey seeded on first start.
const SEED_JOURNEY_NAME: &str = "Appalachian Trail";
const SEED_JOURNEY_MILES: f64 = 2190.0;
/// Step total for the seed journey. Fixed by the document format; not
/// derived from the miles-to-steps conversion.
const SEED_JOURNEY_STEPS: i64 = 4_598_400;

/// Typed operations over the persisted journey document.
#[derive(Clone)]
pub struct JourneyStore {
    persistence: Arc<dyn Persistence>,
    write_lock: Arc<Mutex<()>>,
}

impl JourneyStore {
    pub fn new(persistence: Arc<dyn Persistence>) -> Self {
        Self {
            persistence,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the document on first start, seeded with one default journey.
    ///
    /// A document that already exists is left untouched, even if malformed;
    /// the error surfaces on the first read instead.
    pub async fn ensure_seeded(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        if self.persistence.exists() {
            return Ok(());
        }

        let seed = Journey {
            id: 1,
            name: SEED_JOURNEY_NAME.to_string(),
            total_miles: SEED_JOURNEY_MILES,
            total_steps: SEED_JOURNEY_STEPS,
            current_steps: 0,
            members: DEFAULT_MEMBERS.iter().map(|m| m.to_string()).collect(),
            created_at: format_utc_rfc3339(chrono::Utc::now()),
            last_updated: None,
            last_updated_by: None,
        };

        tracing::info!(journey = SEED_JOURNEY_NAME, "Seeding journey document");
        self.persistence.save(&TrailDocument {
            journeys: vec![seed],
        })
    }

    /// All journeys in creation order.
    ///
    /// Reads take no lock; a concurrent write replaces the whole document
    /// atomically from the reader's point of view.
    pub async fn list(&self) -> Result<Vec<Journey>, AppError> {
        Ok(self.persistence.load()?.journeys)
    }

    /// Append a new journey and return it.
    pub async fn create(
        &self,
        name: String,
        total_miles: f64,
        members: Option<Vec<String>>,
    ) -> Result<Journey, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.persistence.load()?;
        let journey = Journey::new(
            doc.next_id(),
            name,
            total_miles,
            members,
            format_utc_rfc3339(chrono::Utc::now()),
        );

        doc.journeys.push(journey.clone());
        self.persistence.save(&doc)?;

        tracing::info!(id = journey.id, name = %journey.name, "Journey created");
        Ok(journey)
    }

    /// Add steps to a journey and stamp who recorded them.
    ///
    /// Unknown ids fail with `NotFound` and leave the document unchanged.
    pub async fn record_steps(
        &self,
        id: u64,
        steps: i64,
        member_name: String,
    ) -> Result<Journey, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.persistence.load()?;
        let journey = doc
            .journeys
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Journey {} not found", id)))?;

        journey.current_steps += steps;
        journey.last_updated = Some(format_utc_rfc3339(chrono::Utc::now()));
        journey.last_updated_by = Some(member_name);
        let updated = journey.clone();

        self.persistence.save(&doc)?;

        tracing::info!(
            id = updated.id,
            steps,
            current_steps = updated.current_steps,
            "Steps recorded"
        );
        Ok(updated)
    }

    /// Remove a journey by id.
    ///
    /// Deleting an id that does not exist is not an error; the document is
    /// persisted either way and the call succeeds.
    pub async fn delete(&self, id: u64) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.persistence.load()?;
        doc.journeys.retain(|j| j.id != id);
        self.persistence.save(&doc)?;

        tracing::info!(id, "Journey deleted");
        Ok(())
    }
}
