// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Journey model and the persisted document that holds all journeys.

use serde::{Deserialize, Serialize};

/// Fixed conversion factor from miles to expected step count.
pub const STEPS_PER_MILE: f64 = 2100.0;

/// Default member list applied when the caller supplies none.
pub const DEFAULT_MEMBERS: [&str; 2] = ["You", "Husband"];

/// A tracked hiking-progress campaign with a distance goal and step counter.
///
/// Field names on the wire are camelCase to match the document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Unique within the store; assigned as max existing id + 1.
    pub id: u64,
    pub name: String,
    pub total_miles: f64,
    /// Derived at creation as `round(total_miles * 2100)`; never recomputed.
    pub total_steps: i64,
    /// Monotonically increasing step counter, starts at 0.
    pub current_steps: i64,
    pub members: Vec<String>,
    /// RFC3339 timestamp fixed at creation.
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

impl Journey {
    /// Construct a new journey with derived fields filled in.
    pub fn new(
        id: u64,
        name: String,
        total_miles: f64,
        members: Option<Vec<String>>,
        created_at: String,
    ) -> Self {
        Self {
            id,
            name,
            total_miles,
            total_steps: expected_steps(total_miles),
            current_steps: 0,
            members: members
                .unwrap_or_else(|| DEFAULT_MEMBERS.iter().map(|m| m.to_string()).collect()),
            created_at,
            last_updated: None,
            last_updated_by: None,
        }
    }
}

/// Expected total steps for a distance goal.
pub fn expected_steps(total_miles: f64) -> i64 {
    (total_miles * STEPS_PER_MILE).round() as i64
}

/// The single persisted document holding all journeys.
///
/// Insertion order is creation order; order matters only for display and
/// for the max-id computation, not for identity.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrailDocument {
    pub journeys: Vec<Journey>,
}

impl TrailDocument {
    /// Next id under the max+1 rule (1 for an empty document).
    pub fn next_id(&self) -> u64 {
        self.journeys.iter().map(|j| j.id).max().map_or(1, |m| m + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_steps_rounding() {
        assert_eq!(expected_steps(10.0), 21_000);
        assert_eq!(expected_steps(100.5), 211_050);
        // .5 rounds away from zero
        assert_eq!(expected_steps(0.25), 525);
        assert_eq!(expected_steps(0.0001), 0);
    }

    #[test]
    fn test_new_journey_defaults() {
        let j = Journey::new(1, "Test".to_string(), 10.0, None, "now".to_string());
        assert_eq!(j.current_steps, 0);
        assert_eq!(j.members, vec!["You", "Husband"]);
        assert!(j.last_updated.is_none());
        assert!(j.last_updated_by.is_none());
    }

    #[test]
    fn test_next_id() {
        let mut doc = TrailDocument::default();
        assert_eq!(doc.next_id(), 1);

        doc.journeys
            .push(Journey::new(7, "A".to_string(), 1.0, None, "t".to_string()));
        doc.journeys
            .push(Journey::new(3, "B".to_string(), 1.0, None, "t".to_string()));
        assert_eq!(doc.next_id(), 8);
    }

    #[test]
    fn test_wire_field_names() {
        let j = Journey::new(1, "Test".to_string(), 10.0, None, "t".to_string());
        let value = serde_json::to_value(&j).unwrap();
        assert!(value.get("totalMiles").is_some());
        assert!(value.get("totalSteps").is_some());
        assert!(value.get("currentSteps").is_some());
        assert!(value.get("createdAt").is_some());
        // Optional fields are omitted until set
        assert!(value.get("lastUpdated").is_none());
        assert!(value.get("lastUpdatedBy").is_none());
    }
}
