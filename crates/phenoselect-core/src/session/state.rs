//! Session state and its mutators.
//!
//! `SessionState` is the single authoritative snapshot of a user's
//! in-progress session. Fields are private so that every change goes through
//! one of the mutators below, which keep these invariants:
//!
//! - `selected_terms` and `selected_systems` hold no two entries with the same `id`
//! - every selected term lives in exactly one of `constrained_terms` /
//!   `unconstrained_terms`, and those partitions hold nothing else
//! - setting a quality score clears any scoring error

use super::model::{BodySystem, Term};
use super::record::SessionRecord;
use crate::error::ServiceError;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    session_id: String,
    selected_systems: Vec<BodySystem>,
    selected_terms: Vec<Term>,
    constrained_terms: Vec<Term>,
    unconstrained_terms: Vec<Term>,
    quality_score: f64,
    scoring_error: Option<ServiceError>,
    found_all_conditions: Option<bool>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Starts a new session with a freshly generated UUID v4 identifier.
    pub fn new() -> Self {
        Self::with_session_id(Uuid::new_v4().to_string())
    }

    /// Starts a new session with a caller-provided identifier.
    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            selected_systems: Vec::new(),
            selected_terms: Vec::new(),
            constrained_terms: Vec::new(),
            unconstrained_terms: Vec::new(),
            quality_score: 0.0,
            scoring_error: None,
            found_all_conditions: None,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn selected_systems(&self) -> &[BodySystem] {
        &self.selected_systems
    }

    pub fn selected_terms(&self) -> &[Term] {
        &self.selected_terms
    }

    /// Terms added while the filtering mode was active.
    pub fn constrained_terms(&self) -> &[Term] {
        &self.constrained_terms
    }

    /// Terms added while the filtering mode was inactive.
    pub fn unconstrained_terms(&self) -> &[Term] {
        &self.unconstrained_terms
    }

    pub fn quality_score(&self) -> f64 {
        self.quality_score
    }

    pub fn scoring_error(&self) -> Option<&ServiceError> {
        self.scoring_error.as_ref()
    }

    pub fn found_all_conditions(&self) -> Option<bool> {
        self.found_all_conditions
    }

    pub fn is_term_selected(&self, term_id: &str) -> bool {
        self.selected_terms.iter().any(|t| t.id == term_id)
    }

    pub fn is_system_selected(&self, system_id: &str) -> bool {
        self.selected_systems.iter().any(|s| s.id == system_id)
    }

    // ============================================================================
    // Mutators
    // ============================================================================

    /// Appends `term` unless a term with the same id is already selected.
    ///
    /// The term is also recorded in the constrained partition when
    /// `filter_enabled` is true, otherwise in the unconstrained one.
    /// Returns whether the term was added.
    pub fn add_term(&mut self, term: Term, filter_enabled: bool) -> bool {
        if self.is_term_selected(&term.id) {
            return false;
        }

        if filter_enabled {
            self.constrained_terms.push(term.clone());
        } else {
            self.unconstrained_terms.push(term.clone());
        }
        self.selected_terms.push(term);
        true
    }

    /// Removes the selected term at `index` and drops it from its mode partition.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position in the selected terms. An
    /// out-of-range index means the caller's view of the selection is out of
    /// sync with the session.
    pub fn remove_term_at_index(&mut self, index: usize) -> Term {
        assert!(
            index < self.selected_terms.len(),
            "remove_term_at_index: index {} out of range for {} selected terms",
            index,
            self.selected_terms.len()
        );

        let removed = self.selected_terms.remove(index);
        self.constrained_terms.retain(|t| !t.same_id(&removed));
        self.unconstrained_terms.retain(|t| !t.same_id(&removed));
        removed
    }

    /// Selects `system` if no system with its id is selected, deselects it otherwise.
    ///
    /// Returns whether the system is selected afterwards.
    pub fn toggle_system(&mut self, system: BodySystem) -> bool {
        match self.selected_systems.iter().position(|s| s.id == system.id) {
            Some(pos) => {
                self.selected_systems.remove(pos);
                false
            }
            None => {
                self.selected_systems.push(system);
                true
            }
        }
    }

    pub fn set_quality_score(&mut self, score: f64) {
        self.quality_score = score;
        self.scoring_error = None;
    }

    /// Records a failed scoring attempt. The last successful score is kept.
    pub fn set_scoring_error(&mut self, error: ServiceError) {
        self.scoring_error = Some(error);
    }

    pub fn set_found_all_conditions(&mut self, value: bool) {
        self.found_all_conditions = Some(value);
    }

    /// Snapshots the session into the record sent to the logging service.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord::from_state(self)
    }
}
