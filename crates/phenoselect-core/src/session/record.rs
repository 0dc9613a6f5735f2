//! Session record sent to the logging service.
//!
//! Field names are part of the logging service's contract and must not change.

use super::model::Term;
use super::state::SessionState;
use serde::{Deserialize, Serialize};

/// A term as it appears in the session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedTerm {
    pub id: String,
    pub label: String,
    pub symptom: String,
}

impl From<&Term> for RecordedTerm {
    fn from(term: &Term) -> Self {
        Self {
            id: term.id.clone(),
            label: term.label.clone(),
            symptom: term.symptom.clone(),
        }
    }
}

/// Snapshot of a session in the logging service's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    /// Body system ids, in selection order
    pub selected_systems: Vec<String>,
    pub selected_terms: Vec<RecordedTerm>,
    pub constrained_terms: Vec<RecordedTerm>,
    pub unconstrained_terms: Vec<RecordedTerm>,
    pub found_all: Option<bool>,
    pub quality_score: f64,
}

impl SessionRecord {
    pub fn from_state(state: &SessionState) -> Self {
        fn project(terms: &[Term]) -> Vec<RecordedTerm> {
            terms.iter().map(RecordedTerm::from).collect()
        }

        Self {
            session_id: state.session_id().to_string(),
            selected_systems: state
                .selected_systems()
                .iter()
                .map(|s| s.id.clone())
                .collect(),
            selected_terms: project(state.selected_terms()),
            constrained_terms: project(state.constrained_terms()),
            unconstrained_terms: project(state.unconstrained_terms()),
            found_all: state.found_all_conditions(),
            quality_score: state.quality_score(),
        }
    }
}
