//! Application state: the session plus the terms-of-use acceptance flag.

use super::mutation::Mutation;
use super::state::SessionState;
use serde::Serialize;

/// Everything the front end mutates during one run of the application.
///
/// The terms-of-use flag gates navigation but is not part of the session
/// record, so it lives beside the session rather than inside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub session: SessionState,
    terms_of_use_accepted: bool,
}

impl AppState {
    /// Creates the initial application state with a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an application state around an existing session.
    pub fn with_session(session: SessionState) -> Self {
        Self {
            session,
            terms_of_use_accepted: false,
        }
    }

    pub fn terms_of_use_accepted(&self) -> bool {
        self.terms_of_use_accepted
    }

    pub fn accept_terms_of_use(&mut self) {
        self.terms_of_use_accepted = true;
    }

    /// Applies a single mutation.
    ///
    /// # Panics
    ///
    /// Panics on `RemoveTermAtIndex` with an index outside the selected terms.
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::AddTerm {
                term,
                filter_enabled,
            } => {
                self.session.add_term(term, filter_enabled);
            }
            Mutation::RemoveTermAtIndex(index) => {
                self.session.remove_term_at_index(index);
            }
            Mutation::ToggleSystem(system) => {
                self.session.toggle_system(system);
            }
            Mutation::AcceptTermsOfUse => self.accept_terms_of_use(),
            Mutation::SetQualityScore(score) => self.session.set_quality_score(score),
            Mutation::SetScoringError(error) => self.session.set_scoring_error(error),
            Mutation::SetFoundAllConditions(value) => self.session.set_found_all_conditions(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::session::model::{BodySystem, Term};

    #[test]
    fn test_initial_state() {
        let state = AppState::new();

        assert!(!state.terms_of_use_accepted());
        assert!(state.session.selected_terms().is_empty());
        assert!(state.session.selected_systems().is_empty());
        assert_eq!(state.session.quality_score(), 0.0);
        assert!(state.session.scoring_error().is_none());
        assert!(state.session.found_all_conditions().is_none());
        assert!(!state.session.session_id().is_empty());
    }

    #[test]
    fn test_accept_terms_of_use() {
        let mut state = AppState::new();
        state.apply(Mutation::AcceptTermsOfUse);
        assert!(state.terms_of_use_accepted());
    }

    #[test]
    fn test_apply_dispatches_each_mutation() {
        let mut state = AppState::with_session(SessionState::with_session_id("s-1"));
        let term = Term::new("HP:0000316", "Hypertelorism", "Widely spaced eyes");

        state.apply(Mutation::AddTerm {
            term: term.clone(),
            filter_enabled: true,
        });
        state.apply(Mutation::ToggleSystem(BodySystem::new("HP:0000478", "Eye")));
        state.apply(Mutation::SetScoringError(ServiceError::transport("boom")));
        state.apply(Mutation::SetQualityScore(1.42));
        state.apply(Mutation::SetFoundAllConditions(false));

        assert_eq!(state.session.selected_terms(), &[term.clone()]);
        assert_eq!(state.session.constrained_terms(), &[term]);
        assert!(state.session.is_system_selected("HP:0000478"));
        assert_eq!(state.session.quality_score(), 1.42);
        assert!(state.session.scoring_error().is_none());
        assert_eq!(state.session.found_all_conditions(), Some(false));

        state.apply(Mutation::RemoveTermAtIndex(0));
        assert!(state.session.selected_terms().is_empty());
        assert!(state.session.constrained_terms().is_empty());
        assert_eq!(state.session.session_id(), "s-1");
    }
}
