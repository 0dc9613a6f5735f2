//! Typed session mutations.
//!
//! Every user action and every orchestrator outcome is expressed as one
//! `Mutation`. The store applies them one at a time, which is what makes the
//! per-field invariants hold under concurrent orchestrators.

use super::model::{BodySystem, Term};
use crate::error::ServiceError;
use strum::IntoStaticStr;

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Mutation {
    AddTerm { term: Term, filter_enabled: bool },
    /// Index into the selected terms. Must be in range.
    RemoveTermAtIndex(usize),
    ToggleSystem(BodySystem),
    AcceptTermsOfUse,
    SetQualityScore(f64),
    SetScoringError(ServiceError),
    SetFoundAllConditions(bool),
}

impl Mutation {
    /// Stable operation name, used in logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
