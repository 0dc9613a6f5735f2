//! Terms-of-use navigation gate.
//!
//! Pure predicates deciding whether a page transition proceeds or is
//! redirected, based only on whether the terms of use have been accepted.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Pages of the front end.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Route {
    #[strum(serialize = "/")]
    Root,
    #[strum(serialize = "/body-systems")]
    BodySystems,
    #[strum(serialize = "/search")]
    Search,
    #[strum(serialize = "/feedback")]
    Feedback,
    #[strum(serialize = "/results")]
    Results,
    #[strum(serialize = "/terms-of-use")]
    TermsOfUse,
}

impl Route {
    /// Resolves a path; anything unknown falls back to the root page.
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or(Route::Root)
    }

    pub fn path(&self) -> &str {
        self.as_ref()
    }

    /// Every page except the terms page requires accepted terms of use.
    pub fn requires_terms_of_use(&self) -> bool {
        !matches!(self, Route::TermsOfUse)
    }
}

/// Outcome of a navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Redirect(Route),
}

/// Global guard: protected pages redirect to the terms page until accepted.
pub fn check_terms_accepted(target: Route, terms_accepted: bool) -> GateDecision {
    if target.requires_terms_of_use() && !terms_accepted {
        GateDecision::Redirect(Route::TermsOfUse)
    } else {
        GateDecision::Proceed
    }
}

/// Guard on entering the terms page: once accepted, skip ahead to body systems.
pub fn skip_when_already_accepted(terms_accepted: bool) -> GateDecision {
    if terms_accepted {
        GateDecision::Redirect(Route::BodySystems)
    } else {
        GateDecision::Proceed
    }
}

/// Runs both guards for a transition to `target`.
///
/// The root page has no content of its own and always forwards to the terms
/// page, whose guard then moves on to body systems once accepted.
pub fn resolve(target: Route, terms_accepted: bool) -> GateDecision {
    match target {
        Route::Root => GateDecision::Redirect(Route::TermsOfUse),
        Route::TermsOfUse => skip_when_already_accepted(terms_accepted),
        _ => check_terms_accepted(target, terms_accepted),
    }
}
