//! Selectable catalog entities.
//!
//! Both entities are identified by their stable HPO code. Membership checks
//! across the session compare `id`s only, never the whole value.

use serde::{Deserialize, Serialize};

/// A single clinical phenotype entry selectable by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Stable code (e.g. "HP:0000316")
    pub id: String,
    /// Clinical label (e.g. "Hypertelorism")
    pub label: String,
    /// Lay description of the finding (e.g. "Widely spaced eyes")
    pub symptom: String,
}

impl Term {
    pub fn new(id: impl Into<String>, label: impl Into<String>, symptom: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            symptom: symptom.into(),
        }
    }

    /// Returns true when both values denote the same catalog entry.
    pub fn same_id(&self, other: &Term) -> bool {
        self.id == other.id
    }
}

/// A coarse anatomical/physiological category selectable by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySystem {
    pub id: String,
    pub label: String,
}

impl BodySystem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
