//! Static catalog of selectable body systems and phenotype terms.
//!
//! Codes are Human Phenotype Ontology identifiers. Body system labels are the
//! lay wording shown to users, not the ontology's own labels.

use crate::error::{PhenoError, Result};
use crate::session::{BodySystem, Term};

/// (id, label)
const BODY_SYSTEMS: &[(&str, &str)] = &[
    ("HP:0000707", "Brain / Nervous system"),
    ("HP:0000478", "Eye"),
    ("HP:0000598", "Ear"),
    ("HP:0000152", "Head / Neck"),
    ("HP:0001626", "Heart / Blood vessels"),
    ("HP:0002086", "Lungs / Breathing"),
    ("HP:0025031", "Digestive system"),
    ("HP:0000119", "Kidney / Urinary / Genitals"),
    ("HP:0000924", "Skeleton"),
    ("HP:0003011", "Muscles"),
    ("HP:0001574", "Skin / Hair / Nails"),
    ("HP:0000818", "Hormone / Endocrine"),
    ("HP:0001939", "Metabolism"),
    ("HP:0002715", "Immune system"),
    ("HP:0001871", "Blood"),
    ("HP:0001507", "Growth"),
    ("HP:0001197", "Prenatal / Birth"),
    ("HP:0002664", "Cancer"),
];

/// (id, label, symptom)
const TERMS: &[(&str, &str, &str)] = &[
    ("HP:0001250", "Seizure", "Seizures"),
    ("HP:0000316", "Hypertelorism", "Widely spaced eyes"),
    ("HP:0001263", "Global developmental delay", "Delayed milestones"),
    ("HP:0000256", "Macrocephaly", "Large head"),
    ("HP:0000252", "Microcephaly", "Small head"),
    ("HP:0001252", "Hypotonia", "Low muscle tone"),
    ("HP:0000750", "Delayed speech and language development", "Late talking"),
    ("HP:0000729", "Autistic behavior", "Autism-like behavior"),
    ("HP:0001631", "Atrial septal defect", "Hole in the upper heart wall"),
    ("HP:0001629", "Ventricular septal defect", "Hole in the lower heart wall"),
    ("HP:0000365", "Hearing impairment", "Hearing loss"),
    ("HP:0000505", "Visual impairment", "Poor vision"),
    ("HP:0000486", "Strabismus", "Crossed eyes"),
    ("HP:0000175", "Cleft palate", "Split in the roof of the mouth"),
    ("HP:0000204", "Cleft upper lip", "Split upper lip"),
    ("HP:0001510", "Growth delay", "Slow growth"),
    ("HP:0004322", "Short stature", "Short height"),
    ("HP:0001513", "Obesity", "Excess body fat"),
    ("HP:0002650", "Scoliosis", "Curved spine"),
    ("HP:0001159", "Syndactyly", "Fused fingers or toes"),
    ("HP:0001161", "Hand polydactyly", "Extra fingers"),
    ("HP:0000953", "Hyperpigmentation of the skin", "Dark patches of skin"),
    ("HP:0000028", "Cryptorchidism", "Undescended testis"),
    ("HP:0000077", "Abnormality of the kidney", "Kidney problems"),
    ("HP:0002021", "Pyloric stenosis", "Projectile vomiting in infancy"),
    ("HP:0001508", "Failure to thrive", "Poor weight gain"),
    ("HP:0000821", "Hypothyroidism", "Underactive thyroid"),
    ("HP:0002664", "Neoplasm", "Tumor"),
];

fn term_from_row(&(id, label, symptom): &(&str, &str, &str)) -> Term {
    Term::new(id, label, symptom)
}

/// All body systems, in presentation order.
pub fn body_systems() -> Vec<BodySystem> {
    BODY_SYSTEMS
        .iter()
        .map(|&(id, label)| BodySystem::new(id, label))
        .collect()
}

/// All phenotype terms, in catalog order.
pub fn terms() -> Vec<Term> {
    TERMS.iter().map(term_from_row).collect()
}

pub fn find_body_system(id: &str) -> Option<BodySystem> {
    BODY_SYSTEMS
        .iter()
        .find(|(system_id, _)| *system_id == id)
        .map(|&(id, label)| BodySystem::new(id, label))
}

pub fn find_term(id: &str) -> Option<Term> {
    TERMS.iter().find(|(term_id, _, _)| *term_id == id).map(term_from_row)
}

/// Looks up a term, failing with `PhenoError::NotFound` when the code is unknown.
pub fn require_term(id: &str) -> Result<Term> {
    find_term(id).ok_or_else(|| PhenoError::not_found("Term", id))
}

/// Looks up a body system, failing with `PhenoError::NotFound` when the code is unknown.
pub fn require_body_system(id: &str) -> Result<BodySystem> {
    find_body_system(id).ok_or_else(|| PhenoError::not_found("BodySystem", id))
}

/// Case-insensitive substring search over term labels and symptoms.
///
/// Results keep catalog order. An empty (or whitespace-only) query matches
/// every term.
pub fn search_terms(query: &str) -> Vec<Term> {
    let needle = query.trim().to_lowercase();
    TERMS
        .iter()
        .filter(|(_, label, symptom)| {
            needle.is_empty()
                || label.to_lowercase().contains(&needle)
                || symptom.to_lowercase().contains(&needle)
        })
        .map(term_from_row)
        .collect()
}
