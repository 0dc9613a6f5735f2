use phenoselect_core::registry;

pub fn systems() {
    for system in registry::body_systems() {
        println!("{}  {}", system.id, system.label);
    }
}

pub fn terms(query: Option<&str>) {
    let terms = match query {
        Some(query) => registry::search_terms(query),
        None => registry::terms(),
    };

    if terms.is_empty() {
        println!("No matching terms");
        return;
    }

    for term in terms {
        println!("{}  {} ({})", term.id, term.label, term.symptom);
    }
}
