//! Merge suggestion — alias candidates among subjects.
//!
//! Two subjects become a candidate pair when their normalized names overlap
//! at or above the configured threshold AND they share at least one
//! identical (attribute, value) canonical fact. Advisory only; the registry
//! is never mutated here, and confirmation enters the system as new
//! evidence.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use canon_core::models::MergeSuggestion;

use crate::registry::FactRegistry;
use crate::similarity;

/// Scan the registry's canonical facts for likely-duplicate subjects.
pub fn suggest_merges(registry: &FactRegistry, name_similarity: f64) -> Vec<MergeSuggestion> {
    // Canonical (attribute, value) pairs per subject, keyed by the
    // lowercased subject with its display form preserved.
    let mut subjects: BTreeMap<String, (String, BTreeSet<(String, String)>)> = BTreeMap::new();
    for fact in registry.canonical_facts() {
        let entry = subjects
            .entry(fact.subject.to_lowercase())
            .or_insert_with(|| (fact.subject.clone(), BTreeSet::new()));
        entry
            .1
            .insert((fact.attribute.to_lowercase(), fact.value.to_string()));
    }

    let entries: Vec<(&String, &BTreeSet<(String, String)>)> = subjects
        .values()
        .map(|(display, facts)| (display, facts))
        .collect();

    let mut suggestions = Vec::new();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a_name, a_facts) = entries[i];
            let (b_name, b_facts) = entries[j];

            let sim = similarity::subject_similarity(a_name, b_name);
            if sim < name_similarity {
                continue;
            }
            let Some((attribute, value)) = a_facts.intersection(b_facts).next() else {
                continue;
            };

            suggestions.push(MergeSuggestion {
                id: pair_id(a_name, b_name),
                title: format!("Merge '{a_name}' and '{b_name}'"),
                rationale: format!(
                    "'{a_name}' and '{b_name}' share {attribute} = '{value}' and their \
                     names overlap ({sim:.2})"
                ),
                subjects: (a_name.clone(), b_name.clone()),
                similarity: sim,
            });
        }
    }
    suggestions
}

/// Deterministic suggestion id derived from the normalized subject pair.
fn pair_id(a: &str, b: &str) -> String {
    let mut names = [a.to_lowercase(), b.to_lowercase()];
    names.sort();
    let digest = blake3::hash(format!("{}|{}", names[0], names[1]).as_bytes());
    format!("merge-{}", &digest.to_hex().as_str()[..12])
}
