//! Synthetic diagonal (self-similarity) rows. The upstream similarity engine
//! never reports a term against itself and the row transformer drops diagonal
//! pairs, yet downstream consumers need a self entry for every known term.

use crate::labels::sanitize_label;
use crate::lookup::TermLookup;
use crate::transform::MappingRow;

/// Sentinel root term used as the diagonal rows' common ancestor.
pub const ROOT_TERM: &str = "HP:0000000";

/// One row per lookup entry, in lookup order, consuming ids from the shared
/// counter. `simj` is 1.0 by definition; the score is the phenodigm geometric
/// mean against the term's own information content, `sqrt(1.0 * ic)`.
pub fn identity_rows(lookup: &TermLookup, next_id: &mut u64) -> Vec<MappingRow> {
    let mut rows = Vec::with_capacity(lookup.len());
    for term in lookup.iter() {
        let ic = term.ic.unwrap_or(1.0);
        let label = sanitize_label(&term.label);
        rows.push(MappingRow {
            mapping_id: *next_id,
            subject_curie: term.id.clone(),
            subject_term: label.clone(),
            object_curie: term.id.clone(),
            object_term: label,
            simj: 1.0,
            ic,
            score: ic.sqrt(),
            lcs_id: Some(ROOT_TERM.to_string()),
            lcs_term: String::new(),
        });
        *next_id += 1;
    }
    rows
}
