//! Score resolution: pick the configured score column, optionally derive the
//! composite phenodigm score, or fall back to the legacy column priority.

use crate::error::CompileError;
use crate::record::SimilarityRecord;

/// Resolve the score for one row.
///
/// Order:
/// 1. `score_column` given and present: take its value. With
///    `compute_phenodigm` (and the column not already `phenodigm_score`),
///    replace it with `sqrt(value * ancestor_information_content)` — the
///    geometric mean of the base similarity and the informativeness of the
///    most specific common ancestor.
/// 2. Otherwise, legacy fallback `phenodigm_score` -> `cosine_similarity`
///    -> `0`, only available when `compute_phenodigm` is off.
/// 3. `compute_phenodigm` without `ancestor_information_content` is a caller
///    misconfiguration and aborts; it never silently defaults.
pub fn resolve_score(
    record: &SimilarityRecord,
    score_column: Option<&str>,
    compute_phenodigm: bool,
) -> Result<f64, CompileError> {
    if let Some(column) = score_column {
        if let Some(value) = record.numeric(column) {
            if compute_phenodigm && column != "phenodigm_score" {
                return match record.ancestor_information_content {
                    Some(aic) => Ok((value * aic).sqrt()),
                    None => Err(missing_ancestor_ic(record)),
                };
            }
            return Ok(value);
        }
    }

    if compute_phenodigm {
        if record.ancestor_information_content.is_none() {
            return Err(missing_ancestor_ic(record));
        }
        return Err(CompileError::UnresolvableScore(format!(
            "no score column for {} -> {}",
            record.subject_id, record.object_id
        )));
    }

    // Legacy profiles carry a precomputed score in one of these columns.
    Ok(record
        .phenodigm_score
        .or(record.cosine_similarity)
        .unwrap_or(0.0))
}

fn missing_ancestor_ic(record: &SimilarityRecord) -> CompileError {
    CompileError::Config(format!(
        "asked to compute phenodigm score but 'ancestor_information_content' is missing \
         ({} -> {})",
        record.subject_id, record.object_id
    ))
}
