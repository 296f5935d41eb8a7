//! Per-row transform: score resolution, threshold gate, curie normalization,
//! label cleanup. Produces zero or one `MappingRow` per input record.

use crate::config::CompilerOptions;
use crate::curie::CurieContext;
use crate::error::CompileError;
use crate::labels::sanitize_label;
use crate::record::SimilarityRecord;
use crate::score::resolve_score;
use rand::Rng;

/// Threshold-column sentinel meaning "gate on the resolved score".
pub const DEFAULT_THRESHOLD_COLUMN: &str = "default";

/// One emitted output row, in output column order.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingRow {
    pub mapping_id: u64,
    pub subject_curie: String,
    pub subject_term: String,
    pub object_curie: String,
    pub object_term: String,
    pub simj: f64,
    pub ic: f64,
    pub score: f64,
    /// Ancestor curie; `None` when its compact form was invalid.
    pub lcs_id: Option<String>,
    pub lcs_term: String,
}

/// Owns the normalization context and the per-run transform policy.
pub struct RowTransformer {
    curies: CurieContext,
    subject_prefix: String,
    object_prefix: String,
    score_column: Option<String>,
    compute_phenodigm: bool,
    threshold: f64,
    threshold_column: String,
    random_range: Option<(f64, f64)>,
}

impl RowTransformer {
    pub fn new(curies: CurieContext, opts: &CompilerOptions) -> Self {
        Self {
            curies,
            subject_prefix: opts.subject_prefix.clone(),
            object_prefix: opts.object_prefix.clone(),
            score_column: opts.score_column.clone(),
            compute_phenodigm: opts.compute_phenodigm,
            threshold: opts.threshold,
            threshold_column: opts.threshold_column.clone(),
            random_range: opts.random_range,
        }
    }

    /// Turn one record into zero or one output row. `Ok(None)` is the normal
    /// silent drop (below threshold, invalid curie, diagonal pair); errors
    /// from score resolution abort the run.
    pub fn transform(
        &self,
        record: &SimilarityRecord,
        mapping_id: u64,
    ) -> Result<Option<MappingRow>, CompileError> {
        let mut score =
            resolve_score(record, self.score_column.as_deref(), self.compute_phenodigm)?;
        if let Some((lo, hi)) = self.random_range {
            score = rand::rng().random_range(lo..hi);
        }

        let threshold_value = if self.threshold_column == DEFAULT_THRESHOLD_COLUMN {
            score
        } else {
            record.numeric(&self.threshold_column).unwrap_or(0.0)
        };
        if threshold_value < self.threshold {
            return Ok(None);
        }

        let subject_curie =
            match self.curies.normalize(&record.subject_id, Some(self.subject_prefix.as_str())) {
                Some(c) => c,
                None => return Ok(None),
            };
        let object_curie =
            match self.curies.normalize(&record.object_id, Some(self.object_prefix.as_str())) {
                Some(c) => c,
                None => return Ok(None),
            };
        if subject_curie == object_curie {
            // Diagonal entries come from the identity injector instead.
            return Ok(None);
        }
        let lcs_id = self.curies.normalize(&record.ancestor_id, None);

        Ok(Some(MappingRow {
            mapping_id,
            subject_curie,
            subject_term: sanitize_label(&record.subject_label),
            object_curie,
            object_term: sanitize_label(&record.object_label),
            simj: record.jaccard_similarity.unwrap_or(0.0),
            ic: record.ancestor_information_content.unwrap_or(0.0),
            score,
            lcs_id,
            lcs_term: sanitize_label(&record.ancestor_label),
        }))
    }
}
