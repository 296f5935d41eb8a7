//! Input row schema for the similarity table, plus one-time header
//! validation against the recognized column set.

use crate::error::CompileError;
use serde::Deserialize;

/// Every column the compiler knows how to read. Arbitrary order in the input;
/// anything else in the header is ignored with a warning.
pub const RECOGNIZED_COLUMNS: &[&str] = &[
    "subject_id",
    "subject_label",
    "object_id",
    "object_label",
    "ancestor_id",
    "ancestor_label",
    "jaccard_similarity",
    "ancestor_information_content",
    "subject_information_content",
    "object_information_content",
    "cosine_similarity",
    "dice_similarity",
    "phenodigm_score",
];

/// Numeric columns usable as a score or threshold source.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "jaccard_similarity",
    "ancestor_information_content",
    "subject_information_content",
    "object_information_content",
    "cosine_similarity",
    "dice_similarity",
    "phenodigm_score",
];

/// Columns that must be present in the header.
pub const REQUIRED_COLUMNS: &[&str] =
    &["subject_id", "subject_label", "object_id", "object_label"];

pub const ANCESTOR_IC_COLUMN: &str = "ancestor_information_content";

/// One parsed line of the similarity table. Optional numeric columns keep
/// their presence (`None` = column absent) because score resolution
/// distinguishes "absent" from zero; output defaults are applied at emit time.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityRecord {
    #[serde(default)]
    pub subject_id: String,
    #[serde(default)]
    pub subject_label: String,
    #[serde(default)]
    pub object_id: String,
    #[serde(default)]
    pub object_label: String,
    #[serde(default = "default_ancestor_id")]
    pub ancestor_id: String,
    #[serde(default = "default_ancestor_label")]
    pub ancestor_label: String,
    #[serde(default)]
    pub jaccard_similarity: Option<f64>,
    #[serde(default)]
    pub ancestor_information_content: Option<f64>,
    #[serde(default)]
    pub subject_information_content: Option<f64>,
    #[serde(default)]
    pub object_information_content: Option<f64>,
    #[serde(default)]
    pub cosine_similarity: Option<f64>,
    #[serde(default)]
    pub dice_similarity: Option<f64>,
    #[serde(default)]
    pub phenodigm_score: Option<f64>,
}

fn default_ancestor_id() -> String {
    "HP:0000000".to_string()
}

fn default_ancestor_label() -> String {
    "phenotype".to_string()
}

impl Default for SimilarityRecord {
    fn default() -> Self {
        Self {
            subject_id: String::new(),
            subject_label: String::new(),
            object_id: String::new(),
            object_label: String::new(),
            ancestor_id: default_ancestor_id(),
            ancestor_label: default_ancestor_label(),
            jaccard_similarity: None,
            ancestor_information_content: None,
            subject_information_content: None,
            object_information_content: None,
            cosine_similarity: None,
            dice_similarity: None,
            phenodigm_score: None,
        }
    }
}

impl SimilarityRecord {
    /// Typed by-name access to the numeric columns (score/threshold sources).
    /// Unrecognized names behave like an absent column.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "jaccard_similarity" => self.jaccard_similarity,
            "ancestor_information_content" => self.ancestor_information_content,
            "subject_information_content" => self.subject_information_content,
            "object_information_content" => self.object_information_content,
            "cosine_similarity" => self.cosine_similarity,
            "dice_similarity" => self.dice_similarity,
            "phenodigm_score" => self.phenodigm_score,
            _ => None,
        }
    }
}

/// Validate the header once at stream start: required id/label columns must
/// exist; unrecognized columns are logged and ignored.
pub fn validate_header(columns: &[String]) -> Result<(), CompileError> {
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(CompileError::Config(format!(
                "input is missing required column '{required}'"
            )));
        }
    }
    for col in columns {
        if !RECOGNIZED_COLUMNS.contains(&col.as_str()) {
            tracing::warn!(column = %col, "ignoring unrecognized input column");
        }
    }
    Ok(())
}
