//! Free-text label cleanup for quoted SQL literals and the fixed-width
//! term columns.

/// Labels are truncated to fit the downstream VARCHAR column.
pub const MAX_LABEL_LEN: usize = 144;

/// Remove single quotes (they would break quoted SQL literals) and truncate
/// to `MAX_LABEL_LEN` characters. Total function, never fails.
pub fn sanitize_label(text: &str) -> String {
    text.chars().filter(|&c| c != '\'').take(MAX_LABEL_LEN).collect()
}
