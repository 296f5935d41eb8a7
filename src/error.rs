//! Fatal error kinds for the compiler. Dropped rows (bad curie, diagonal
//! pair, below threshold) are not errors; see `transform`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    /// Caller misconfiguration. Detected before any output is written where
    /// possible (option validation, header checks), otherwise aborts mid-run.
    #[error("configuration error: {0}")]
    Config(String),

    /// No usable score column in the row and no legacy fallback applies.
    #[error("no usable score could be determined: {0}")]
    UnresolvableScore(String),
}
