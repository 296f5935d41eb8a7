use crate::error::CompileError;
use crate::progress::DEFAULT_AVG_ROW_BYTES;
use crate::record::NUMERIC_COLUMNS;
use crate::transform::DEFAULT_THRESHOLD_COLUMN;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output rendering mode. Unsupported names fail at parse time, never at
/// write time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Sql,
    Psv,
}

impl FromStr for OutputMode {
    type Err = CompileError;
    fn from_str(s: &str) -> Result<Self, CompileError> {
        match s {
            "sql" => Ok(OutputMode::Sql),
            "psv" => Ok(OutputMode::Psv),
            other => Err(CompileError::Config(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct CompilerOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub subject_prefix: String,
    pub object_prefix: String,
    pub threshold: f64,
    pub threshold_column: String, // "default" sentinel gates on the resolved score
    pub batch_size: usize,
    pub score_column: Option<String>,
    pub compute_phenodigm: bool,
    pub output_mode: OutputMode,

    // self-vs-self identity rows (both or neither)
    pub ic_list: Option<PathBuf>,
    pub label_list: Option<PathBuf>,

    // score fuzzing for benchmark fixtures
    pub random_range: Option<(f64, f64)>,

    pub progress: bool,
    pub progress_label: Option<String>,
    pub avg_row_bytes: u64, // row-count estimate for the bar

    // IO tuning
    pub read_buffer_bytes: usize,
    pub write_buffer_bytes: usize,
}

impl CompilerOptions {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            subject_prefix: "HP".to_string(),
            object_prefix: "HP".to_string(),
            threshold: 0.0,
            threshold_column: DEFAULT_THRESHOLD_COLUMN.to_string(),
            batch_size: crate::batch::DEFAULT_BATCH_SIZE,
            score_column: None,
            compute_phenodigm: false,
            output_mode: OutputMode::Psv,
            ic_list: None,
            label_list: None,
            random_range: None,
            progress: true,
            progress_label: None,
            avg_row_bytes: DEFAULT_AVG_ROW_BYTES,
            read_buffer_bytes: 256 * 1024,
            write_buffer_bytes: 256 * 1024,
        }
    }

    pub fn with_prefixes(mut self, subject: impl AsRef<str>, object: impl AsRef<str>) -> Self {
        self.subject_prefix = subject.as_ref().trim().to_string();
        self.object_prefix = object.as_ref().trim().to_string();
        self
    }
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
    pub fn with_threshold_column(mut self, column: impl Into<String>) -> Self {
        self.threshold_column = column.into();
        self
    }
    pub fn with_batch_size(mut self, rows: usize) -> Self {
        self.batch_size = rows.max(1);
        self
    }
    pub fn with_score_column(mut self, column: impl Into<String>) -> Self {
        self.score_column = Some(column.into());
        self
    }
    pub fn with_compute_phenodigm(mut self, yes: bool) -> Self {
        self.compute_phenodigm = yes;
        self
    }
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }
    pub fn with_term_lists(
        mut self,
        label_list: impl AsRef<Path>,
        ic_list: impl AsRef<Path>,
    ) -> Self {
        self.label_list = Some(label_list.as_ref().to_path_buf());
        self.ic_list = Some(ic_list.as_ref().to_path_buf());
        self
    }
    pub fn with_random_range(mut self, lo: f64, hi: f64) -> Self {
        self.random_range = Some((lo, hi));
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_avg_row_bytes(mut self, bytes: u64) -> Self {
        self.avg_row_bytes = bytes.max(1);
        self
    }
    pub fn with_io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self {
        self.read_buffer_bytes = read_bytes.max(8 * 1024);
        self.write_buffer_bytes = write_bytes.max(8 * 1024);
        self
    }

    /// Everything checkable without touching the input file. Fails before any
    /// output is created.
    pub fn validate(&self) -> Result<(), CompileError> {
        if self.subject_prefix.is_empty() || self.object_prefix.is_empty() {
            return Err(CompileError::Config(
                "subject and object prefixes must be non-empty".to_string(),
            ));
        }
        if self.threshold_column != DEFAULT_THRESHOLD_COLUMN
            && !NUMERIC_COLUMNS.contains(&self.threshold_column.as_str())
        {
            return Err(CompileError::Config(format!(
                "unknown threshold column '{}'",
                self.threshold_column
            )));
        }
        if let Some(column) = &self.score_column {
            if !NUMERIC_COLUMNS.contains(&column.as_str()) {
                return Err(CompileError::Config(format!(
                    "unknown score column '{column}'"
                )));
            }
        }
        if let Some((lo, hi)) = self.random_range {
            if !(lo < hi) {
                return Err(CompileError::Config(format!(
                    "random score range must satisfy min < max, got {lo},{hi}"
                )));
            }
        }
        if self.ic_list.is_some() != self.label_list.is_some() {
            return Err(CompileError::Config(
                "term label list and information-content list must be given together"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
