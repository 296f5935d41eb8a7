//! Streaming output writer: owns the output path for the run, writes each
//! rendered batch immediately, and promotes a temp file atomically on success
//! so an aborted run never leaves a half-written file at the final path.

use crate::util::{create_with_backoff, remove_with_backoff, replace_file_atomic_backoff};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct StreamingWriter {
    tmp_path: PathBuf,
    final_path: PathBuf,
    w: Option<BufWriter<File>>,
}

impl StreamingWriter {
    /// Remove any output left by a prior run (the writer never appends), then
    /// open a `.part` temp file next to the final path.
    pub fn create(final_path: &Path, write_buf_bytes: usize) -> Result<Self> {
        remove_with_backoff(final_path, 16, 50)?;
        let tmp_path = PathBuf::from(format!("{}.part", final_path.display()));
        let file = create_with_backoff(&tmp_path, 16, 50)
            .with_context(|| format!("create {}", tmp_path.display()))?;
        Ok(Self {
            tmp_path,
            final_path: final_path.to_path_buf(),
            w: Some(BufWriter::with_capacity(write_buf_bytes.max(8 * 1024), file)),
        })
    }

    /// Append one rendered batch. Empty batches write nothing, so PSV output
    /// never contains blank lines.
    pub fn write_batch(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if let Some(w) = &mut self.w {
            w.write_all(text.as_bytes())?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flush and atomically promote the temp file to the final path.
    pub fn finish(mut self) -> Result<()> {
        if let Some(mut w) = self.w.take() {
            w.flush()
                .with_context(|| format!("flush {}", self.tmp_path.display()))?;
        }
        replace_file_atomic_backoff(&self.tmp_path, &self.final_path)
    }
}

impl Drop for StreamingWriter {
    fn drop(&mut self) {
        // Dropped without finish(): the run aborted. Discard the partial temp.
        if self.w.take().is_some() {
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}
