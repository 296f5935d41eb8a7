//! Chunked reading of the similarity table: fixed-size batches pulled from a
//! forward-only TSV stream, so peak memory is bounded by the batch size.

use crate::record::{validate_header, SimilarityRecord};
use crate::util::open_with_backoff;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Rows per batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

/// Forward-only batch reader over the headered, tab-separated input. Not
/// restartable mid-stream; the only reset is reopening the file.
pub struct BatchReader {
    path: PathBuf,
    rdr: csv::Reader<BufReader<File>>,
    columns: Vec<String>,
    batch_size: usize,
}

impl BatchReader {
    /// Open the input and validate its header against the recognized column
    /// set (once, not per row).
    pub fn open(path: &Path, batch_size: usize, read_buf_bytes: usize) -> Result<Self> {
        let file = open_with_backoff(path, 16, 50)
            .with_context(|| format!("open {}", path.display()))?;
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(BufReader::with_capacity(read_buf_bytes.max(8 * 1024), file));

        let columns: Vec<String> = rdr
            .headers()
            .with_context(|| format!("read header of {}", path.display()))?
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        validate_header(&columns)?;

        Ok(Self {
            path: path.to_path_buf(),
            rdr,
            columns,
            batch_size: batch_size.max(1),
        })
    }

    /// Header presence check, used for fail-fast configuration validation.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Pull the next batch of up to `batch_size` records in file order.
    /// Returns `None` once the stream is exhausted.
    pub fn next_batch(&mut self) -> Result<Option<Vec<SimilarityRecord>>> {
        let mut batch = Vec::with_capacity(self.batch_size.min(1024));
        let mut iter = self.rdr.deserialize::<SimilarityRecord>();
        while batch.len() < self.batch_size {
            match iter.next() {
                Some(result) => {
                    let record =
                        result.with_context(|| format!("parse {}", self.path.display()))?;
                    batch.push(record);
                }
                None => break,
            }
        }
        if batch.is_empty() {
            Ok(None)
        } else {
            Ok(Some(batch))
        }
    }
}
