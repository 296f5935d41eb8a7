//! The sequential compile loop: read a batch, transform it, render it, write
//! it, then pull the next one. Identity rows (self-vs-self mode) go first and
//! share the global mapping-id counter.

use crate::batch::BatchReader;
use crate::config::{CompilerOptions, OutputMode};
use crate::curie::CurieContext;
use crate::error::CompileError;
use crate::format::render_batch;
use crate::identity::identity_rows;
use crate::lookup::TermLookup;
use crate::progress::{estimated_total_rows, make_count_progress};
use crate::record::ANCESTOR_IC_COLUMN;
use crate::transform::RowTransformer;
use crate::util::init_tracing_once;
use crate::writer::StreamingWriter;
use anyhow::Result;
use std::path::Path;

/// Builder facade over `CompilerOptions` plus the curie normalization
/// context for the run.
#[derive(Clone)]
pub struct SemsimCompiler {
    pub(crate) opts: CompilerOptions,
    curies: CurieContext,
}

/// Counters for one finished run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompileStats {
    pub rows_read: u64,
    pub rows_emitted: u64,
    pub identity_rows: u64,
    pub batches: u64,
}

impl SemsimCompiler {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            opts: CompilerOptions::new(input, output),
            curies: CurieContext::obo(),
        }
    }

    // -------- Builder methods --------
    pub fn prefixes(mut self, subject: impl AsRef<str>, object: impl AsRef<str>) -> Self { self.opts = self.opts.with_prefixes(subject, object); self }
    pub fn threshold(mut self, t: f64) -> Self { self.opts = self.opts.with_threshold(t); self }
    pub fn threshold_column(mut self, c: impl Into<String>) -> Self { self.opts = self.opts.with_threshold_column(c); self }
    pub fn batch_size(mut self, rows: usize) -> Self { self.opts = self.opts.with_batch_size(rows); self }
    pub fn score_column(mut self, c: impl Into<String>) -> Self { self.opts = self.opts.with_score_column(c); self }
    pub fn compute_phenodigm(mut self, yes: bool) -> Self { self.opts = self.opts.with_compute_phenodigm(yes); self }
    pub fn output_mode(mut self, mode: OutputMode) -> Self { self.opts = self.opts.with_output_mode(mode); self }
    pub fn term_lists(mut self, labels: impl AsRef<Path>, ics: impl AsRef<Path>) -> Self { self.opts = self.opts.with_term_lists(labels, ics); self }
    pub fn random_scores(mut self, lo: f64, hi: f64) -> Self { self.opts = self.opts.with_random_range(lo, hi); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn avg_row_bytes(mut self, bytes: u64) -> Self { self.opts = self.opts.with_avg_row_bytes(bytes); self }
    pub fn io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self { self.opts = self.opts.with_io_buffers(read_bytes, write_bytes); self }
    pub fn curie_context(mut self, curies: CurieContext) -> Self { self.curies = curies; self }

    /// Run the whole compile. Fatal configuration problems abort before the
    /// output is touched; a mid-run abort leaves no file at the output path
    /// because promotion is atomic and happens only on success.
    pub fn run(self) -> Result<CompileStats> {
        init_tracing_once();
        self.opts.validate()?;
        let opts = &self.opts;

        let lookup = match (&opts.label_list, &opts.ic_list) {
            (Some(labels), Some(ics)) => Some(TermLookup::load(labels, ics)?),
            _ => None,
        };

        let mut reader = BatchReader::open(&opts.input, opts.batch_size, opts.read_buffer_bytes)?;
        if opts.compute_phenodigm && !reader.has_column(ANCESTOR_IC_COLUMN) {
            return Err(CompileError::Config(format!(
                "compute_phenodigm requires an '{ANCESTOR_IC_COLUMN}' column in {}",
                opts.input.display()
            ))
            .into());
        }

        tracing::info!(
            input = %opts.input.display(),
            output = %opts.output.display(),
            mode = ?opts.output_mode,
            subject = %opts.subject_prefix,
            object = %opts.object_prefix,
            batch_size = opts.batch_size,
            "starting similarity compile"
        );

        let mut writer = StreamingWriter::create(&opts.output, opts.write_buffer_bytes)?;
        let transformer = RowTransformer::new(self.curies.clone(), opts);

        let mut stats = CompileStats::default();
        let mut next_id: u64 = 1;
        let mut first_batch = true;

        // Diagonal self-similarity rows come first and take the lowest ids.
        if opts.subject_prefix == opts.object_prefix {
            if let Some(lookup) = &lookup {
                let rows = identity_rows(lookup, &mut next_id);
                stats.identity_rows = rows.len() as u64;
                stats.rows_emitted += rows.len() as u64;
                let text = render_batch(
                    &rows,
                    &opts.subject_prefix,
                    &opts.object_prefix,
                    first_batch,
                    opts.output_mode,
                );
                writer.write_batch(&text)?;
                first_batch = false;
                tracing::info!(rows = lookup.len(), "injected identity rows");
            }
        }

        let pb = if opts.progress {
            let total = estimated_total_rows(&opts.input, opts.avg_row_bytes);
            Some(make_count_progress(
                total,
                opts.progress_label.as_deref().unwrap_or("Processing rows"),
            ))
        } else {
            None
        };

        while let Some(batch) = reader.next_batch()? {
            let mut rows = Vec::new();
            for record in &batch {
                if let Some(row) = transformer.transform(record, next_id)? {
                    next_id += 1;
                    rows.push(row);
                }
            }
            stats.rows_read += batch.len() as u64;
            stats.rows_emitted += rows.len() as u64;
            stats.batches += 1;

            let text = render_batch(
                &rows,
                &opts.subject_prefix,
                &opts.object_prefix,
                first_batch,
                opts.output_mode,
            );
            writer.write_batch(&text)?;
            first_batch = false;

            if let Some(pb) = &pb {
                pb.inc(batch.len() as u64);
            }
        }

        writer.finish()?;
        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }
        tracing::info!(
            rows_read = stats.rows_read,
            rows_emitted = stats.rows_emitted,
            identity_rows = stats.identity_rows,
            batches = stats.batches,
            "compile finished"
        );
        Ok(stats)
    }
}
