//! Progress reporting: a count-style bar driven by an estimated total row
//! count. The estimate is a display aid only; it never affects output.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Assumed average row width (bytes) for the row-count estimate.
pub const DEFAULT_AVG_ROW_BYTES: u64 = 200;

/// Estimate total input rows from file size divided by the assumed average
/// row width. May over- or under-shoot; that's fine for a bar.
pub fn estimated_total_rows(path: &Path, avg_row_bytes: u64) -> u64 {
    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    size / avg_row_bytes.max(1)
}

/// Count-style progress bar (rows processed out of estimated total).
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         it/s: {per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}",
    )
    .unwrap()
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
