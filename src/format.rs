//! Batch rendering: one SQL `INSERT ... VALUES` block or one pipe-delimited
//! line per row, plus the one-time `TRUNCATE` preamble in SQL mode.

use crate::config::OutputMode;
use crate::transform::MappingRow;

/// Render one batch as output text. The returned string carries no trailing
/// newline; the writer adds batch separators. Empty string means "nothing to
/// write for this batch".
pub fn render_batch(
    rows: &[MappingRow],
    subject_prefix: &str,
    object_prefix: &str,
    first_batch: bool,
    mode: OutputMode,
) -> String {
    match mode {
        OutputMode::Sql => render_sql(rows, subject_prefix, object_prefix, first_batch),
        OutputMode::Psv => render_psv(rows),
    }
}

fn table_name(subject_prefix: &str, object_prefix: &str) -> String {
    format!("{subject_prefix}_{object_prefix}_MAPPINGS")
}

/// Self-vs-self tables would repeat the prefix, so the object column pair is
/// suffixed `_HIT` to keep the names unique. Distinct prefixes use the plain
/// `{P}_ID` / `{P}_TERM` form.
fn column_list(subject_prefix: &str, object_prefix: &str) -> String {
    let hit = if subject_prefix == object_prefix { "_HIT" } else { "" };
    format!(
        "MAPPING_ID, {s}_ID, {s}_TERM, {o}_ID{hit}, {o}_TERM{hit}, SIMJ, IC, SCORE, LCS_ID, LCS_TERM",
        s = subject_prefix,
        o = object_prefix,
    )
}

fn render_sql(
    rows: &[MappingRow],
    subject_prefix: &str,
    object_prefix: &str,
    first_batch: bool,
) -> String {
    let table = table_name(subject_prefix, object_prefix);
    let mut out = String::new();
    if first_batch {
        out.push_str(&format!("TRUNCATE TABLE {table};"));
    }
    if rows.is_empty() {
        // No INSERT for a fully filtered batch.
        return out;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "INSERT INTO {table}\n    ({})\n    VALUES\n",
        column_list(subject_prefix, object_prefix)
    ));
    let tuples: Vec<String> = rows.iter().map(sql_tuple).collect();
    out.push_str(&tuples.join(",\n"));
    out.push(';');
    out
}

/// Literal-value tuple. Labels and curies have already been quote-stripped by
/// the sanitizer/normalizer, so plain single-quoting is safe here.
fn sql_tuple(row: &MappingRow) -> String {
    let lcs_id = match &row.lcs_id {
        Some(id) => format!("'{id}'"),
        None => "NULL".to_string(),
    };
    format!(
        "({}, '{}', '{}', '{}', '{}', {}, {}, {}, {}, '{}')",
        row.mapping_id,
        row.subject_curie,
        row.subject_term,
        row.object_curie,
        row.object_term,
        fmt_f64(row.simj),
        fmt_f64(row.ic),
        fmt_f64(row.score),
        lcs_id,
        row.lcs_term,
    )
}

fn render_psv(rows: &[MappingRow]) -> String {
    let lines: Vec<String> = rows.iter().map(psv_line).collect();
    lines.join("\n")
}

/// Ten `|`-joined fields in output column order, empty string for null.
fn psv_line(row: &MappingRow) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        row.mapping_id,
        row.subject_curie,
        row.subject_term,
        row.object_curie,
        row.object_term,
        fmt_f64(row.simj),
        fmt_f64(row.ic),
        fmt_f64(row.score),
        row.lcs_id.as_deref().unwrap_or(""),
        row.lcs_term,
    )
}

/// Whole numbers keep one decimal place (`1.0`, not `1`) so the fields stay
/// recognizably floating-point to downstream loaders.
fn fmt_f64(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}
