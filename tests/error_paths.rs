#[path = "common/mod.rs"]
mod common;

use common::*;
use semetl::{CompileError, CompilerOptions, OutputMode, SemsimCompiler};
use std::str::FromStr;

/// Unsupported output mode names fail at parse time as a configuration error.
#[test]
fn unsupported_output_mode_is_rejected() {
    assert_eq!(OutputMode::from_str("sql").unwrap(), OutputMode::Sql);
    assert_eq!(OutputMode::from_str("psv").unwrap(), OutputMode::Psv);
    let err = OutputMode::from_str("csv").unwrap_err();
    assert!(matches!(err, CompileError::Config(_)));
}

/// compute_phenodigm without the ancestor IC column is caught from the header,
/// before any output file is created.
#[test]
fn phenodigm_without_ancestor_ic_fails_before_output() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    let out = base.join("mappings.psv");

    write_tsv(
        &input,
        &["subject_id", "subject_label", "object_id", "object_label", "jaccard_similarity"],
        &[vec![
            "HP:0000001".to_string(),
            "A".to_string(),
            "MP:0000010".to_string(),
            "a".to_string(),
            "0.5".to_string(),
        ]],
    );

    let err = SemsimCompiler::new(&input, &out)
        .prefixes("HP", "MP")
        .score_column("jaccard_similarity")
        .compute_phenodigm(true)
        .progress(false)
        .run()
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<CompileError>(), Some(CompileError::Config(_))));
    assert!(!out.exists(), "no output may be written for a config error");
}

/// A header missing a required column aborts before any output.
#[test]
fn missing_required_column_fails() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    let out = base.join("mappings.psv");

    write_tsv(
        &input,
        &["subject_label", "object_id", "object_label"],
        &[],
    );

    let err = SemsimCompiler::new(&input, &out)
        .prefixes("HP", "MP")
        .progress(false)
        .run()
        .unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("subject_id"), "got: {msg}");
    assert!(!out.exists());
}

#[test]
fn unknown_threshold_or_score_column_is_config_error() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    write_tsv(&input, HEADER, &[]);

    let err = SemsimCompiler::new(&input, base.join("a.psv"))
        .prefixes("HP", "MP")
        .threshold_column("no_such_column")
        .progress(false)
        .run()
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<CompileError>(), Some(CompileError::Config(_))));

    let err = SemsimCompiler::new(&input, base.join("b.psv"))
        .prefixes("HP", "MP")
        .score_column("no_such_column")
        .progress(false)
        .run()
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<CompileError>(), Some(CompileError::Config(_))));
}

#[test]
fn one_sided_term_lists_are_rejected() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    write_tsv(&input, HEADER, &[]);

    let mut opts = CompilerOptions::new(&input, base.join("out.psv"));
    opts.ic_list = Some(base.join("hp_ic.tsv"));
    let err = opts.validate().unwrap_err();
    assert!(matches!(err, CompileError::Config(_)));
}

/// An unreadable term list fails with the offending path in the error.
#[test]
fn unreadable_term_list_fails_with_path() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    write_tsv(&input, HEADER, &[]);
    let labels = base.join("labels.tsv");
    write_pairs(&labels, &[("HP:0000001", "All")]);

    let err = SemsimCompiler::new(&input, base.join("out.psv"))
        .prefixes("HP", "HP")
        .term_lists(&labels, base.join("missing_ic.tsv"))
        .progress(false)
        .run()
        .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("missing_ic.tsv"), "got: {msg}");
}

#[test]
fn invalid_random_range_is_config_error() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    write_tsv(&input, HEADER, &[]);

    let err = SemsimCompiler::new(&input, base.join("out.psv"))
        .prefixes("HP", "MP")
        .random_scores(1.0, 0.5)
        .progress(false)
        .run()
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<CompileError>(), Some(CompileError::Config(_))));
}

/// The random override replaces every data-row score with a draw from the
/// range; the emitted scores must fall inside it.
#[test]
fn random_override_replaces_scores() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    let out = base.join("mappings.psv");

    write_tsv(
        &input,
        HEADER,
        &[
            row("HP:0000001", "A", "MP:0000010", "a", 0.9, 1.0, 0.0),
            row("HP:0000002", "B", "MP:0000020", "b", 0.1, 1.0, 0.0),
        ],
    );

    let stats = SemsimCompiler::new(&input, &out)
        .prefixes("HP", "MP")
        .score_column("jaccard_similarity")
        .random_scores(0.25, 0.75)
        .progress(false)
        .run()
        .unwrap();

    assert_eq!(stats.rows_emitted, 2);
    for line in read_lines(&out) {
        let fields: Vec<&str> = line.split('|').collect();
        let score: f64 = fields[7].parse().unwrap();
        assert!((0.25..0.75).contains(&score), "score {score} outside range");
    }
}

/// A mid-run fatal error (unresolvable score) aborts without leaving a file
/// at the final output path.
#[test]
fn mid_run_abort_leaves_no_output() {
    let base = temp_base();
    let input = base.join("semsim.tsv");
    let out = base.join("mappings.psv");

    write_tsv(
        &input,
        HEADER,
        &[row("HP:0000001", "A", "MP:0000010", "a", 0.5, 4.0, 0.0)],
    );

    // compute_phenodigm with no score column: the header has the IC column so
    // validation passes, then the first row fails with UnresolvableScore.
    let err = SemsimCompiler::new(&input, &out)
        .prefixes("HP", "MP")
        .compute_phenodigm(true)
        .progress(false)
        .run()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompileError>(),
        Some(CompileError::UnresolvableScore(_))
    ));
    assert!(!out.exists(), "aborted run must not leave a final output file");
}
