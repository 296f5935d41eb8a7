use semetl::{resolve_score, CompileError, SimilarityRecord};

fn record() -> SimilarityRecord {
    SimilarityRecord {
        subject_id: "HP:0001250".to_string(),
        object_id: "MP:0002064".to_string(),
        ..Default::default()
    }
}

/// Phenodigm derivation: geometric mean of the base similarity and the
/// ancestor's information content. sqrt(0.25 * 4.0) == 1.0.
#[test]
fn phenodigm_is_geometric_mean() {
    let mut rec = record();
    rec.jaccard_similarity = Some(0.25);
    rec.ancestor_information_content = Some(4.0);
    let score = resolve_score(&rec, Some("jaccard_similarity"), true).unwrap();
    assert!((score - 1.0).abs() < 1e-12);
}

/// A column that already holds the phenodigm score is taken as-is even when
/// derivation is requested.
#[test]
fn phenodigm_column_is_not_rederived() {
    let mut rec = record();
    rec.phenodigm_score = Some(0.8);
    rec.ancestor_information_content = Some(9.0);
    let score = resolve_score(&rec, Some("phenodigm_score"), true).unwrap();
    assert_eq!(score, 0.8);
}

#[test]
fn named_column_without_derivation_is_raw() {
    let mut rec = record();
    rec.cosine_similarity = Some(0.42);
    let score = resolve_score(&rec, Some("cosine_similarity"), false).unwrap();
    assert_eq!(score, 0.42);
}

/// Legacy fallback priority: phenodigm_score, then cosine_similarity, then 0.
#[test]
fn legacy_fallback_priority() {
    let mut rec = record();
    rec.phenodigm_score = Some(0.7);
    rec.cosine_similarity = Some(0.3);
    assert_eq!(resolve_score(&rec, None, false).unwrap(), 0.7);

    rec.phenodigm_score = None;
    assert_eq!(resolve_score(&rec, None, false).unwrap(), 0.3);

    rec.cosine_similarity = None;
    assert_eq!(resolve_score(&rec, None, false).unwrap(), 0.0);
}

/// A named column absent from the record also falls back in legacy mode.
#[test]
fn absent_named_column_falls_back_in_legacy_mode() {
    let mut rec = record();
    rec.cosine_similarity = Some(0.3);
    assert_eq!(resolve_score(&rec, Some("dice_similarity"), false).unwrap(), 0.3);
}

/// Derivation without the ancestor IC is a caller misconfiguration, never a
/// silent default.
#[test]
fn missing_ancestor_ic_is_config_error() {
    let mut rec = record();
    rec.jaccard_similarity = Some(0.5);
    let err = resolve_score(&rec, Some("jaccard_similarity"), true).unwrap_err();
    assert!(matches!(err, CompileError::Config(_)), "got {err:?}");
}

/// With derivation requested and no resolvable column, legacy fallback is not
/// available.
#[test]
fn no_score_with_phenodigm_is_unresolvable() {
    let mut rec = record();
    rec.ancestor_information_content = Some(2.0);
    rec.phenodigm_score = None;
    let err = resolve_score(&rec, None, true).unwrap_err();
    assert!(matches!(err, CompileError::UnresolvableScore(_)), "got {err:?}");
}
