use semetl::{sanitize_label, CurieContext, MAX_LABEL_LEN};

/// OBO PURLs compress to `PREFIX:LOCAL`; already-compact ids pass through.
#[test]
fn obo_purl_compresses_to_curie() {
    let ctx = CurieContext::obo();
    assert_eq!(
        ctx.normalize("http://purl.obolibrary.org/obo/HP_0001250", Some("HP")),
        Some("HP:0001250".to_string())
    );
    assert_eq!(
        ctx.normalize("https://purl.obolibrary.org/obo/MP_0002064", Some("MP")),
        Some("MP:0002064".to_string())
    );
    assert_eq!(
        ctx.normalize("HP:0001250", Some("HP")),
        Some("HP:0001250".to_string())
    );
}

/// Compact forms longer than 10 characters are the drop signal, even when the
/// URI itself was well-formed.
#[test]
fn long_compact_forms_are_dropped() {
    let ctx = CurieContext::obo();
    // 10 chars: fits exactly.
    assert!(ctx.normalize("MP:0000001", Some("MP")).is_some());
    // 11 chars: over the fixed-width column.
    assert_eq!(ctx.normalize("MP:00000012", Some("MP")), None);
    // Unregistered URI passes through uncompressed and is far too long.
    assert_eq!(ctx.normalize("http://example.org/terms/thing", None), None);
}

/// Prefix check is exact and case-sensitive, matched as `"<prefix>:"`.
#[test]
fn required_prefix_is_case_sensitive() {
    let ctx = CurieContext::obo();
    assert_eq!(ctx.normalize("MP:0000001", Some("HP")), None);
    assert_eq!(ctx.normalize("hp:0000001", Some("HP")), None);
    assert!(ctx.normalize("HP:0000001", Some("HP")).is_some());
}

#[test]
fn custom_expansions_apply() {
    let ctx = CurieContext::obo().with_expansion("http://x.org/id/", "X");
    assert_eq!(ctx.normalize("http://x.org/id/123", Some("X")), Some("X:123".to_string()));
}

/// The documented sanitizer property: quotes gone, exactly 144 chars.
#[test]
fn labels_are_quote_stripped_and_truncated() {
    let long = format!("Long QT syndrome'3 {}", "x".repeat(150));
    let clean = sanitize_label(&long);
    assert_eq!(clean.chars().count(), MAX_LABEL_LEN);
    assert!(!clean.contains('\''));
    assert!(clean.starts_with("Long QT syndrome3 "));
}

#[test]
fn short_labels_pass_through() {
    assert_eq!(sanitize_label("Seizure"), "Seizure");
    assert_eq!(sanitize_label(""), "");
}
