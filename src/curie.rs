//! Curie normalization: compress full ontology-term URIs to compact prefixed
//! form and validate them against the fixed-width downstream id column.

use regex::Regex;

/// Longest compact id the downstream mapping table accepts. Anything longer
/// is treated as malformed/unregistered and dropped, not an error.
pub const MAX_CURIE_LEN: usize = 10;

/// Immutable normalization context, constructed once per run and owned by the
/// row transformer. Knows the OBO PURL convention plus any registered custom
/// URI expansions; unknown identifiers pass through unchanged.
#[derive(Clone, Debug)]
pub struct CurieContext {
    obo_purl: Regex,
    expansions: Vec<(String, String)>, // (uri_prefix, curie_prefix)
}

impl CurieContext {
    /// Context with the standard OBO PURL rule:
    /// `http://purl.obolibrary.org/obo/HP_0001250` -> `HP:0001250`.
    pub fn obo() -> Self {
        let obo_purl =
            Regex::new(r"^https?://purl\.obolibrary\.org/obo/([A-Za-z][A-Za-z0-9]*)_(\S+)$")
                .unwrap();
        Self { obo_purl, expansions: Vec::new() }
    }

    /// Register an extra URI expansion, e.g.
    /// `("https://omim.org/entry/", "OMIM")`.
    pub fn with_expansion(
        mut self,
        uri_prefix: impl Into<String>,
        curie_prefix: impl Into<String>,
    ) -> Self {
        self.expansions.push((uri_prefix.into(), curie_prefix.into()));
        self
    }

    /// Compress to the shortest registered prefixed form; passthrough when no
    /// rule matches (the input may already be compact).
    pub fn compress(&self, id: &str) -> String {
        let id = id.trim();
        if let Some(caps) = self.obo_purl.captures(id) {
            return format!("{}:{}", &caps[1], &caps[2]);
        }
        for (uri_prefix, curie_prefix) in &self.expansions {
            if let Some(rest) = id.strip_prefix(uri_prefix.as_str()) {
                return format!("{curie_prefix}:{rest}");
            }
        }
        id.to_string()
    }

    /// Compress and validate. Returns `None` (drop signal) when the compact
    /// form exceeds `MAX_CURIE_LEN` or, if `required_prefix` is given, when it
    /// does not start with `"<prefix>:"` (case-sensitive).
    pub fn normalize(&self, id: &str, required_prefix: Option<&str>) -> Option<String> {
        let curie = self.compress(id);
        if curie.chars().count() > MAX_CURIE_LEN {
            return None;
        }
        if let Some(prefix) = required_prefix {
            if !curie.starts_with(&format!("{prefix}:")) {
                return None;
            }
        }
        Some(curie)
    }
}
