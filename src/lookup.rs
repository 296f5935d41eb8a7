//! Term lookup side table for self-vs-self runs: left join of a label list
//! and an information-content list on term id, kept in label-list order.

use crate::util::open_with_backoff;
use ahash::AHashMap;
use anyhow::{Context, Result};
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TermEntry {
    pub id: String,
    pub label: String,
    /// Missing information content defaults to 1.0 at use.
    pub ic: Option<f64>,
}

/// Built once at startup and held for the run. Iteration order is the label
/// list's order, which fixes the identity-row order and their mapping ids.
#[derive(Debug, Clone, Default)]
pub struct TermLookup {
    entries: Vec<TermEntry>,
}

impl TermLookup {
    /// Load from two header-less, two-column TSV files: `label_list` is
    /// `term_id<TAB>label`, `ic_list` is `term_id<TAB>information_content`.
    pub fn load(label_list: &Path, ic_list: &Path) -> Result<Self> {
        let mut ic_by_id = AHashMap::new();
        for (id, raw) in read_pairs(ic_list)? {
            let ic: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("bad information content for {id} in {}", ic_list.display()))?;
            ic_by_id.insert(id, ic);
        }

        let mut entries = Vec::new();
        for (id, label) in read_pairs(label_list)? {
            let ic = ic_by_id.get(&id).copied();
            entries.push(TermEntry { id, label, ic });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }
}

fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let file = open_with_backoff(path, 16, 50)
        .with_context(|| format!("open {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut pairs = Vec::new();
    for result in rdr.records() {
        let rec = result.with_context(|| format!("read {}", path.display()))?;
        let id = rec.get(0).unwrap_or("").trim();
        if id.is_empty() {
            continue;
        }
        let value = rec.get(1).unwrap_or("").trim();
        pairs.push((id.to_string(), value.to_string()));
    }
    Ok(pairs)
}
