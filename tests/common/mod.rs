use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Fresh temp dir for one test's input/output files.
pub fn temp_base() -> PathBuf {
    tempfile::tempdir().unwrap().into_path()
}

/// Write a tab-separated file: one header row plus data rows.
pub fn write_tsv(path: &Path, header: &[&str], rows: &[Vec<String>]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    writeln!(&mut f, "{}", header.join("\t")).unwrap();
    for row in rows {
        writeln!(&mut f, "{}", row.join("\t")).unwrap();
    }
}

/// Write a header-less two-column TSV (term lists for self-vs-self mode).
pub fn write_pairs(path: &Path, pairs: &[(&str, &str)]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    for (a, b) in pairs {
        writeln!(&mut f, "{a}\t{b}").unwrap();
    }
}

/// Read a text file line-by-line into strings (skips empty lines).
pub fn read_lines(path: &Path) -> Vec<String> {
    let f = File::open(path).unwrap();
    let r = BufReader::new(f);
    r.lines().map(|l| l.unwrap()).filter(|s| !s.is_empty()).collect()
}

/// Standard input header used by most pipeline tests.
pub const HEADER: &[&str] = &[
    "subject_id",
    "subject_label",
    "object_id",
    "object_label",
    "ancestor_id",
    "ancestor_label",
    "jaccard_similarity",
    "ancestor_information_content",
    "phenodigm_score",
];

/// One data row matching `HEADER`.
pub fn row(
    subject_id: &str,
    subject_label: &str,
    object_id: &str,
    object_label: &str,
    jaccard: f64,
    ancestor_ic: f64,
    phenodigm: f64,
) -> Vec<String> {
    vec![
        subject_id.to_string(),
        subject_label.to_string(),
        object_id.to_string(),
        object_label.to_string(),
        "HP:0000001".to_string(),
        "All".to_string(),
        jaccard.to_string(),
        ancestor_ic.to_string(),
        phenodigm.to_string(),
    ]
}
