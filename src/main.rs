use anyhow::Result;
use semetl::{OutputMode, SemsimCompiler};

const INPUT: &str = "./data/phenio-plus-hp-mp.0.semsimian.tsv";
const OUTPUT: &str = "./out/hp-mp-mappings.psv";

fn main() -> Result<()> {
    let stats = SemsimCompiler::new(INPUT, OUTPUT)
        .prefixes("HP", "MP")
        .score_column("jaccard_similarity")
        .compute_phenodigm(true)
        .threshold(0.6)
        .output_mode(OutputMode::Psv)
        .progress(true)
        .run()?;

    println!(
        "emitted {} of {} rows ({} identity) in {} batches",
        stats.rows_emitted, stats.rows_read, stats.identity_rows, stats.batches
    );
    Ok(())
}
