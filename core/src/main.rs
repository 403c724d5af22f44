use std::path::PathBuf;

use anyhow::Result;

use pupilgraph_core::cli::run_interactive;

// Standardstier, kan overstyres: pupilgraph [datafil] [resultatmappe]
const DEFAULT_INPUT: &str = "data/LeftEyeData.tsv";
const DEFAULT_RESULTS_DIR: &str = "results";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let results_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_RESULTS_DIR.to_string()));

    run_interactive(&input, &results_dir)?;
    Ok(())
}
