use std::io;
use std::path::Path;

use thiserror::Error;

/// Feiltaksonomi for én analysekjøring. Alle varianter er lokale til
/// kjøringen – den interaktive sløyfen rapporterer og fortsetter.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not read input file '{path}': {source}")]
    InputFile { path: String, source: io::Error },

    #[error("input file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("failed to parse input file: {0}")]
    Csv(#[from] csv::Error),

    #[error("input file contains no samples")]
    EmptySeries,

    #[error("insufficient confident samples: every sample is below the confidence threshold")]
    NoConfidentSamples,

    #[error("no data to render for {0}")]
    NoData(&'static str),

    #[error("chart rendering failed for '{path}': {message}")]
    Render { path: String, message: String },

    #[error("could not write artifact '{path}': {source}")]
    Artifact { path: String, source: io::Error },

    #[error("could not serialize run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl PipelineError {
    pub(crate) fn input(path: &Path, source: io::Error) -> Self {
        PipelineError::InputFile {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn artifact(path: &Path, source: io::Error) -> Self {
        PipelineError::Artifact {
            path: path.display().to_string(),
            source,
        }
    }
}
