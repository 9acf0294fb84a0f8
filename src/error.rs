//! Error taxonomy for the survey.
//!
//! Every failure is handled at the boundary where it occurs and turned into a
//! message the evaluator can see. Image lookup misses are not errors at all;
//! they degrade to a placeholder inside `images`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// Reference image folder does not exist.
    #[error("image folder not found: {}", path.display())]
    MissingFolder { path: PathBuf },

    /// Reference folder exists but holds no usable images.
    #[error("no image files found in {}", path.display())]
    EmptyCatalog { path: PathBuf },

    /// Required form fields were left empty; the stage does not change.
    #[error("{message}")]
    ValidationRejected { message: String },

    /// Export could not be written. The in-memory record is kept.
    #[error("failed to save results to {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SurveyError {
    pub fn validation(message: impl Into<String>) -> Self {
        SurveyError::ValidationRejected {
            message: message.into(),
        }
    }
}
