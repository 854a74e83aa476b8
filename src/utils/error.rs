use std::path::PathBuf;
use thiserror::Error;

/// Unified error handling type for the application
///
/// Uses thiserror for deriving error handling, providing clear error context information
#[derive(Debug, Error)]
pub enum AppError {
    /// IO operation error: {0}
    #[error("IO operation error: {0}")]
    IoError(#[from] std::io::Error),

    /// Neither -INIT nor -GEN was given
    #[error("At least one mode (INIT | GEN) must be chosen")]
    NoModeSelected,

    /// Both -INIT and -GEN were given
    #[error("Only one mode (INIT | GEN) may be chosen at a time")]
    ConflictingModes,

    /// Required argument missing for the selected mode
    #[error("Mode {mode} requires argument --{arg}")]
    MissingArgument { mode: &'static str, arg: &'static str },

    /// Invalid setup codename: {0}
    #[error("Invalid setup codename `{0}`: use only letters, digits, '-' or '_' and no file suffix")]
    InvalidCodename(String),

    /// No setup record stored under the codename
    #[error("No setup stored under codename `{codename}` (expected {path:?}); run -INIT first")]
    SetupNotFound { codename: String, path: PathBuf },

    /// Setup record exists but is not valid JSON
    #[error("Failed to parse setup file {path:?}: {source}")]
    SetupParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
