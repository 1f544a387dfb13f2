use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot load config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: iconscale::Error,
    },

    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{errors} source image(s) failed")]
    BatchFailed { errors: usize },
}
