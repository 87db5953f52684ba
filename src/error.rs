use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range construction input. Reported before any file I/O.
    #[error("Invalid parameter: {0}.")]
    InvalidParameter(String),

    #[error("Template syntax error in '{template}': {message}")]
    TemplateSyntaxError { template: String, message: String },

    /// A manifest entry has no template source.
    #[error("Template asset '{asset}' is missing (expected at '{}').", path.display())]
    AssetMissing { asset: String, path: PathBuf },

    #[error("IO error on '{}': {source}.", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process image '{}'. Original error: {source}", path.display())]
    ImageError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to load options file: {0}.")]
    ConfigError(String),

    #[error("Cannot proceed: output directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wraps an `std::io::Error` together with the path it happened on.
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::IoFailure { path: path.as_ref().to_path_buf(), source }
    }

    pub fn template<S: Into<String>>(template: S, err: &minijinja::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(inner) = source {
            message.push_str(&format!(": {inner}"));
            source = inner.source();
        }
        Error::TemplateSyntaxError { template: template.into(), message }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ConfigError(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::ConfigError(e.to_string())
    }
}

/// Convenience type alias for Results with guigen's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
