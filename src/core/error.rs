//! Error kinds raised by the extraction pipeline.
//!
//! Every variant is fatal: the pipeline never recovers locally, and no
//! catalog is written once any of these has been returned.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while resolving and parsing the source set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("project directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("no source files found under {}", .0.display())]
    NoSourceFiles(PathBuf),

    #[error("invalid ignore pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Failures while persisting the serialized catalog.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("output directory does not exist: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{file}:{offset}: cannot classify call: {message}")]
    Classification {
        file: String,
        offset: usize,
        message: String,
    },

    #[error("{file}:{offset}: cannot derive message id: {message}")]
    Derivation {
        file: String,
        offset: usize,
        message: String,
    },

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl ExtractError {
    /// Attribute a call-site failure to `file`, the project-relative name.
    pub fn in_file(self, file: &str) -> Self {
        match self {
            Self::Classification {
                offset, message, ..
            } => Self::Classification {
                file: file.to_string(),
                offset,
                message,
            },
            Self::Derivation {
                offset, message, ..
            } => Self::Derivation {
                file: file.to_string(),
                offset,
                message,
            },
            other => other,
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;
