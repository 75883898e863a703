//! Error types for loading, resolving and searching.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems reading the dataset directory.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Errors raised by the search core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// `remove()` on a frontier that holds no nodes. Never escapes `shortest_path`.
    #[error("empty frontier")]
    EmptyFrontier,

    #[error("Invalid strategy. Please choose 'DFS' or 'BFS'.")]
    InvalidStrategy(String),
}

/// A free-text name that could not be turned into exactly one person.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Person not found.")]
    NotFound { name: String },

    /// The name was ambiguous and the choice was missing or not one of the candidates.
    #[error("Person not found.")]
    InvalidChoice { name: String, choice: Option<String> },
}
