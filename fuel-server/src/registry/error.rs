//! Registry error types.

use std::path::PathBuf;

use crate::domain::{InvalidPrice, InvalidStation, StationId};

/// Errors returned by registry queries and updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No station has the requested id
    #[error("station {0} not found")]
    NotFound(StationId),

    /// A price input was rejected; nothing was modified
    #[error(transparent)]
    InvalidPrice(#[from] InvalidPrice),
}

/// Errors that can occur while building a registry from seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seed file is not a valid station list
    #[error("failed to parse seed file {}: {message}", path.display())]
    Json { path: PathBuf, message: String },

    /// Two seed records share an id
    #[error("duplicate station id {0}")]
    DuplicateId(StationId),

    /// A seed record breaks a station invariant
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),
}
