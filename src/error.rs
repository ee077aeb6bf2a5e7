use crate::groups::GroupLabel;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DrawError {
    /// The entrant list couldn't be read.
    #[error("couldn't read entrants from {path}: {source}")]
    ReadEntrants {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Wrong number of entrants (see [`crate::ENTRANT_COUNT`]).
    #[error("expected {expected} entrants, got {found}")]
    EntrantCount { expected: usize, found: usize },
    /// A group was built with the wrong number of members (see [`crate::GROUP_SIZE`]).
    #[error("group {label} must have {expected} entrants, but {found} were provided")]
    GroupSize {
        label: GroupLabel,
        expected: usize,
        found: usize,
    },
    /// The draw couldn't be serialized.
    #[error("couldn't serialize the draw: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The report couldn't be written.
    #[error("couldn't write the draw to {path}: {source}")]
    WriteDraw {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DrawError>;
