use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors – fatal to startup, shown as a blocking message
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is empty (expected a banner row)", .path.display())]
    MissingBanner { path: PathBuf },

    #[error("{} has no header row after the banner", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("{} is missing required columns: {}", .path.display(), .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
}

// ---------------------------------------------------------------------------
// Per-cell parse errors – never escape the normalizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty cell")]
    Empty,

    #[error("'{0}' is not a number")]
    Invalid(String),

    #[error("'{0}' is not a finite number")]
    NonFinite(String),
}

// ---------------------------------------------------------------------------
// Selection errors – the detail view falls back to a placeholder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no companies match the current filters")]
    EmptySubset,

    #[error("'{0}' is not in the filtered companies")]
    NotFound(String),
}
