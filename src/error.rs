// src/error.rs
use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can stop a schedule from being produced.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unknown term {0:?} (expected spring, summer or fall)")]
    UnknownTerm(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page no longer has the layout the column offsets depend on.
    #[error("unexpected page layout: {0}")]
    Structural(String),

    #[error("row {row}: {source} (cells: {values:?})")]
    RowParse {
        row: usize,
        values: Vec<String>,
        #[source]
        source: FieldError,
    },

    #[error("row {row}: exam row has no preceding course row")]
    OrphanExam { row: usize },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("bad url {0:?}")]
    Url(String),
}

impl FetchError {
    /// HTTP status when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            FetchError::Url(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failure to read one cell (or a small group of cells) into a typed value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("could not parse {field} from {value:?}: {source}")]
    Number {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{field} {value:?} carries a sign")]
    Signed { field: &'static str, value: String },

    #[error("invalid time range {0:?}")]
    TimeRange(String),

    #[error("invalid date range {0:?}")]
    DateRange(String),

    #[error("invalid course code {0:?}")]
    CourseCode(String),

    #[error("no weekday in {0:?}")]
    Weekday(String),

    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("crn {0} appears more than once")]
    DuplicateCrn(u32),
}
