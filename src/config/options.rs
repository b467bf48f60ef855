// src/config/options.rs
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Spring,
    Summer,
    Fall,
}

impl Term {
    /// Registrar suffix appended to the year in `validterm`.
    pub fn code(self) -> &'static str {
        match self {
            Term::Spring => "10",
            Term::Summer => "20",
            Term::Fall => "30",
        }
    }
}

impl FromStr for Term {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Term::Spring),
            "summer" => Ok(Term::Summer),
            "fall" => Ok(Term::Fall),
            _ => Err(ScrapeError::UnknownTerm(s!(s))),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Term::Spring => "spring",
            Term::Summer => "summer",
            Term::Fall => "fall",
        })
    }
}

/// One registrar search: a (year, term, subject) triple plus the open-seats flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub year: i32,
    pub term: Term,
    /// `None` means every subject.
    pub subject: Option<String>,
    pub open_only: bool,
}

impl ScheduleQuery {
    /// Build a query from user text. The term is checked here, before any request.
    pub fn new(year: i32, term: &str, subject: &str, open_only: bool) -> Result<Self> {
        let term = term.parse()?;
        Ok(Self { year, term, subject: None, open_only }.with_subject(subject))
    }

    /// Same query for another subject; blank means all subjects.
    pub fn with_subject(&self, subject: &str) -> Self {
        let subject = subject.trim();
        Self {
            subject: (!subject.is_empty()).then(|| subject.to_ascii_uppercase()),
            ..self.clone()
        }
    }

    pub fn open_only(&self, open_only: bool) -> Self {
        Self { open_only, ..self.clone() }
    }

    pub fn valid_term(&self) -> String {
        format!("{}{}", self.year, self.term.code())
    }

    pub fn subject_code(&self) -> &str {
        self.subject.as_deref().unwrap_or(ALL_SUBJECTS)
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            (PARAM_TERM, self.valid_term()),
            (PARAM_OPEN, s!(if self.open_only { "Y" } else { "N" })),
            (PARAM_SUBJECT, s!(self.subject_code())),
        ]
    }
}

/// Transport settings for [`crate::core::net::Fetcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Csv,
    #[default]
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}
