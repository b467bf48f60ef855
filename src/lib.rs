// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod engine;
pub mod error;
pub mod scrape;
pub mod specs;
pub mod watch;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::config::{ExportFormat, NetOptions, ScheduleQuery, Term};
pub use crate::core::Fetcher;
pub use crate::engine::{Course, Schedule};
pub use crate::error::{FetchError, FieldError, Result, ScrapeError};
pub use crate::scrape::{collect_schedule, collect_subjects, course_info, schedule_from_html};
pub use crate::watch::Watcher;
