// src/specs/mod.rs
//! # Page specs
//!
//! One module per registrar page. Each spec knows *where the data lives in the
//! HTML* and returns it in a shape the rest of the crate can rely on; it never
//! fetches, caches or renders.
//!
//! ## Current specs
//! - `schedule` – results table of `xhwschedule.P_ViewSchedule`, classified
//!   into header / course / exam / continuation rows for `engine::build`.
//! - `info` – section detail page; yields the course description.
//!
//! ## Conventions
//! - CSS selectors live in `config::consts`, next to the column count they imply.
//! - A layout the spec does not recognise is a `ScrapeError::Structural`,
//!   never an empty result.
//! - Specs are testable offline against synthetic or saved HTML.
pub mod info;
pub mod schedule;

pub use schedule::{Row, RowKind, classify_rows, parse_doc};
