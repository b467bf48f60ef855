// src/specs/info.rs
use scraper::Html;

use crate::config::consts::INFO_CELL_SELECTOR;
use crate::core::html::{selector, text_of};
use crate::core::sanitize::trim_cell;
use crate::error::{Result, ScrapeError};

/// Course description from a section detail page.
///
/// The page is a two-column entry table whose first cell reads "Description:".
pub fn parse_info_page(html_doc: &str) -> Result<String> {
    let doc = Html::parse_document(html_doc);
    let td = selector(INFO_CELL_SELECTOR)?;

    let mut cells = doc.select(&td).map(|c| trim_cell(&text_of(c)));
    let label = cells
        .next()
        .ok_or_else(|| ScrapeError::Structural(s!("no page info found")))?;
    if !label.eq_ignore_ascii_case("description:") {
        return Err(ScrapeError::Structural(format!("expected a description, found {label:?}")));
    }
    cells
        .next()
        .ok_or_else(|| ScrapeError::Structural(s!("description label without text")))
}
