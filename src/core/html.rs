// src/core/html.rs
use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Compile a CSS selector; a bad one is a layout bug, not a user error.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Structural(format!("bad selector {css:?}: {e}")))
}

/// All text under `el`, concatenated in document order.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First `href` found on `el` or its descendants.
pub fn first_href(el: ElementRef<'_>) -> Option<String> {
    if let Some(href) = el.value().attr("href") {
        return Some(s!(href));
    }
    el.descendants()
        .filter_map(ElementRef::wrap)
        .find_map(|e| e.value().attr("href").map(String::from))
}
