// src/specs/schedule.rs
//! Results page (`xhwschedule.P_ViewSchedule`) row classifier.
//!
//! Layout, as the registrar renders it:
//! - one `table.datadisplaytable` inside `div.pagebodydiv`
//! - header rows of `th.ddlabel` cells, 13 of them
//! - data rows of `td.dddefault` cells; empty cells hold a lone `&nbsp;`
//! - secondary rows (exam, extra lecture/lab meeting) start with a run of
//!   empty cells followed by `EXAM`, `LECT` or `LAB`
//!
//! Column offsets used by the builder only hold while the header has 13
//! labels, so a header of any other width stops the scrape.

use scraper::{ElementRef, Html};

use crate::config::consts::{
    COLUMNS, DATA_CELL_SELECTOR, HEADER_CELL_SELECTOR, ROW_SELECTOR, TWO_LOCATION_COLUMNS,
};
use crate::core::html::{first_href, selector, text_of};
use crate::core::sanitize::{squash_label, trim_cell};
use crate::engine::fields::parse_count;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Course { crn: u32 },
    Exam,
    /// Extra meeting time of the lecture above.
    MultiLecture,
    /// Extra meeting time of the lab above.
    MultiLab,
    /// Course listing the builder cannot use (two locations). Kept so that
    /// rows below it are not credited to the course before it.
    Skipped { crn: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    /// Index of the `<tr>` among all selected rows.
    pub position: usize,
    pub info_url: Option<String>,
    /// Header labels, or trimmed data cells starting at the first non-empty one.
    pub values: Vec<String>,
}

/// Parse page text and classify its rows.
pub fn parse_doc(html_doc: &str) -> Result<Vec<Row>> {
    let t = std::time::Instant::now();
    let doc = Html::parse_document(html_doc);
    let rows = classify_rows(&doc)?;
    logd!("Schedule: classified {} rows in {:?}", rows.len(), t.elapsed());
    Ok(rows)
}

pub fn classify_rows(doc: &Html) -> Result<Vec<Row>> {
    let tr_sel = selector(ROW_SELECTOR)?;
    let th_sel = selector(HEADER_CELL_SELECTOR)?;
    let td_sel = selector(DATA_CELL_SELECTOR)?;

    let mut rows = Vec::with_capacity(512);
    let mut failures: Vec<ScrapeError> = Vec::new();
    let mut courses = 0usize;

    for (position, tr) in doc.select(&tr_sel).enumerate() {
        let labels: Vec<String> = tr.select(&th_sel).map(|th| squash_label(&text_of(th))).collect();
        if !labels.is_empty() {
            if labels.len() != COLUMNS {
                return Err(ScrapeError::Structural(format!(
                    "expected {COLUMNS} header columns, found {}: {labels:?}",
                    labels.len()
                )));
            }
            rows.push(Row { kind: RowKind::Header, position, info_url: None, values: labels });
            continue;
        }

        let cells: Vec<ElementRef> = tr.select(&td_sel).collect();
        let values: Vec<String> = cells.iter().map(|td| trim_cell(&text_of(*td))).collect();

        // Merged cells leave a run of blanks in front of secondary rows.
        let Some(lead) = values.iter().position(|v| !v.is_empty()) else {
            logd!("Row {position}: no data cells, skipping");
            continue;
        };
        let info_url = first_href(cells[lead]);
        let values = values[lead..].to_vec();

        let kind = match values[0].as_str() {
            "EXAM" => RowKind::Exam,
            "LAB" => RowKind::MultiLab,
            "LECT" => RowKind::MultiLecture,
            first => match parse_count("crn", first) {
                Ok(crn) if values.len() == TWO_LOCATION_COLUMNS => {
                    logd!("Row {position}: two-location listing {crn}, skipping");
                    RowKind::Skipped { crn }
                }
                Ok(crn) => {
                    courses += 1;
                    RowKind::Course { crn }
                }
                Err(source) => {
                    logw!("Row {position}: unrecognised first cell {first:?}");
                    failures.push(ScrapeError::RowParse { row: position, values: values.clone(), source });
                    continue;
                }
            },
        };
        rows.push(Row { kind, position, info_url, values });
    }

    // A few stray rows are dropped; a page that is mostly unreadable is not a schedule.
    // A lone unreadable row is a notice ("no classes found" and the like).
    if !failures.is_empty() {
        logw!("Dropped {} unclassifiable rows ({} course rows kept)", failures.len(), courses);
        if failures.len() >= courses.max(2) {
            return Err(failures.swap_remove(0));
        }
    }
    Ok(rows)
}
