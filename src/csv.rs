// src/csv.rs
use std::io::{self, Write};

use chrono::{NaiveTime, Weekday};

use crate::core::sanitize::clean_title;
use crate::engine::{Course, MeetingTime};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Cell formatting ---------------- */

fn clock(t: NaiveTime) -> String {
    t.format("%-I:%M%P").to_string()
}

/// "9:00am-10:15am", or "TBD".
pub fn format_time(time: &MeetingTime) -> String {
    if time.is_tbd() {
        return s!("TBD");
    }
    format!("{}-{}", clock(time.start), clock(time.end))
}

/// "Mon,Wed"; empty when no days are known.
pub fn format_days(days: &[Weekday]) -> String {
    days.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(",")
}

/* ---------------- Course rows ---------------- */

pub fn listing_headers() -> Vec<String> {
    strings!["crn", "name", "seats open", "activity", "time", "days"]
}

pub fn check_headers() -> Vec<String> {
    strings!["crn", "open", "type", "time", "days"]
}

/// Full listing row.
pub fn course_row(c: &Course) -> Vec<String> {
    vec![
        c.crn.to_string(),
        clean_title(&c.name()),
        c.seats_open().to_string(),
        c.activity.to_string(),
        format_time(&c.time),
        format_days(&c.days),
    ]
}

/// Compact row for CRN checks.
pub fn check_row(c: &Course) -> Vec<String> {
    vec![
        c.crn.to_string(),
        c.seats_open().to_string(),
        c.activity.to_string(),
        format_time(&c.time),
        format_days(&c.days),
    ]
}

/// Create a full export string from prepared rows.
/// - `headers`: emitted first when present
/// - `sep`: character to be used as field/cell separator
pub fn to_export_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::tests::course;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn times_are_twelve_hour() {
        let t = MeetingTime { start: at(9, 0), end: at(10, 15) };
        assert_eq!(format_time(&t), "9:00am-10:15am");
        let t = MeetingTime { start: at(13, 30), end: at(16, 20) };
        assert_eq!(format_time(&t), "1:30pm-4:20pm");
        assert_eq!(format_time(&MeetingTime::tbd()), "TBD");
    }

    #[test]
    fn days_are_short_names() {
        assert_eq!(format_days(&[Weekday::Mon, Weekday::Wed]), "Mon,Wed");
        assert_eq!(format_days(&[]), "");
    }

    #[test]
    fn course_row_columns() {
        let mut c = course(10234, 31, "7");
        c.title = s!("Computer Organization Must Also Register for a lab");
        let row = course_row(&c);
        assert_eq!(row.len(), listing_headers().len());
        assert_eq!(row[0], "10234");
        assert_eq!(row[1], "CSE-031-01 Computer Organization");
        assert_eq!(row[2], "7");
        assert_eq!(row[3], "LECT");
        assert_eq!(row[4], "TBD");
        assert_eq!(row[5], "Mon,Wed");

        let check = check_row(&course(1, 5, "Closed"));
        assert_eq!(check.len(), check_headers().len());
        assert_eq!(check[1], "0");
    }

    #[test]
    fn export_quotes_separators() {
        let rows = vec![strings!["1", "A, B", "say \"hi\""]];
        let out = to_export_string(None, &rows, ',');
        assert_eq!(out, "1,\"A, B\",\"say \"\"hi\"\"\"\n");

        let tsv = to_export_string(Some(&check_headers()), &[strings!["1", "A, B"]], '\t');
        assert_eq!(tsv, "crn\topen\ttype\ttime\tdays\n1\tA, B\n");
    }
}
