// src/engine/fields.rs
//! Cell parsers. Pure and total: every function returns a value or a
//! [`FieldError`], none of them panic on registrar text.

use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};

use crate::core::sanitize::title_case;
use crate::engine::types::{CourseCode, DateRange, MeetingTime};
use crate::error::FieldError;

/// Non-negative integer cell (CRN, units, capacity, enrollment, course number).
/// Digits only: a leading `+` is rejected.
pub fn parse_count(field: &'static str, s: &str) -> Result<u32, FieldError> {
    let value = s.trim();
    if value.starts_with('+') {
        return Err(FieldError::Signed { field, value: s!(value) });
    }
    value.parse().map_err(|source| FieldError::Number { field, value: s!(value), source })
}

fn weekday_of(letter: char) -> Option<Weekday> {
    match letter {
        'M' => Some(Weekday::Mon),
        'T' => Some(Weekday::Tue),
        'W' => Some(Weekday::Wed),
        'R' => Some(Weekday::Thu),
        'F' => Some(Weekday::Fri),
        _ => None,
    }
}

/// "MWF" → [Mon, Wed, Fri], in letter order. Unknown letters are dropped.
pub fn parse_weekdays(s: &str) -> Vec<Weekday> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("TBD") {
        return Vec::new();
    }
    let mut days = Vec::with_capacity(s.len());
    for ch in s.chars() {
        match weekday_of(ch) {
            Some(day) if !days.contains(&day) => days.push(day),
            Some(_) => {}
            None => logd!("Dropping weekday letter {:?} in {:?}", ch, s),
        }
    }
    days
}

/// "H:MM" with no am/pm marker.
fn parse_bare_clock(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.trim().split_once(':')?;
    let h: u32 = h.parse().ok()?;
    if m.len() != 2 {
        return None;
    }
    let m: u32 = m.parse().ok()?;
    ((1..=12).contains(&h) && m < 60).then_some((h, m))
}

/// "5:30-7:20pm" → 17:30..19:20.
///
/// Only the end carries am/pm. The start is read as written and moved to the
/// afternoon when the end is at or after noon and at least twelve hours later.
/// `TBD-TBD` is a valid range with both ends at midnight.
pub fn parse_time_range(s: &str) -> Result<MeetingTime, FieldError> {
    let s = s.trim();
    if s == "TBD-TBD" {
        return Ok(MeetingTime::tbd());
    }
    let bad = || FieldError::TimeRange(s!(s));

    let (start, end) = s.split_once('-').ok_or_else(bad)?;
    let (mut hour, minute) = parse_bare_clock(start).ok_or_else(bad)?;
    let end = NaiveTime::parse_from_str(&end.trim().to_ascii_lowercase(), "%I:%M%p")
        .map_err(|_| bad())?;

    if end.hour() >= 12 && end.hour() as i64 - hour as i64 >= 12 {
        hour += 12;
    }
    let start = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(bad)?;
    Ok(MeetingTime { start, end })
}

fn parse_day_month(token: &str, year: i32) -> Option<NaiveDate> {
    let (day, month) = token.split_once('-')?;
    let text = format!("{}-{}-{}", day, title_case(month), year);
    NaiveDate::parse_from_str(&text, "%d-%b-%Y").ok()
}

/// "19-JAN 07-MAY" in `year` → 2021-01-19..2021-05-07.
pub fn parse_date_range(s: &str, year: i32) -> Result<DateRange, FieldError> {
    let s = s.trim();
    let bad = || FieldError::DateRange(s!(s));

    let mut tokens = s.split(' ');
    let (Some(first), Some(last), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(bad());
    };
    Ok(DateRange {
        start: parse_day_month(first, year).ok_or_else(bad)?,
        end: parse_day_month(last, year).ok_or_else(bad)?,
    })
}

/// "BIO-001L-02" → (BIO, 1, "02"). A letter suffix on the number is discarded.
///
/// A code without a `-` leaves subject and section empty and number 0.
/// An empty subject before the `-` or a non-numeric number token is an error.
pub fn parse_course_code(code: &str) -> Result<CourseCode, FieldError> {
    let code = code.trim();
    let Some((subject, rest)) = code.split_once('-') else {
        logw!("Course code {:?} has no number, keeping it unsplit", code);
        return Ok(CourseCode::default());
    };
    if subject.is_empty() {
        return Err(FieldError::CourseCode(s!(code)));
    }
    let (number, section) = rest.split_once('-').unwrap_or((rest, ""));
    let number = number.trim_end_matches(|c: char| !c.is_ascii_digit());

    Ok(CourseCode {
        subject: s!(subject),
        number: parse_count("course number", number)?,
        section: s!(section),
    })
}
