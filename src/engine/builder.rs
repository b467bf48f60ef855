// src/engine/builder.rs
use crate::config::consts::COLUMNS;
use crate::engine::fields::*;
use crate::engine::types::{Activity, Course, Exam, Schedule};
use crate::error::{FieldError, Result, ScrapeError};
use crate::specs::schedule::{Row, RowKind};

// Course row columns
const CRN: usize = 0;
const CODE: usize = 1;
const TITLE: usize = 2;
const UNITS: usize = 3;
const ACTIVITY: usize = 4;
const DAYS: usize = 5;
const TIME: usize = 6;
const ROOM: usize = 7;
const DATES: usize = 8;
const INSTRUCTOR: usize = 9;
const CAPACITY: usize = 10;
const ENROLLED: usize = 11;
const SEATS: usize = 12;

// Exam row columns (after the leading "EXAM")
const EXAM_DAY: usize = 1;
const EXAM_TIME: usize = 2;
const EXAM_ROOM: usize = 3;
const EXAM_DATE: usize = 4;
const EXAM_COLUMNS: usize = 5;

/// Who an exam row below would belong to.
#[derive(Clone, Copy)]
enum Owner {
    Nobody,
    Course(u32),
    /// A listing that was not built; its exam goes with it.
    Skipped(u32),
}

/// Turn classified rows into a [`Schedule`].
///
/// Rows are consumed in page order. An exam row belongs to the most recent
/// course row before it; a header row ends that ownership. Exams of skipped
/// listings are dropped. Any course or exam that fails to parse aborts the
/// whole build.
pub fn build(rows: &[Row], year: i32) -> Result<Schedule> {
    let mut schedule = Schedule::with_capacity(rows.len());
    let mut owner = Owner::Nobody;

    for row in rows {
        let row_err = |source: FieldError| ScrapeError::RowParse {
            row: row.position,
            values: row.values.clone(),
            source,
        };

        match row.kind {
            RowKind::Header => owner = Owner::Nobody,
            RowKind::Skipped { crn } => owner = Owner::Skipped(crn),
            RowKind::Course { crn } => {
                let mut course = parse_course(&row.values, year).map_err(row_err)?;
                // crn cell and classified crn are the same text
                debug_assert_eq!(course.crn, crn);
                course.info_url = row.info_url.clone();
                schedule
                    .push(course)
                    .map_err(|dup| row_err(FieldError::DuplicateCrn(dup.crn)))?;
                owner = Owner::Course(crn);
            }
            RowKind::Exam => {
                let exam = parse_exam(&row.values, year).map_err(row_err)?;
                let crn = match owner {
                    Owner::Course(crn) => crn,
                    Owner::Skipped(crn) => {
                        logw!("Row {}: exam of skipped listing {crn}, dropping", row.position);
                        continue;
                    }
                    Owner::Nobody => return Err(ScrapeError::OrphanExam { row: row.position }),
                };
                let course = schedule
                    .get_mut(crn)
                    .ok_or(ScrapeError::OrphanExam { row: row.position })?;
                if course.exam.is_some() {
                    logw!("Course {} already has an exam; keeping the later one", course.crn);
                }
                course.exam = Some(exam);
            }
            // Secondary meeting times are not merged into the owning course.
            RowKind::MultiLecture | RowKind::MultiLab => {}
        }
    }

    logd!("Built schedule: {} courses from {} rows", schedule.len(), rows.len());
    Ok(schedule)
}

fn parse_course(cells: &[String], year: i32) -> std::result::Result<Course, FieldError> {
    if cells.len() != COLUMNS {
        return Err(FieldError::CellCount { expected: COLUMNS, found: cells.len() });
    }
    let code = parse_course_code(&cells[CODE])?;

    Ok(Course {
        crn: parse_count("crn", &cells[CRN])?,
        full_code: cells[CODE].clone(),
        subject: code.subject,
        number: code.number,
        section: code.section,
        title: cells[TITLE].clone(),
        units: parse_count("units", &cells[UNITS])?,
        activity: Activity::from_code(&cells[ACTIVITY]),
        days: parse_weekdays(&cells[DAYS]),
        time: parse_time_range(&cells[TIME])?,
        dates: parse_date_range(&cells[DATES], year)?,
        building_room: cells[ROOM].clone(),
        instructor: cells[INSTRUCTOR].clone(),
        capacity: parse_count("max enrollment", &cells[CAPACITY])?,
        enrolled: parse_count("active enrollment", &cells[ENROLLED])?,
        seats_raw: cells[SEATS].clone(),
        exam: None,
        order: 0,
        info_url: None,
    })
}

fn parse_exam(cells: &[String], year: i32) -> std::result::Result<Exam, FieldError> {
    if cells.len() < EXAM_COLUMNS {
        return Err(FieldError::CellCount { expected: EXAM_COLUMNS, found: cells.len() });
    }
    let day = parse_weekdays(&cells[EXAM_DAY])
        .first()
        .copied()
        .ok_or_else(|| FieldError::Weekday(cells[EXAM_DAY].clone()))?;

    Ok(Exam {
        day,
        building: cells[EXAM_ROOM].clone(),
        date: parse_date_range(&cells[EXAM_DATE], year)?.start,
        time: parse_time_range(&cells[EXAM_TIME])?,
    })
}
