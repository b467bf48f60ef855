// src/engine/types.rs
use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime, Weekday};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activity {
    Lecture,
    Lab,
    Discussion,
    Seminar,
    Studio,
    FieldWork,
    Initiative,
    /// Anything the registrar adds later; kept verbatim.
    Other(String),
}

impl Activity {
    pub fn from_code(code: &str) -> Self {
        match code {
            "LECT" => Activity::Lecture,
            "LAB" => Activity::Lab,
            "DISC" => Activity::Discussion,
            "SEM" => Activity::Seminar,
            "STDO" => Activity::Studio,
            "FLDW" => Activity::FieldWork,
            "INI" => Activity::Initiative,
            other => Activity::Other(s!(other)),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Activity::Lecture => "LECT",
            Activity::Lab => "LAB",
            Activity::Discussion => "DISC",
            Activity::Seminar => "SEM",
            Activity::Studio => "STDO",
            Activity::FieldWork => "FLDW",
            Activity::Initiative => "INI",
            Activity::Other(code) => code,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wall-clock start/end. Both midnight means "TBD".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MeetingTime {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl MeetingTime {
    pub fn tbd() -> Self {
        Self::default()
    }

    pub fn is_tbd(&self) -> bool {
        *self == Self::tbd()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Pieces of a "SUBJ-NUM-SECTION" code.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CourseCode {
    pub subject: String,
    pub number: u32,
    pub section: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exam {
    pub day: Weekday,
    pub building: String,
    pub date: NaiveDate,
    pub time: MeetingTime,
}

/// One registrar section, as listed on the results page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub crn: u32,
    pub full_code: String,
    pub subject: String,
    pub number: u32,
    pub section: String,
    pub title: String,
    pub units: u32,
    pub activity: Activity,
    pub days: Vec<Weekday>,
    pub time: MeetingTime,
    pub dates: DateRange,
    pub building_room: String,
    pub instructor: String,
    pub capacity: u32,
    pub enrolled: u32,
    /// Literal seats cell; "Closed" when full.
    pub seats_raw: String,
    pub exam: Option<Exam>,
    /// Position among course rows on the page.
    pub order: usize,
    pub info_url: Option<String>,
}

impl Course {
    /// Open seats; any non-numeric cell counts as none.
    pub fn seats_open(&self) -> i32 {
        self.seats_raw.trim().parse().unwrap_or(0)
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.full_code, self.title)
    }
}

/// Courses from one results page, keyed by CRN, iterated in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    courses: HashMap<u32, Course>,
    order: Vec<u32>,
}

impl Schedule {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { courses: HashMap::with_capacity(n), order: Vec::with_capacity(n) }
    }

    /// Append in page order. Returns the course back if its CRN is taken.
    pub(crate) fn push(&mut self, mut course: Course) -> Result<(), Course> {
        if self.courses.contains_key(&course.crn) {
            return Err(course);
        }
        course.order = self.order.len();
        self.order.push(course.crn);
        self.courses.insert(course.crn, course);
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, crn: u32) -> Option<&mut Course> {
        self.courses.get_mut(&crn)
    }

    pub fn get(&self, crn: u32) -> Option<&Course> {
        self.courses.get(&crn)
    }

    pub fn contains(&self, crn: u32) -> bool {
        self.courses.contains_key(&crn)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Page order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> + '_ {
        self.order.iter().filter_map(|crn| self.courses.get(crn))
    }

    pub fn ordered(&self) -> Vec<&Course> {
        self.iter().collect()
    }

    /// Sections of course number `number`, in page order.
    pub fn filter_number(&self, number: u32) -> Vec<&Course> {
        self.iter().filter(|c| c.number == number).collect()
    }

    pub fn crns(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }
}
