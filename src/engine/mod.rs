// src/engine/mod.rs
pub mod builder;
pub mod fields;
pub mod types;

pub use builder::build;
pub use types::{Activity, Course, CourseCode, DateRange, Exam, MeetingTime, Schedule};
