// src/scrape.rs
use std::{
    thread, time::{Duration, Instant},
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::consts::{ JITTER_MS, REQUEST_PAUSE_MS, WORKERS },
    config::options::ScheduleQuery,
    core::Fetcher,
    engine::{ self, Course, Schedule },
    error::{ Result, ScrapeError },
    specs,
};

/// Classify and build a page that is already in memory.
pub fn schedule_from_html(html_doc: &str, year: i32) -> Result<Schedule> {
    let rows = specs::parse_doc(html_doc)?;
    engine::build(&rows, year)
}

/// Fetch one results page and build its schedule.
pub fn collect_schedule(fetcher: &Fetcher, query: &ScheduleQuery) -> Result<Schedule> {
    let t = Instant::now();
    let html_doc = fetcher.fetch_schedule(query)?;
    let schedule = schedule_from_html(&html_doc, query.year)?;
    logf!(
        "{} {} {}: {} courses in {:?}",
        query.term, query.year, query.subject_code(), schedule.len(), t.elapsed()
    );
    Ok(schedule)
}

/// Fetch several subjects on a small worker pool.
/// Results come back in the order of `subjects`, one per subject.
pub fn collect_subjects(
    fetcher: &Fetcher,
    query: &ScheduleQuery,
    subjects: &[String],
) -> Vec<(String, Result<Schedule>)> {
    type Done = (usize, Result<Schedule>);

    let subjects_arc = Arc::new(subjects.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Done>();

    let workers = WORKERS.min(subjects.len()).max(1);

    for _ in 0..workers {
        let subjects = Arc::clone(&subjects_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let fetcher = fetcher.clone();
        let query = query.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= subjects.len() {
                    break;
                }
                let result = collect_schedule(&fetcher, &query.with_subject(&subjects[i]));
                if tx.send((i, result)).is_err() {
                    break;
                }
                let jitter = (i as u64 * 17) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut done: Vec<Option<Result<Schedule>>> = (0..subjects.len()).map(|_| None).collect();
    for (i, result) in res_rx {
        if let Err(e) = &result {
            loge!("Subject {}: {e}", subjects[i]);
        }
        done[i] = Some(result);
    }

    subjects
        .iter()
        .cloned()
        .zip(done)
        .map(|(subject, result)| {
            // A worker that died without reporting leaves a hole.
            let result = result.unwrap_or_else(|| {
                Err(ScrapeError::Structural(format!("worker for {subject} exited early")))
            });
            (subject, result)
        })
        .collect()
}

/// `crns` that are listed in `schedule` with at least one open seat, in argument order.
pub fn open_crns(schedule: &Schedule, crns: &[u32]) -> Vec<u32> {
    crns.iter()
        .copied()
        .filter(|crn| schedule.get(*crn).is_some_and(|c| c.seats_open() > 0))
        .collect()
}

/// Description text from the course's detail page.
pub fn course_info(fetcher: &Fetcher, course: &Course) -> Result<String> {
    let url = course.info_url.as_deref().ok_or_else(|| {
        ScrapeError::Structural(format!("course {} has no detail link", course.crn))
    })?;
    let html_doc = fetcher.fetch_info(url)?;
    specs::info::parse_info_page(&html_doc)
}
