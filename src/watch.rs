// src/watch.rs
use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

use crate::config::options::ScheduleQuery;
use crate::core::Fetcher;
use crate::engine::Schedule;
use crate::error::Result;
use crate::scrape::{collect_schedule, collect_subjects, open_crns};

/// CRNs in `crns` open in any of `schedules` that were not in `prev`.
/// Argument order, no repeats.
pub fn newly_open<'a>(
    prev: &BTreeSet<u32>,
    schedules: impl IntoIterator<Item = &'a Schedule>,
    crns: &[u32],
) -> (BTreeSet<u32>, Vec<u32>) {
    let mut open = BTreeSet::new();
    for schedule in schedules {
        open.extend(open_crns(schedule, crns));
    }
    let mut fresh = Vec::new();
    for crn in crns {
        if open.contains(crn) && !prev.contains(crn) && !fresh.contains(crn) {
            fresh.push(*crn);
        }
    }
    (open, fresh)
}

/// Polls the open-seats listing for a fixed set of CRNs.
pub struct Watcher {
    fetcher: Fetcher,
    query: ScheduleQuery,
    crns: Vec<u32>,
    subjects: Vec<String>,
    open: BTreeSet<u32>,
}

impl Watcher {
    /// `subjects` empty means one all-subjects request per poll.
    pub fn new(fetcher: Fetcher, query: &ScheduleQuery, crns: Vec<u32>, subjects: Vec<String>) -> Self {
        Self { fetcher, query: query.open_only(true), crns, subjects, open: BTreeSet::new() }
    }

    /// CRNs seen open on the last successful poll.
    pub fn open(&self) -> &BTreeSet<u32> {
        &self.open
    }

    /// One poll. Returns CRNs that opened since the previous poll.
    /// A failed poll leaves the previous state untouched.
    pub fn poll_once(&mut self) -> Result<Vec<u32>> {
        let schedules = if self.subjects.is_empty() {
            vec![collect_schedule(&self.fetcher, &self.query)?]
        } else {
            collect_subjects(&self.fetcher, &self.query, &self.subjects)
                .into_iter()
                .map(|(_, result)| result)
                .collect::<Result<Vec<_>>>()?
        };
        let (open, fresh) = newly_open(&self.open, &schedules, &self.crns);
        logd!("Watch: {} of {} CRNs open", open.len(), self.crns.len());
        self.open = open;
        Ok(fresh)
    }

    /// Poll every `interval` until `max_polls` (forever if `None`).
    /// Errors are logged and the loop carries on.
    pub fn run<F: FnMut(&[u32])>(&mut self, interval: Duration, max_polls: Option<u32>, mut on_open: F) {
        let mut polls = 0u32;
        loop {
            match self.poll_once() {
                Ok(fresh) if !fresh.is_empty() => on_open(&fresh),
                Ok(_) => {}
                Err(e) => loge!("Watch poll failed: {e}"),
            }
            polls += 1;
            if max_polls.is_some_and(|max| polls >= max) {
                break;
            }
            thread::sleep(interval);
        }
    }
}
