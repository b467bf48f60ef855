// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::config::consts::{BASE_URL, TIMEOUT_SECS, WATCH_INTERVAL_SECS};
use crate::config::options::{ExportFormat, NetOptions, ScheduleQuery};
use crate::core::Fetcher;
use crate::csv::{check_headers, check_row, course_row, listing_headers, to_export_string};
use crate::engine::Schedule;
use crate::scrape::{collect_schedule, collect_subjects, course_info};
use crate::watch::Watcher;

#[derive(Debug, Parser)]
#[command(name = "sched_scrape", version, about = "Registrar class schedule scraper")]
pub struct Cli {
    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short, long, global = true, default_value_t = 2021)]
    pub year: i32,

    /// spring, summer or fall
    #[arg(short, long, global = true, default_value = "fall")]
    pub term: String,

    /// Only sections with open seats
    #[arg(long, global = true)]
    pub open: bool,

    #[arg(long, global = true, default_value = BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// csv or tsv
    #[arg(long, global = true, default_value = "tsv")]
    pub format: ExportFormat,

    /// Emit a header line
    #[arg(long, global = true)]
    pub headers: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List sections, optionally one course number
    Registration {
        #[arg(default_value = "")]
        subject: String,
        number: Option<u32>,
    },
    /// Show which of the given CRNs have open seats
    CheckCrns {
        #[arg(required = true)]
        crns: Vec<u32>,
        /// Limit the search; repeat for several subjects
        #[arg(short, long = "subject")]
        subjects: Vec<String>,
    },
    /// Poll until CRNs open up
    Watch {
        #[arg(required = true)]
        crns: Vec<u32>,
        #[arg(short, long = "subject")]
        subjects: Vec<String>,
        /// Seconds between polls
        #[arg(long, default_value_t = WATCH_INTERVAL_SECS)]
        interval: u64,
        #[arg(long)]
        max_polls: Option<u32>,
    },
    /// Print a section's course description
    Info {
        crn: u32,
        #[arg(short, long, default_value = "")]
        subject: String,
    },
}

impl Cli {
    fn net_options(&self) -> NetOptions {
        NetOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..NetOptions::default()
        }
    }

    fn query(&self, subject: &str) -> Result<ScheduleQuery> {
        Ok(ScheduleQuery::new(self.year, &self.term, subject, self.open)?)
    }

    fn print(&self, headers: Vec<String>, rows: &[Vec<String>]) -> Result<()> {
        let headers = self.headers.then_some(headers);
        let out = to_export_string(headers.as_deref(), rows, self.format.delim());
        io::stdout().write_all(out.as_bytes()).wrap_err("writing to stdout")?;
        Ok(())
    }
}

/// One schedule per subject, or a single all-subjects schedule when `subjects` is empty.
fn collect_many(fetcher: &Fetcher, query: &ScheduleQuery, subjects: &[String]) -> Result<Vec<Schedule>> {
    if subjects.is_empty() {
        return Ok(vec![collect_schedule(fetcher, query)?]);
    }
    collect_subjects(fetcher, query, subjects)
        .into_iter()
        .map(|(subject, result)| result.wrap_err_with(|| format!("subject {subject}")))
        .collect()
}

pub fn run(cli: Cli) -> Result<()> {
    let fetcher = Fetcher::new(&cli.net_options())?;

    match &cli.command {
        Command::Registration { subject, number } => {
            let query = cli.query(subject)?;
            let schedule = collect_schedule(&fetcher, &query)?;
            if schedule.is_empty() {
                bail!("no courses found for {} {} {}", query.term, query.year, query.subject_code());
            }
            let courses = match number {
                Some(n) => schedule.filter_number(*n),
                None => schedule.ordered(),
            };
            if courses.is_empty() {
                bail!("no matches");
            }
            let rows: Vec<_> = courses.into_iter().map(course_row).collect();
            cli.print(listing_headers(), &rows)
        }

        Command::CheckCrns { crns, subjects } => {
            let query = cli.query("")?.open_only(true);
            let schedules = collect_many(&fetcher, &query, subjects)?;
            let rows: Vec<_> = crns
                .iter()
                .filter_map(|crn| schedules.iter().find_map(|s| s.get(*crn)))
                .map(check_row)
                .collect();
            if rows.is_empty() {
                bail!("could not find {crns:?} in schedule");
            }
            cli.print(check_headers(), &rows)
        }

        Command::Watch { crns, subjects, interval, max_polls } => {
            let query = cli.query("")?;
            let mut watcher = Watcher::new(fetcher, &query, crns.clone(), subjects.clone());
            logf!("Watching {} CRNs every {}s", crns.len(), interval);
            watcher.run(Duration::from_secs(*interval), *max_polls, |fresh| {
                for crn in fresh {
                    println!("{crn} is open");
                }
            });
            Ok(())
        }

        Command::Info { crn, subject } => {
            let query = cli.query(subject)?;
            let schedule = collect_schedule(&fetcher, &query)?;
            let course = schedule
                .get(*crn)
                .ok_or_else(|| eyre!("could not find {crn} in schedule"))?;
            let text = course_info(&fetcher, course)?;
            println!("{}\n{}", crate::core::sanitize::clean_title(&course.name()), text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([
            "sched_scrape", "-vv", "--term", "spring", "--year", "2022",
            "check-crns", "10234", "10235", "-s", "CSE", "-s", "MATH",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.year, 2022);
        match cli.command {
            Command::CheckCrns { crns, subjects } => {
                assert_eq!(crns, vec![10234, 10235]);
                assert_eq!(subjects, vec![s!("CSE"), s!("MATH")]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["sched_scrape", "registration", "cse", "31"]).unwrap();
        assert_eq!(cli.format, ExportFormat::Tsv);
        assert_eq!(cli.timeout, TIMEOUT_SECS);
        let q = cli.query("cse").unwrap();
        assert_eq!(q.valid_term(), "202130");
        assert_eq!(q.subject_code(), "CSE");
        assert!(matches!(cli.command, Command::Registration { number: Some(31), .. }));
    }

    #[test]
    fn bad_term_fails_before_fetch() {
        let cli = Cli::try_parse_from(["sched_scrape", "--term", "winter", "info", "1"]).unwrap();
        assert!(cli.query("").is_err());
    }

    #[test]
    fn watch_needs_crns() {
        assert!(Cli::try_parse_from(["sched_scrape", "watch"]).is_err());
    }
}
