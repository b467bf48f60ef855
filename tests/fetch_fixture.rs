// tests/fetch_fixture.rs
mod common;

use std::time::Duration;

use sched_scrape::config::options::{NetOptions, ScheduleQuery};
use sched_scrape::{collect_schedule, collect_subjects, course_info, FetchError, Fetcher, ScrapeError};

use common::*;

fn route(target: &str) -> Reply {
    if target.contains("P_ViewCrnDetail") {
        return Reply { status: 200, body: info_page("Binary representation and assembly.") };
    }
    if target.contains("subjcode=NOPE") {
        return Reply { status: 404, body: "not here".into() };
    }
    Reply { status: 200, body: sample_page() }
}

fn fetcher(base: &str) -> Fetcher {
    let opts = NetOptions { base_url: base.into(), timeout: Duration::from_secs(5), ..NetOptions::default() };
    Fetcher::new(&opts).unwrap()
}

fn query(subject: &str) -> ScheduleQuery {
    ScheduleQuery::new(2021, "fall", subject, true).unwrap()
}

#[test]
fn sends_query_and_returns_body() {
    let (base, seen) = serve(route);
    let body = fetcher(&base).fetch_schedule(&query("cse")).unwrap();
    assert!(body.contains("datadisplaytable"));

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0],
        "GET /pls/PROD/xhwschedule.P_ViewSchedule?validterm=202130&openclasses=Y&subjcode=CSE HTTP/1.1"
    );
}

#[test]
fn non_success_status_is_an_error() {
    let (base, _) = serve(route);
    let err = fetcher(&base).fetch_schedule(&query("nope")).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[test]
fn connection_refused_is_transport() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let err = fetcher(&format!("http://127.0.0.1:{port}/")).fetch_schedule(&query("")).unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

#[test]
fn end_to_end_collect_and_info() {
    let (base, seen) = serve(route);
    let f = fetcher(&base);
    let sched = collect_schedule(&f, &query("")).unwrap();
    assert_eq!(sched.len(), 4);

    let text = course_info(&f, sched.get(10234).unwrap()).unwrap();
    assert_eq!(text, "Binary representation and assembly.");

    let seen = seen.lock().unwrap();
    assert!(seen[0].contains("subjcode=ALL"));
    assert!(seen[1].starts_with("GET /pls/PROD/xhwschedule.P_ViewCrnDetail?subjcode=CSE&crn=10234 "));
}

#[test]
fn subjects_keep_input_order() {
    let (base, _) = serve(route);
    let subjects = vec!["CSE".to_string(), "NOPE".to_string(), "MATH".to_string()];
    let results = collect_subjects(&fetcher(&base), &query(""), &subjects);

    let names: Vec<&str> = results.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(names, vec!["CSE", "NOPE", "MATH"]);
    assert_eq!(results[0].1.as_ref().unwrap().len(), 4);
    assert!(matches!(
        results[1].1,
        Err(ScrapeError::Fetch(FetchError::Status { status: 404, .. }))
    ));
    assert!(results[2].1.is_ok());
}
