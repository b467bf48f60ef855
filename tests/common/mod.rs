// tests/common/mod.rs
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use sched_scrape::s;

pub const LABELS: [&str; 13] = [
    "CRN", "Course Number", "Title", "Units", "Actv", "Days", "Time",
    "Bldg/Rm", "Start - End", "Instructor", "Max Enrl", "Act Enrl", "Seats Avail",
];

pub fn header_row() -> String {
    let cells: String = LABELS
        .iter()
        .map(|l| format!(r#"<th class="ddlabel" scope="col"><p>{l}</p></th>"#))
        .collect();
    format!("<tr>{cells}</tr>")
}

pub fn row(cells: &[&str]) -> String {
    let cells: String = cells
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c.is_empty() {
                s!(r#"<td class="dddefault">&nbsp;</td>"#)
            } else if i == 0 && c.parse::<u32>().is_ok() {
                format!(r#"<td class="dddefault"><a href="xhwschedule.P_ViewCrnDetail?subjcode=CSE&amp;crn={c}">{c}</a></td>"#)
            } else {
                format!(r#"<td class="dddefault">{c}</td>"#)
            }
        })
        .collect();
    format!("<tr>{cells}</tr>")
}

pub fn course(crn: u32, code: &str, time: &str, seats: &str) -> String {
    let crn = crn.to_string();
    row(&[
        &crn, code, "Computer Organization", "4", "LECT", "MW", time,
        "COB 110", "19-JAN 07-MAY", "Staff", "120", "100", seats,
    ])
}

pub fn exam(day: &str) -> String {
    row(&["", "", "", "", "EXAM", day, "8:00-11:00am", "COB 105", "13-MAY 13-MAY"])
}

pub fn lab() -> String {
    row(&["", "", "", "", "LAB", "F", "1:30-4:20pm", "SE1 100", "19-JAN 07-MAY"])
}

pub fn page(rows: &[String]) -> String {
    format!(
        r#"<html><body><div class="pagebodydiv"><table class="datadisplaytable" summary="classes">{}</table></div></body></html>"#,
        rows.concat()
    )
}

/// Two subject blocks, an exam, a lab continuation and a closed section.
pub fn sample_page() -> String {
    page(&[
        header_row(),
        course(10234, "CSE-031-01", "10:30-11:45am", "20"),
        lab(),
        exam("R"),
        course(10235, "CSE-031-02", "5:30-7:20pm", "Closed"),
        course(10236, "CSE-005-01", "TBD-TBD", "3"),
        header_row(),
        course(20001, "MATH-021-01", "11:30-2:15pm", "0"),
        exam("T"),
    ])
}

pub fn info_page(text: &str) -> String {
    format!(
        r#"<html><body><div class="pagebodydiv"><table class="dataentrytable"><tr><td>Description:</td><td>{text}</td></tr></table></div></body></html>"#
    )
}

/* ---------------- Fixture server ---------------- */

pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Local HTTP/1.1 server answering every request through `route`.
/// Returns the base URL and the request lines seen so far.
pub fn serve<F>(route: F) -> (String, Arc<Mutex<Vec<String>>>)
where
    F: Fn(&str) -> Reply + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            let head = String::from_utf8_lossy(&buf);
            let line = head.lines().next().unwrap_or("").to_string();
            log.lock().unwrap().push(line.clone());

            let target = line.split(' ').nth(1).unwrap_or("/");
            let reply = route(target);
            let reason = if reply.status == 200 { "OK" } else { "Error" };
            let resp = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reason,
                reply.body.len(),
                reply.body
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });

    (format!("http://{addr}/pls/PROD/"), seen)
}
