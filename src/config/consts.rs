// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://mystudentrecord.ucmerced.edu/pls/PROD/";
pub const SCHEDULE_PATH: &str = "xhwschedule.P_ViewSchedule";
pub const USER_AGENT: &str = concat!("sched_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Query parameters
pub const PARAM_TERM: &str = "validterm";
pub const PARAM_OPEN: &str = "openclasses";
pub const PARAM_SUBJECT: &str = "subjcode";
pub const ALL_SUBJECTS: &str = "ALL";

// Page layout
pub const ROW_SELECTOR: &str = "div.pagebodydiv table.datadisplaytable tr";
pub const HEADER_CELL_SELECTOR: &str = "th.ddlabel";
pub const DATA_CELL_SELECTOR: &str = "td.dddefault";
pub const INFO_CELL_SELECTOR: &str = "div.pagebodydiv table.dataentrytable td";
pub const COLUMNS: usize = 13;
/// Course rows listed with two locations lose one cell.
pub const TWO_LOCATION_COLUMNS: usize = 12;

// Report
pub const TITLE_MAX_CHARS: usize = 175;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Watch
pub const WATCH_INTERVAL_SECS: u64 = 15 * 60;
