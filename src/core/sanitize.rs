// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::TITLE_MAX_CHARS;

const NBSP: char = '\u{00A0}';

/// Trim the whitespace and `&nbsp;` padding the registrar puts around cell text.
pub fn trim_cell(s: &str) -> String {
    s!(s.trim_matches(|c: char| c == NBSP || c == '\n' || c == ' ' || c == '\t' || c == '\r'))
}

/// Header labels come split over lines ("Max\nEnrl"); drop all whitespace.
pub fn squash_label(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// "JAN" / "jan" → "Jan"
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => s!(),
    }
}

static MUST_ALSO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Must Also.*$").expect("static pattern")
});

/// Strip the registrar's enrollment annotations from a course title for display.
pub fn clean_title(title: &str) -> String {
    let title = MUST_ALSO.replace(title, "");
    let title = title.replace("Class is fully online", ": Class is fully online");
    let title = title.trim_end();
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => s!(&title[..cut]),
        None => s!(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_nbsp_padding() {
        assert_eq!(trim_cell("\u{a0}"), "");
        assert_eq!(trim_cell("\n\t 10234 \u{a0}"), "10234");
        assert_eq!(trim_cell("COB 110"), "COB 110");
    }

    #[test]
    fn squashes_labels() {
        assert_eq!(squash_label("Max\n Enrl"), "MaxEnrl");
        assert_eq!(squash_label("Seats Available"), "SeatsAvailable");
    }

    #[test]
    fn title_cases_months() {
        assert_eq!(title_case("JAN"), "Jan");
        assert_eq!(title_case("may"), "May");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn cleans_titles() {
        assert_eq!(
            clean_title("Intro to Computing Must Also Register for a Lab"),
            "Intro to Computing"
        );
        assert_eq!(
            clean_title("Calculus IClass is fully online"),
            "Calculus I: Class is fully online"
        );
        let long = "x".repeat(300);
        assert_eq!(clean_title(&long).chars().count(), TITLE_MAX_CHARS);
    }
}
