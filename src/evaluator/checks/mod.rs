pub mod headings;
pub mod images;
pub mod links;
pub mod meta;
pub mod title;
pub mod transport;

use std::time::Duration;

use scraper::{Html, Selector};
use url::Url;

/// Result of a single check: pass/fail, a 0..=100 score, and human-readable text.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub score: u8,
    pub message: String,
    pub details: String,
}

impl CheckOutcome {
    pub fn pass(score: u8, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            passed: true,
            score,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn fail(score: u8, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            passed: false,
            score,
            message: message.into(),
            details: details.into(),
        }
    }
}

/// Everything the checks look at for one fetched page.
pub struct PageInput<'a> {
    pub url: &'a str,
    pub base: &'a Url,
    pub document: &'a Html,
    pub load_time: Duration,
}

/// Run every check in guideline order, keyed by guideline key.
pub fn run_all(page: &PageInput<'_>) -> Vec<(&'static str, CheckOutcome)> {
    let doc = page.document;
    vec![
        ("title", title::check(doc)),
        ("meta_description", meta::check_description(doc)),
        ("h1_tag", headings::check_h1(doc)),
        ("heading_structure", headings::check_structure(doc)),
        ("images_alt", images::check_alt(doc)),
        ("internal_links", links::check_internal(doc, page.base)),
        ("external_links", links::check_external(doc, page.base)),
        ("https_ssl", transport::check_https(page.url)),
        ("mobile_viewport", meta::check_viewport(doc)),
        ("page_speed", transport::check_speed(page.load_time)),
    ]
}

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

pub(crate) fn element_text(el: scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
