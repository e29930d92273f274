use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use super::{selector, CheckOutcome};

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Host and explicit port, the parts that decide "same site".
fn authority(url: &Url) -> Option<(&str, Option<u16>)> {
    url.host_str().map(|h| (h, url.port()))
}

fn hrefs(doc: &Html) -> impl Iterator<Item = &str> {
    doc.select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|h| !h.is_empty())
}

pub fn count_internal(doc: &Html, base: &Url) -> usize {
    let site = authority(base);
    hrefs(doc)
        .filter(|href| *href != "#")
        .filter(|href| {
            base.join(href)
                .ok()
                .is_some_and(|full| authority(&full) == site)
        })
        .count()
}

pub fn count_external(doc: &Html, base: &Url) -> usize {
    let site = authority(base);
    hrefs(doc)
        .filter(|href| href.starts_with("http"))
        .filter(|href| match Url::parse(href) {
            Ok(u) => authority(&u) != site,
            Err(_) => true,
        })
        .count()
}

pub fn check_internal(doc: &Html, base: &Url) -> CheckOutcome {
    let count = count_internal(doc, base);
    let found = format!("{} internal links found", count);
    if count >= 5 {
        CheckOutcome::pass(100, format!("Good internal linking ({})", count), found)
    } else if count >= 2 {
        CheckOutcome::pass(70, format!("Acceptable internal linking ({})", count), found)
    } else {
        CheckOutcome::fail(
            20,
            format!("Few internal links ({})", count),
            format!("Only {} internal links. Recommended: 5 or more", count),
        )
    }
}

pub fn check_external(doc: &Html, base: &Url) -> CheckOutcome {
    let count = count_external(doc, base);
    let score = (count * 20).min(100) as u8;
    CheckOutcome {
        passed: count > 0,
        score,
        message: format!("External links: {}", count),
        details: format!("{} links to external sites", count),
    }
}
