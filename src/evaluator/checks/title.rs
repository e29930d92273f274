use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{element_text, selector, CheckOutcome};

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));

pub fn check(doc: &Html) -> CheckOutcome {
    let Some(el) = doc.select(&TITLE).next() else {
        return CheckOutcome::fail(0, "No title tag found", "The page has no title");
    };

    let text = element_text(el);
    let length = text.chars().count();

    if (30..=60).contains(&length) {
        CheckOutcome::pass(
            100,
            format!("Optimal title ({} characters)", length),
            format!("\"{}\"", text),
        )
    } else if length > 0 {
        CheckOutcome::fail(
            50,
            format!("Suboptimal title ({} characters)", length),
            format!("\"{}\" - Recommended: 30-60 characters", text),
        )
    } else {
        CheckOutcome::fail(0, "Empty title", "The title has no content")
    }
}
