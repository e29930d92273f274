use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{element_text, selector, CheckOutcome};

static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static ANY_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1, h2, h3, h4, h5, h6"));

pub fn check_h1(doc: &Html) -> CheckOutcome {
    let h1s: Vec<_> = doc.select(&H1).collect();
    match h1s.as_slice() {
        [] => CheckOutcome::fail(
            0,
            "No H1 tag found",
            "The page should have exactly one H1 tag",
        ),
        [only] => CheckOutcome::pass(
            100,
            "Correct H1 tag",
            format!("H1: \"{}\"", element_text(*only)),
        ),
        many => CheckOutcome::fail(
            40,
            format!("Multiple H1 tags ({})", many.len()),
            "Use a single H1 tag per page",
        ),
    }
}

pub fn check_structure(doc: &Html) -> CheckOutcome {
    // (level, count) in order of first appearance
    let mut levels: Vec<(&str, usize)> = Vec::new();
    let mut total = 0usize;
    for el in doc.select(&ANY_HEADING) {
        let name = el.value().name();
        match levels.iter_mut().find(|(level, _)| *level == name) {
            Some((_, count)) => *count += 1,
            None => levels.push((name, 1)),
        }
        total += 1;
    }

    if total < 2 {
        return CheckOutcome::fail(
            20,
            "Insufficient heading structure",
            format!("Only {} headings found", total),
        );
    }

    let structure = levels
        .iter()
        .map(|(level, count)| format!("{}: {}", level, count))
        .collect::<Vec<_>>()
        .join(", ");
    CheckOutcome::pass(
        100,
        "Good heading structure",
        format!("Structure: {}", structure),
    )
}
