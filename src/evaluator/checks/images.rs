use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{selector, CheckOutcome};

static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

pub fn check_alt(doc: &Html) -> CheckOutcome {
    let mut total = 0usize;
    let mut with_alt = 0usize;
    for img in doc.select(&IMG) {
        total += 1;
        if img.value().attr("alt").is_some_and(|a| !a.is_empty()) {
            with_alt += 1;
        }
    }

    if total == 0 {
        return CheckOutcome::pass(100, "No images on the page", "N/A");
    }

    let percentage = with_alt as f64 / total as f64 * 100.0;
    let details = format!("{}/{} images with alternative text", with_alt, total);

    if with_alt == total {
        CheckOutcome::pass(100, format!("All images have alt ({})", total), details)
    } else if percentage >= 80.0 {
        CheckOutcome::pass(
            80,
            format!("Most images have alt ({:.1}%)", percentage),
            details,
        )
    } else {
        CheckOutcome::fail(
            percentage as u8,
            format!("Few images with alt ({:.1}%)", percentage),
            details,
        )
    }
}
