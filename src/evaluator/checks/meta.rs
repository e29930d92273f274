use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{selector, CheckOutcome};

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="description"]"#));
static VIEWPORT: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="viewport"]"#));

/// First matching meta tag's `content`, if present and non-empty.
fn meta_content<'a>(doc: &'a Html, sel: &Selector) -> Option<&'a str> {
    doc.select(sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .filter(|c| !c.is_empty())
}

pub fn check_description(doc: &Html) -> CheckOutcome {
    let Some(content) = meta_content(doc, &DESCRIPTION) else {
        return CheckOutcome::fail(
            0,
            "No meta description found",
            "The page has no meta description",
        );
    };

    let text = content.trim();
    let length = text.chars().count();

    if (150..=160).contains(&length) {
        CheckOutcome::pass(
            100,
            format!("Optimal meta description ({} characters)", length),
            format!("\"{}\"", text),
        )
    } else if (120..=180).contains(&length) {
        CheckOutcome::pass(
            80,
            format!("Acceptable meta description ({} characters)", length),
            format!("\"{}\"", text),
        )
    } else {
        CheckOutcome::fail(
            30,
            format!("Suboptimal meta description ({} characters)", length),
            format!("\"{}\" - Recommended: 150-160 characters", text),
        )
    }
}

pub fn check_viewport(doc: &Html) -> CheckOutcome {
    match meta_content(doc, &VIEWPORT) {
        Some(content) => CheckOutcome::pass(
            100,
            "Viewport configured",
            format!("content=\"{}\"", content),
        ),
        None => CheckOutcome::fail(
            0,
            "Viewport not configured",
            "Missing viewport meta tag for mobile optimization",
        ),
    }
}
