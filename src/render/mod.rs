pub mod page;

use std::fmt::Write;
use std::sync::LazyLock;

use askama::Template;
use regex::Regex;

use crate::error::RenderError;
use crate::model::EvaluationResult;

static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").unwrap());

pub const PRESENT: &str = "✓ Present";
pub const MISSING: &str = "✗ Missing";

struct Line<'a> {
    aspect: &'a str,
    status: &'static str,
}

struct PercentLine {
    label: String,
    value: u8,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate<'a> {
    title: &'a str,
    checks: Vec<Line<'a>>,
    percentages: Vec<PercentLine>,
    guidelines: &'a str,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

pub fn render(result: &EvaluationResult, format: OutputFormat) -> Result<String, RenderError> {
    Ok(match format {
        OutputFormat::Html => render_html(result)?,
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result)?,
    })
}

/// Notice shown in place of results when evaluation fails.
pub fn render_error(message: &str, format: OutputFormat) -> Result<String, RenderError> {
    Ok(match format {
        OutputFormat::Html => render_error_html(message)?,
        OutputFormat::Text => format!("Error analyzing the URL: {}\n", message),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("Error analyzing the URL: {}", message)
        }))?,
    })
}

pub fn status_text(status: bool) -> &'static str {
    if status {
        PRESENT
    } else {
        MISSING
    }
}

/// `metaDescription` → `meta Description`.
pub fn space_camel_case(key: &str) -> String {
    UPPER_RE.replace_all(key, " $1").trim_start().to_string()
}

/// Markup for the results container: heading, one line per check,
/// the percentages subsection, then the guidelines.
pub fn render_html(result: &EvaluationResult) -> askama::Result<String> {
    ResultsTemplate {
        title: &result.title,
        checks: result
            .checks
            .iter()
            .map(|c| Line {
                aspect: &c.aspect,
                status: status_text(c.status),
            })
            .collect(),
        percentages: result
            .percentages
            .iter()
            .map(|(k, v)| PercentLine {
                label: space_camel_case(k),
                value: v,
            })
            .collect(),
        guidelines: &result.guidelines,
    }
    .render()
}

pub fn render_error_html(message: &str) -> askama::Result<String> {
    ErrorTemplate { message }.render()
}

/// Terminal rendering with the same ordering as the markup.
pub fn render_text(result: &EvaluationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.title);
    let _ = writeln!(out, "{}", "=".repeat(result.title.chars().count()));
    for c in &result.checks {
        let _ = writeln!(out, "{}: {}", c.aspect, status_text(c.status));
    }

    if let Some(report) = &result.report {
        let _ = writeln!(out, "\nDetails ({}):", report.url);
        for c in &report.checks {
            let _ = writeln!(out, "  {:<24} {:>3}  {}", c.name, c.score, c.message);
            if !c.details.is_empty() {
                let _ = writeln!(out, "  {:<24}      {}", "", c.details);
            }
        }
        let _ = writeln!(
            out,
            "  Overall: {:.1}% ({}/{} points, loaded in {:.2}s)",
            report.overall_score, report.earned_points, report.total_points, report.load_time_secs
        );
    }

    let _ = writeln!(out, "\nPercentages:");
    for (k, v) in result.percentages.iter() {
        let _ = writeln!(out, "{}: {}%", space_camel_case(k), v);
    }
    let _ = writeln!(out, "\n{}", result.guidelines);
    out
}

pub fn render_json(result: &EvaluationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::PlaceholderEvaluator;
    use crate::model::CheckStatus;

    #[test]
    fn camel_case_boundaries() {
        assert_eq!(space_camel_case("metaDescription"), "meta Description");
        assert_eq!(space_camel_case("mobileFriendliness"), "mobile Friendliness");
        assert_eq!(space_camel_case("title"), "title");
        assert_eq!(space_camel_case("h1Tag"), "h1 Tag");
        assert_eq!(space_camel_case("httpsSSL"), "https S S L");
        assert_eq!(space_camel_case("Overall"), "Overall");
    }

    #[test]
    fn placeholder_markup() {
        let html = render_html(&PlaceholderEvaluator::result()).unwrap();
        assert!(html.starts_with("<h2>SEO Evaluation Results</h2>"));
        assert!(html.contains("<p>Title Tag: ✓ Present</p>"));
        assert!(html.contains("<p>Meta Description: ✗ Missing</p>"));
        assert!(html.contains("<p>Image Alt Attributes: ✗ Missing</p>"));
        assert!(html.contains("<h3>Percentages:</h3>"));
        assert!(html.contains("<p>meta Description: 0%</p>"));
        assert!(html.contains("<p>mobile Friendliness: 100%</p>"));
    }

    #[test]
    fn every_check_gets_exactly_its_status() {
        let result = PlaceholderEvaluator::result();
        let html = render_html(&result).unwrap();
        for c in &result.checks {
            let present = format!("<p>{}: {}</p>", c.aspect, PRESENT);
            let missing = format!("<p>{}: {}</p>", c.aspect, MISSING);
            assert_eq!(html.contains(&present), c.status, "{}", c.aspect);
            assert_eq!(html.contains(&missing), !c.status, "{}", c.aspect);
        }
    }

    #[test]
    fn sections_in_order_and_guidelines_last_once() {
        let result = PlaceholderEvaluator::result();
        let html = render_html(&result).unwrap();
        let heading = html.find("<h2>").unwrap();
        let first_check = html.find("Title Tag").unwrap();
        let percentages = html.find("<h3>Percentages:</h3>").unwrap();
        assert!(heading < first_check && first_check < percentages);

        let guidelines = format!("<p>{}</p>", result.guidelines);
        assert_eq!(html.matches(&guidelines).count(), 1);
        assert!(html.trim_end().ends_with(&guidelines));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut result = PlaceholderEvaluator::result();
        result.title = "<script>alert(1)</script>".into();
        result.checks = vec![CheckStatus::new("A & B", true)];
        let html = render_html(&result).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B: ✓ Present"));
    }

    #[test]
    fn empty_result_still_has_skeleton() {
        let result = EvaluationResult {
            title: "Nothing".into(),
            checks: vec![],
            percentages: Default::default(),
            guidelines: "none".into(),
            report: None,
        };
        let html = render_html(&result).unwrap();
        assert!(html.contains("<h2>Nothing</h2>"));
        assert!(html.contains("<h3>Percentages:</h3>"));
        assert!(html.trim_end().ends_with("<p>none</p>"));
    }

    #[test]
    fn text_rendering_mirrors_markup_order() {
        let text = render_text(&PlaceholderEvaluator::result());
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "SEO Evaluation Results");
        assert_eq!(lines[2], "Title Tag: ✓ Present");
        assert_eq!(lines[3], "Meta Description: ✗ Missing");
        assert!(lines.contains(&"header Tags: 100%"));
        assert_eq!(
            *lines.last().unwrap(),
            "Refer to the latest SEO guidelines for best practices."
        );
    }

    #[test]
    fn json_keeps_percentage_order() {
        let json = render(&PlaceholderEvaluator::result(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "SEO Evaluation Results");
        assert_eq!(value["checks"][1]["status"], false);
        assert_eq!(value["percentages"]["metaDescription"], 0);
        let title = json.find("\"title\": 100").unwrap();
        let mobile = json.find("\"mobileFriendliness\"").unwrap();
        assert!(title < mobile);
    }

    #[test]
    fn error_notice_per_format() {
        let text = render_error("timed out", OutputFormat::Text).unwrap();
        assert_eq!(text.trim_end(), "Error analyzing the URL: timed out");

        let json = render_error("timed out", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "Error analyzing the URL: timed out");
    }

    #[test]
    fn error_markup_is_escaped() {
        let html = render_error_html("bad <url>").unwrap();
        assert!(html.contains("Error analyzing the URL: bad &lt;url&gt;"));
    }
}
