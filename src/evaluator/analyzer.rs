use std::time::Duration;

use scraper::Html;
use tracing::{info, warn};
use url::Url;

use super::checks::{self, CheckOutcome, PageInput};
use super::guidelines::{self, Guideline};
use super::{Evaluator, DEFAULT_GUIDELINES, RESULTS_TITLE};
use crate::error::EvalError;
use crate::fetch;
use crate::model::{AnalysisReport, CheckReport, CheckStatus, EvaluationResult, Percentages};
use crate::settings::Settings;

pub const OVERALL_CATEGORY: &str = "overallScore";

/// Evaluates a live page: fetch, parse, run the weighted checks.
pub struct SeoAnalyzer {
    client: reqwest::Client,
}

impl SeoAnalyzer {
    pub fn new(settings: &Settings) -> Result<Self, EvalError> {
        Ok(Self {
            client: fetch::build_client(settings)?,
        })
    }
}

impl Evaluator for SeoAnalyzer {
    async fn evaluate(&self, url: &str) -> Result<EvaluationResult, EvalError> {
        let base = parse_target(url)?;
        let page = fetch::fetch_page(&self.client, base.as_str()).await?;
        if page.status >= 400 {
            warn!("{} answered with status {}, analyzing anyway", url, page.status);
        }

        let result = analyze_document(url, &base, &page.body, page.load_time);
        if let Some(report) = &result.report {
            info!(
                "Evaluated {}: {}/{} points ({:.1}%)",
                url, report.earned_points, report.total_points, report.overall_score
            );
        }
        Ok(result)
    }
}

/// Parse a submitted URL, accepting only http(s).
pub fn parse_target(url: &str) -> Result<Url, EvalError> {
    let parsed = Url::parse(url).map_err(|source| EvalError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(EvalError::UnsupportedScheme(other.to_string())),
    }
}

/// Run every check over an already-fetched body and build the result.
pub fn analyze_document(url: &str, base: &Url, body: &str, load_time: Duration) -> EvaluationResult {
    let document = Html::parse_document(body);
    let outcomes = checks::run_all(&PageInput {
        url,
        base,
        document: &document,
        load_time,
    });

    let scored: Vec<(&Guideline, CheckOutcome)> = outcomes
        .into_iter()
        .filter_map(|(key, outcome)| guidelines::lookup(key).map(|g| (g, outcome)))
        .collect();

    let report = build_report(url, load_time, &scored);
    to_result(&scored, report)
}

fn build_report(url: &str, load_time: Duration, scored: &[(&Guideline, CheckOutcome)]) -> AnalysisReport {
    let total_points: u32 = scored.iter().map(|(g, _)| g.weight).sum();
    let earned_points: u32 = scored
        .iter()
        .filter(|(_, o)| o.passed)
        .map(|(g, _)| g.weight)
        .sum();
    let overall_score = overall_score(earned_points, total_points);

    AnalysisReport {
        url: url.to_string(),
        load_time_secs: load_time.as_secs_f64(),
        checks: scored
            .iter()
            .map(|(g, o)| CheckReport {
                key: g.key.to_string(),
                name: g.name.to_string(),
                passed: o.passed,
                score: o.score,
                message: o.message.clone(),
                details: o.details.clone(),
            })
            .collect(),
        earned_points,
        total_points,
        overall_score,
    }
}

/// Weighted pass ratio as a percentage, one decimal.
pub fn overall_score(earned: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = earned as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

fn to_result(scored: &[(&Guideline, CheckOutcome)], report: AnalysisReport) -> EvaluationResult {
    let checks = scored
        .iter()
        .map(|(g, o)| CheckStatus::new(g.name, o.passed))
        .collect();

    let mut percentages: Percentages = scored
        .iter()
        .map(|(g, o)| (g.category, u32::from(o.score)))
        .collect();
    percentages.insert(OVERALL_CATEGORY, report.overall_score.round() as u32);

    let failing: Vec<&str> = scored
        .iter()
        .filter(|(_, o)| !o.passed)
        .map(|(g, _)| g.guide)
        .collect();
    let guidelines = if failing.is_empty() {
        DEFAULT_GUIDELINES.to_string()
    } else {
        failing.join(" ")
    };

    EvaluationResult {
        title: RESULTS_TITLE.to_string(),
        checks,
        percentages,
        guidelines,
        report: Some(report),
    }
}
