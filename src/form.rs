use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{chain_message, FormError};
use crate::evaluator::Evaluator;
use crate::render::{self, page::URL_INPUT_ID, OutputFormat};

pub const EMPTY_URL_NOTICE: &str = "Please enter a URL to evaluate.";

/// Field values of one form submission, keyed by element id.
#[derive(Debug, Default, Clone)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
}

impl FormSubmission {
    pub fn with_url(url: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(URL_INPUT_ID.to_string(), url.into());
        Self { fields }
    }

    pub fn field(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }

    /// The trimmed URL field; `None` when absent or blank.
    pub fn url(&self) -> Option<&str> {
        self.field(URL_INPUT_ID)
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

/// Blocking, user-facing notice (the page's alert box).
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Element whose whole content is replaced by each render.
pub trait ResultContainer {
    fn replace_content(&mut self, markup: String);
}

/// In-memory result container.
#[derive(Debug, Default)]
pub struct MarkupContainer {
    content: String,
}

impl MarkupContainer {
    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl ResultContainer for MarkupContainer {
    fn replace_content(&mut self, markup: String) {
        self.content = markup;
    }
}

/// Notices written to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Wires a submission to an evaluator and the evaluator's result to the
/// result container.
pub struct FormController<E, N, C> {
    evaluator: E,
    notifier: N,
    container: C,
    format: OutputFormat,
}

impl<E: Evaluator, N: Notifier, C: ResultContainer> FormController<E, N, C> {
    pub fn new(evaluator: E, notifier: N, container: C) -> Self {
        Self {
            evaluator,
            notifier,
            container,
            format: OutputFormat::Html,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub async fn submit(&mut self, submission: &FormSubmission) -> Result<(), FormError> {
        let Some(url) = submission.url() else {
            warn!("Submission without URL rejected");
            self.notifier.alert(EMPTY_URL_NOTICE);
            return Err(FormError::EmptyUrl);
        };

        info!("Evaluating {}", url);
        match self.evaluator.evaluate(url).await {
            Ok(result) => {
                let markup = render::render(&result, self.format)?;
                self.container.replace_content(markup);
                Ok(())
            }
            Err(e) => {
                let reason = chain_message(&e);
                warn!("Evaluation of {} failed: {}", url, reason);
                let markup = render::render_error(&reason, self.format)?;
                self.container.replace_content(markup);
                Err(e.into())
            }
        }
    }

    #[cfg(test)]
    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::EvalError;
    use crate::evaluator::PlaceholderEvaluator;
    use crate::model::EvaluationResult;

    #[derive(Default)]
    struct RecordingNotifier(Vec<String>);

    impl Notifier for RecordingNotifier {
        fn alert(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[derive(Default)]
    struct CountingContainer {
        writes: usize,
        last: String,
    }

    impl ResultContainer for CountingContainer {
        fn replace_content(&mut self, markup: String) {
            self.writes += 1;
            self.last = markup;
        }
    }

    /// Placeholder that also counts calls and records the URL it saw.
    #[derive(Default)]
    struct SpyEvaluator {
        calls: Cell<usize>,
        seen: std::cell::RefCell<Option<String>>,
    }

    impl Evaluator for SpyEvaluator {
        async fn evaluate(&self, url: &str) -> Result<EvaluationResult, EvalError> {
            self.calls.set(self.calls.get() + 1);
            *self.seen.borrow_mut() = Some(url.to_string());
            Ok(PlaceholderEvaluator::result())
        }
    }

    struct FailingEvaluator;

    impl Evaluator for FailingEvaluator {
        async fn evaluate(&self, _url: &str) -> Result<EvaluationResult, EvalError> {
            Err(EvalError::UnsupportedScheme("gopher".into()))
        }
    }

    fn controller() -> FormController<SpyEvaluator, RecordingNotifier, CountingContainer> {
        FormController::new(
            SpyEvaluator::default(),
            RecordingNotifier::default(),
            CountingContainer::default(),
        )
    }

    #[tokio::test]
    async fn empty_url_alerts_once_and_renders_nothing() {
        for raw in ["", "   "] {
            let mut c = controller();
            let err = c.submit(&FormSubmission::with_url(raw)).await.unwrap_err();
            assert!(matches!(err, FormError::EmptyUrl));
            assert_eq!(c.notifier.0, [EMPTY_URL_NOTICE]);
            assert_eq!(c.evaluator.calls.get(), 0);
            assert_eq!(c.container.writes, 0);
        }
    }

    #[tokio::test]
    async fn missing_field_counts_as_empty() {
        let mut c = controller();
        assert!(c.submit(&FormSubmission::default()).await.is_err());
        assert_eq!(c.notifier.0.len(), 1);
        assert_eq!(c.container.writes, 0);
    }

    #[tokio::test]
    async fn url_flows_to_evaluator_and_result_to_container() {
        let mut c = controller();
        c.submit(&FormSubmission::with_url("  https://example.com  "))
            .await
            .unwrap();

        assert!(c.notifier.0.is_empty());
        assert_eq!(c.evaluator.calls.get(), 1);
        assert_eq!(c.evaluator.seen.borrow().as_deref(), Some("https://example.com"));
        assert_eq!(c.container.writes, 1);
        assert!(c.container.last.starts_with("<h2>SEO Evaluation Results</h2>"));
    }

    #[tokio::test]
    async fn each_submission_fully_replaces_content() {
        let mut c = FormController::new(
            PlaceholderEvaluator,
            RecordingNotifier::default(),
            MarkupContainer::default(),
        );
        c.submit(&FormSubmission::with_url("https://a.example"))
            .await
            .unwrap();
        let first = c.container().content().to_string();
        c.submit(&FormSubmission::with_url("https://b.example"))
            .await
            .unwrap();
        assert_eq!(c.container().content(), first);
        assert_eq!(c.container().content().matches("<h2>").count(), 1);
    }

    #[tokio::test]
    async fn format_selects_renderer() {
        let mut c = FormController::new(
            PlaceholderEvaluator,
            RecordingNotifier::default(),
            MarkupContainer::default(),
        )
        .with_format(OutputFormat::Text);
        c.submit(&FormSubmission::with_url("https://example.com"))
            .await
            .unwrap();
        assert!(c.container().content().starts_with("SEO Evaluation Results\n"));
    }

    #[tokio::test]
    async fn evaluator_failure_renders_error_notice() {
        let mut c = FormController::new(
            FailingEvaluator,
            RecordingNotifier::default(),
            MarkupContainer::default(),
        );
        let err = c
            .submit(&FormSubmission::with_url("gopher://old.example"))
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::Evaluation(_)));
        assert!(c.notifier.0.is_empty());
        assert!(c
            .into_container()
            .into_content()
            .contains("Error analyzing the URL: unsupported URL scheme"));
    }

    struct BadUrlEvaluator;

    impl Evaluator for BadUrlEvaluator {
        async fn evaluate(&self, url: &str) -> Result<EvaluationResult, EvalError> {
            let source = url::Url::parse(url).unwrap_err();
            Err(EvalError::InvalidUrl {
                url: url.to_string(),
                source,
            })
        }
    }

    #[tokio::test]
    async fn error_notice_names_each_cause_once() {
        let mut c = FormController::new(
            BadUrlEvaluator,
            RecordingNotifier::default(),
            MarkupContainer::default(),
        )
        .with_format(OutputFormat::Text);
        c.submit(&FormSubmission::with_url("example.com"))
            .await
            .unwrap_err();
        let content = c.into_container().into_content();
        assert!(content.contains("invalid URL \"example.com\": relative URL without a base"));
        assert_eq!(content.matches("relative URL without a base").count(), 1);
    }
}
