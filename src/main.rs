mod error;
mod evaluator;
mod fetch;
mod form;
mod model;
mod render;
mod settings;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use error::FormError;
use evaluator::{Evaluator, PlaceholderEvaluator, SeoAnalyzer};
use form::{FormController, FormSubmission, MarkupContainer, StderrNotifier};
use render::OutputFormat;
use settings::Settings;

/// Exit status for a rejected (empty) submission.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "seo_eval", about = "Evaluate on-page SEO basics of a URL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a URL and print the rendered results
    Evaluate {
        /// Page to evaluate
        url: String,
        /// Use the fixed placeholder result instead of fetching the page
        #[arg(long)]
        placeholder: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Submit a URL and emit the whole page (form + results container)
    Page {
        /// Page to evaluate
        url: String,
        /// Use the fixed placeholder result instead of fetching the page
        #[arg(long)]
        placeholder: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the check table: names, weights and advice
    Guidelines,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            url,
            placeholder,
            format,
            output,
        } => {
            let (outcome, content) = run_submission(url, placeholder, format).await?;
            emit(outcome, content, output.as_deref())
        }
        Commands::Page {
            url,
            placeholder,
            output,
        } => {
            let (outcome, content) =
                run_submission(url.clone(), placeholder, OutputFormat::Html).await?;
            let content = page_content(&outcome, url.trim(), content)?;
            emit(outcome, content, output.as_deref())
        }
        Commands::Guidelines => {
            print_guidelines();
            Ok(ExitCode::SUCCESS)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

/// Pick the evaluator and submit `url`. The spinner only runs when there is
/// a URL to fetch.
async fn run_submission(
    url: String,
    placeholder: bool,
    format: OutputFormat,
) -> Result<(Result<(), FormError>, String)> {
    let submission = FormSubmission::with_url(url);
    if placeholder {
        return Ok(submit(PlaceholderEvaluator, &submission, format).await);
    }
    let analyzer = SeoAnalyzer::new(&Settings::load())?;
    Ok(if submission.url().is_some() {
        with_spinner(submit(analyzer, &submission, format)).await
    } else {
        submit(analyzer, &submission, format).await
    })
}

/// Run one submission through a fresh controller; returns the outcome and
/// whatever ended up in the result container.
async fn submit<E: Evaluator>(
    evaluator: E,
    submission: &FormSubmission,
    format: OutputFormat,
) -> (Result<(), FormError>, String) {
    let mut controller =
        FormController::new(evaluator, StderrNotifier, MarkupContainer::default())
            .with_format(format);
    let outcome = controller.submit(submission).await;
    (outcome, controller.into_container().into_content())
}

/// Wrap the container content in the page document. A rejected submission
/// leaves the content as is.
fn page_content(
    outcome: &Result<(), FormError>,
    url: &str,
    content: String,
) -> Result<String> {
    match outcome {
        Err(FormError::EmptyUrl) => Ok(content),
        _ => render::page::render_page(url, &content).context("Failed to render page"),
    }
}

/// Buffer what `finish` writes, then send it to the file or stdout.
/// Nothing is written (and no file created) for a rejected submission.
fn emit(
    outcome: Result<(), FormError>,
    content: String,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let mut buf = Vec::new();
    let status = finish(outcome, content, &mut buf);
    if !buf.is_empty() {
        write_output(&buf, output)?;
    }
    status
}

/// Map the submission outcome to an exit status, writing the container
/// content to `out` whenever there is something to show.
fn finish<W: Write>(
    outcome: Result<(), FormError>,
    content: String,
    out: &mut W,
) -> Result<ExitCode> {
    match outcome {
        Err(FormError::EmptyUrl) => Ok(ExitCode::from(EXIT_INVALID_INPUT)),
        Ok(()) => {
            write_content(out, &content)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ FormError::Evaluation(_)) => {
            write_content(out, &content)?;
            Err(e).context("Evaluation failed")
        }
        Err(e) => Err(e).context("Failed to render results"),
    }
}

fn write_content<W: Write>(out: &mut W, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn write_output(bytes: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

async fn with_spinner<F: std::future::Future>(fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message("Analyzing page...");
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

fn print_guidelines() {
    println!("{:<24} | {:>6} | {}", "Check", "Weight", "Description");
    println!("{}", "-".repeat(90));
    for g in evaluator::guidelines::GUIDELINES {
        println!("{:<24} | {:>6} | {}", g.name, g.weight, g.description);
        println!("{:<24} | {:>6} |   {}", "", "", g.guide);
    }
}
