use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::EvalError;
use crate::settings::Settings;

/// A fetched page: final status, body text and wall-clock load time.
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
    pub load_time: Duration,
}

pub fn build_client(settings: &Settings) -> Result<reqwest::Client, EvalError> {
    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(settings.timeout())
        .build()?;
    Ok(client)
}

/// GET a page, timing the request through to the end of the body.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchedPage, EvalError> {
    info!("Fetching {}", url);
    let start = Instant::now();
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    let load_time = start.elapsed();

    debug!(
        "Fetched {} (status {}, {} bytes) in {:.2}s",
        url,
        status,
        body.len(),
        load_time.as_secs_f64()
    );

    Ok(FetchedPage {
        status,
        body,
        load_time,
    })
}
