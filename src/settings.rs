use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

pub const ENV_PREFIX: &str = "SEO_EVAL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Runtime settings, read from `SEO_EVAL_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source<S>(source: S) -> Self
    where
        S: config::Source + Send + Sync + 'static,
    {
        let built = config::Config::builder().add_source(source).build();
        match built.and_then(|c| c.try_deserialize::<Settings>()) {
            Ok(settings) if settings.timeout_secs == 0 => {
                warn!(
                    "Ignoring {}_TIMEOUT_SECS=0: timeout must be at least one second",
                    ENV_PREFIX
                );
                Settings::default()
            }
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring invalid {}_* settings: {}", ENV_PREFIX, e);
                Settings::default()
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
