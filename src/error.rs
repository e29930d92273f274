use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("request failed")]
    Fetch(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed")]
    Template(#[from] askama::Error),

    #[error("JSON encoding failed")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("no URL entered")]
    EmptyUrl,

    #[error(transparent)]
    Evaluation(#[from] EvalError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// `err` followed by each of its sources, joined with `": "`.
pub fn chain_message(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
