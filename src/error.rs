use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while scraping and exporting match results.
#[derive(thiserror::Error, Debug)]
pub enum PromiedosError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// An expected HTML element was not found in a tournament block.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// The per-match lists of a tournament block disagree on the match count.
    #[error(
        "tournament block {tournament:?} has {local_teams} local teams, \
         {visitor_teams} visitor teams and {statuses} statuses"
    )]
    BlockShape {
        tournament: String,
        local_teams: usize,
        visitor_teams: usize,
        statuses: usize,
    },

    /// Building the HTTP client failed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for PromiedosError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        PromiedosError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PromiedosError>;
