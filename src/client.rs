use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::config::{RunConfig, DEFAULT_URL};
use crate::error::Result;
use crate::model::ResultsTable;
use crate::promiedos;

/// The entry point for fetching results from promiedos.com.ar.
///
/// `PromiedosClient` wraps a [`reqwest::Client`] and the URL of the results
/// page. The page is fetched over plain HTTP, so scripts are not executed.
/// When the page needs a browser to render, fetch it elsewhere and hand the
/// HTML to [`parse_results`](crate::parse_results).
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> promiedos_scraper::Result<()> {
/// use promiedos_scraper::{yesterday, PromiedosClient};
///
/// let client = PromiedosClient::new();
/// let table = client.get_results(yesterday()).await?;
/// println!("Found {} matches", table.len());
/// # Ok(())
/// # }
/// ```
pub struct PromiedosClient {
    http: reqwest::Client,
    url: String,
}

impl PromiedosClient {
    /// Create a new client for the default results page.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            url: DEFAULT_URL.to_string(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            url: DEFAULT_URL.to_string(),
        }
    }

    /// Create a client from a run configuration.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        Ok(Self::with_client(config.http_client()?).url(&config.url))
    }

    /// Use a different results page.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Fetch the results page and build the table, stamping every row
    /// with `day`.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn get_results(&self, day: NaiveDate) -> Result<ResultsTable> {
        let document = promiedos::get_document(&self.http, &self.url).await?;
        let tournaments = promiedos::parse_tournaments(&document, day);
        let table = crate::table::build_table(&tournaments);
        debug!(rows = table.len(), "built results table");
        Ok(table)
    }
}

impl Default for PromiedosClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromiedosError;

    #[tokio::test]
    async fn test_get_results_unreachable_host() {
        let client = PromiedosClient::new().url("http://127.0.0.1:9/ayer");
        let day = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();

        let result = client.get_results(day).await;
        assert!(matches!(
            result,
            Err(PromiedosError::Http { .. } | PromiedosError::UnexpectedStatus { .. })
        ));
    }

    #[test]
    fn test_from_config_uses_config_url() {
        let config = RunConfig {
            url: "https://example.com/hoy".to_string(),
            ..Default::default()
        };
        let client = PromiedosClient::from_config(&config).unwrap();
        assert_eq!(client.url, "https://example.com/hoy");
    }
}
