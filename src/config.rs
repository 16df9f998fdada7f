use std::path::PathBuf;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};

use crate::error::{PromiedosError, Result};

/// Results page listing yesterday's fixtures.
pub const DEFAULT_URL: &str = "https://www.promiedos.com.ar/ayer";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Serialization format of the exported table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Parameters of one daily run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub day: NaiveDate,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub timeout: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            day: yesterday(),
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RunConfig {
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(PromiedosError::Client)
    }

    /// Path the exported table is written to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(crate::model::ResultsTable::file_name(self.day, self.format))
    }
}

/// The day before today, in local time.
pub fn yesterday() -> NaiveDate {
    let today = Local::now().date_naive();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}
