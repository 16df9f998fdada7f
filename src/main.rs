use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use promiedos_scraper::{
    parse_results, yesterday, OutputFormat, PromiedosClient, Result, ResultsTable, RunConfig,
    DEFAULT_URL,
};

/// Scrape one day of football results and write them to a dated file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Results page to fetch
    #[arg(long, env = "PROMIEDOS_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Day the results belong to (YYYY-MM-DD), defaults to yesterday
    #[arg(long, env = "PROMIEDOS_DAY")]
    day: Option<NaiveDate>,

    /// Read an already rendered page from disk instead of fetching it
    #[arg(long, env = "PROMIEDOS_INPUT")]
    input: Option<PathBuf>,

    /// Directory the output file is written to
    #[arg(long, env = "PROMIEDOS_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Output file format
    #[arg(long, env = "PROMIEDOS_FORMAT", value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, env = "PROMIEDOS_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(long, env = "PROMIEDOS_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            url: self.url.clone(),
            day: self.day.unwrap_or_else(yesterday),
            output_dir: self.output_dir.clone(),
            format: self.format,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.run_config();
    let table = match &args.input {
        Some(path) => {
            info!(path = %path.display(), day = %config.day, "parsing page from disk");
            let html = std::fs::read_to_string(path)?;
            parse_results(&html, config.day)
        }
        None => {
            info!(url = %config.url, day = %config.day, "fetching results page");
            PromiedosClient::from_config(&config)?
                .get_results(config.day)
                .await?
        }
    };

    let path = write_table(&table, &config)?;
    info!(rows = table.len(), path = %path.display(), "wrote results");
    println!("{}", path.display());
    Ok(())
}

fn write_table(table: &ResultsTable, config: &RunConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.output_dir)?;
    let path = config.output_path();
    let mut file = BufWriter::new(File::create(&path)?);
    table.write(&mut file, config.format)?;
    file.flush()?;
    Ok(path)
}
