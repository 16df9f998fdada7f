//! Scrape a day of football results from promiedos.com.ar into a flat table.
//!
//! The pure entry point is [`parse_results`], which turns a rendered results
//! page into a [`ResultsTable`]. [`PromiedosClient`] fetches the page over
//! HTTP first.

mod client;
pub mod config;
mod error;
mod model;
mod promiedos;
pub mod table;

pub use client::PromiedosClient;
pub use config::{yesterday, OutputFormat, RunConfig, DEFAULT_URL};
pub use error::{PromiedosError, Result};
pub use model::*;
pub use promiedos::{parse_results, parse_tournaments, Html, TEAM_BLOCK_MARKER};
pub use table::build_table;
