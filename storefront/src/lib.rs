//! Terminal host for the catalog grid.
//!
//! # Overview
//! Plays the role of the web page: runs the one HTTP request through
//! [`UreqTransport`], owns the `product-grid` container, and feeds search
//! input to the controller one event at a time.
//!
//! # Design
//! - Nothing is searchable until setup has fetched and rendered the catalog.
//! - Input is read line by line and each line is handled to completion
//!   (clear, filter, render, print) before the next is read.
//! - Errors are returned to `main`, which is the only place they are logged.

pub mod config;
pub mod transport;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use catalog_core::{setup, Fetcher, ProductClient, ProductGrid, Transport, SEARCH_ID};
use tracing::info;

pub use config::{Config, OutputFormat};
pub use transport::UreqTransport;

/// Build the fetcher `config` describes, backed by ureq.
pub fn fetcher(config: &Config) -> Fetcher<UreqTransport> {
    Fetcher::new(ProductClient::new(&config.base_url), UreqTransport::new())
}

/// Load the grid, print it, then apply search input.
///
/// With `config.search` set, that one term is applied and `input` is never
/// read. Otherwise every line of `input` is one search event until EOF.
pub fn run<T, R, W>(config: &Config, fetcher: &Fetcher<T>, input: R, output: &mut W) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let mut grid = ProductGrid::new();
    let search = setup(fetcher, &mut grid)
        .with_context(|| format!("loading products from {}", config.base_url))?;
    print_grid(config.format, &grid, output)?;

    if let Some(term) = &config.search {
        search.handle_input(term, &mut grid);
        return print_grid(config.format, &grid, output);
    }

    info!(input = SEARCH_ID, "reading search input");
    let mut events = 0usize;
    for line in input.lines() {
        let term = line.context("reading search input")?;
        search.handle_input(&term, &mut grid);
        print_grid(config.format, &grid, output)?;
        events += 1;
    }
    info!(events, "search input closed");
    Ok(())
}

fn print_grid<W: Write>(format: OutputFormat, grid: &ProductGrid, output: &mut W) -> Result<()> {
    match format {
        OutputFormat::Html => output.write_all(grid.to_html().as_bytes())?,
        OutputFormat::Text => {
            writeln!(output, "-- {} product(s)", grid.len())?;
            output.write_all(grid.to_text().as_bytes())?;
        }
    }
    output.flush()?;
    Ok(())
}
