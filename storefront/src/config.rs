use clap::{Parser, ValueEnum};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Fetch the product catalog, print it as a price-sorted grid and filter it
/// by title. Each stdin line is one keystroke-equivalent search input.
#[derive(Parser, Debug, Clone)]
#[command(name = "storefront", version)]
pub struct Config {
    /// Server that exposes `GET /products`.
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// How the grid is printed after every render.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Apply a single search and exit instead of reading stdin.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}
