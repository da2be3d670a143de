use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let products = match std::env::var("CATALOG_FILE") {
        Ok(path) => mock_server::load_catalog(&PathBuf::from(path))?,
        Err(_) => mock_server::seed_catalog(),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, products = products.len(), "listening");
    mock_server::run_with_catalog(listener, products).await
}
