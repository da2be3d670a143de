use std::{path::Path, sync::Arc};

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub title: String,
    pub price: i64,
    pub images: Vec<Image>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub src: String,
}

pub type Catalog = Arc<Vec<Product>>;

/// Router over the built-in seed catalog.
pub fn app() -> Router {
    app_with_catalog(seed_catalog())
}

pub fn app_with_catalog(products: Vec<Product>) -> Router {
    let catalog: Catalog = Arc::new(products);
    Router::new()
        .route("/products", get(list_products))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_catalog(
    listener: TcpListener,
    products: Vec<Product>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_catalog(products)).await
}

/// Read a catalog from a JSON file holding an array of products.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, std::io::Error> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

pub fn seed_catalog() -> Vec<Product> {
    fn product(title: &str, price: i64, images: &[&str]) -> Product {
        Product {
            title: title.to_string(),
            price,
            images: images
                .iter()
                .map(|src| Image { src: src.to_string() })
                .collect(),
        }
    }

    vec![
        product("Blue Shirt", 2499, &["/img/blue-shirt.png", "/img/blue-shirt-back.png"]),
        product("Canvas Tote", 1800, &["/img/tote.png"]),
        product("Wool Socks", 950, &["/img/socks.png"]),
        product("Denim Jacket", 8900, &[]),
        product("Striped Shirt", 2499, &["/img/striped-shirt.png"]),
        product("Sticker", 5, &[]),
    ]
}

async fn list_products(State(catalog): State<Catalog>) -> Json<Vec<Product>> {
    tracing::debug!(count = catalog.len(), "listing products");
    Json(catalog.as_ref().clone())
}
