//! Fetcher: one GET for the whole catalog.

use tracing::debug;

use crate::client::ProductClient;
use crate::error::CatalogError;
use crate::http::Transport;
use crate::types::Product;

/// Pairs a `ProductClient` with the host's `Transport`.
///
/// Errors are propagated untouched; there is no retry and no fallback list.
#[derive(Debug)]
pub struct Fetcher<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(client: ProductClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let request = self.client.build_list_products();
        debug!(method = request.method.as_str(), path = %request.path, "fetching products");
        let response = self.transport.execute(&request)?;
        debug!(status = response.status, bytes = response.body.len(), "received response");
        let products = self.client.parse_list_products(response)?;
        debug!(count = products.len(), "decoded products");
        Ok(products)
    }
}
