//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state
//! between calls. Listing products is split into `build_list_products`, which
//! produces an `HttpRequest`, and `parse_list_products`, which consumes an
//! `HttpResponse`. The caller executes the round-trip in between.

use crate::error::CatalogError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Product;

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, CatalogError> {
        check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Map any non-2xx status to `CatalogError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), CatalogError> {
    if response.is_success() {
        return Ok(());
    }
    Err(CatalogError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
