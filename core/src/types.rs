//! Domain DTOs for the catalog API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Decoding is strict: every field the grid reads must be present, so a
//! malformed payload fails once at the boundary instead of deep inside
//! rendering. Unknown fields are ignored. Integration tests catch schema drift
//! between the two crates.

use serde::{Deserialize, Serialize};

/// A single catalog item returned by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub title: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    pub images: Vec<ProductImage>,
}

/// An image attached to a product. Only the first one is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    pub src: String,
}

impl Product {
    /// Source of the first image, if the product has any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|image| image.src.as_str())
    }
}
