//! Product catalog grid core.
//!
//! # Overview
//! Fetches a product list, renders it as a price-sorted grid of cards and
//! filters that grid by title as search input arrives. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network (host-does-IO pattern); a host supplies a [`Transport`] and a
//! [`Container`] and calls [`setup`].
//!
//! # Design
//! - `ProductClient` is stateless: it holds only `base_url`.
//! - Decoding happens once, into typed [`Product`] values, at the boundary.
//! - Errors propagate as [`CatalogError`] to a single place in the host.
//! - [`SearchController`] owns the fetched products; every search restarts
//!   from that full set.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod http;
pub mod page;
pub mod render;
pub mod search;
pub mod types;

pub use client::ProductClient;
pub use error::CatalogError;
pub use fetch::Fetcher;
pub use grid::{Container, ProductGrid, GRID_ID, SEARCH_ID};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use page::setup;
pub use render::{format_price, render_products, sort_by_price, ProductCard};
pub use search::SearchController;
pub use types::{Product, ProductImage};
