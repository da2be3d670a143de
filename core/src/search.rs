//! Search controller: re-filter the full catalog on every input event.
//!
//! # Design
//! The controller owns the products fetched at setup and is the only place
//! they live afterwards. Each event starts from that full set, never from the
//! previous result, so typing and deleting characters always converges on the
//! same grid for the same input.

use tracing::debug;

use crate::grid::Container;
use crate::render::append_sorted;
use crate::types::Product;

#[derive(Debug, Clone)]
pub struct SearchController {
    products: Vec<Product>,
}

impl SearchController {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The original, unfiltered catalog.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products whose title contains `value`, ignoring case, in catalog order.
    pub fn matching(&self, value: &str) -> Vec<&Product> {
        let term = value.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.title.to_lowercase().contains(&term))
            .collect()
    }

    /// Handle one `input` event: clear, filter, re-render.
    ///
    /// Returns the number of cards now in `container`.
    pub fn handle_input<C: Container + ?Sized>(&self, value: &str, container: &mut C) -> usize {
        container.clear();
        let matched = self.matching(value);
        debug!(term = value, matched = matched.len(), total = self.products.len(), "search input");
        append_sorted(matched, container)
    }
}
