//! Render targets for product cards.
//!
//! # Design
//! The renderer only ever appends cards and the search controller only ever
//! clears them, so `Container` exposes exactly those two operations. A host
//! that draws somewhere else (a terminal, a real DOM) implements the trait;
//! `ProductGrid` is the in-memory grid used by the storefront and by tests.

use std::fmt::Write as _;

use crate::render::ProductCard;

/// Element id of the grid container.
pub const GRID_ID: &str = "product-grid";

/// Element id of the search input that drives the grid.
pub const SEARCH_ID: &str = "product-search";

/// Something product cards can be appended to.
pub trait Container {
    fn append(&mut self, card: ProductCard);
    fn clear(&mut self);
}

/// An ordered, in-memory grid of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductGrid {
    cards: Vec<ProductCard>,
}

impl ProductGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Render the grid as the `product-grid` element and its children.
    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"{GRID_ID}\">\n");
        for card in &self.cards {
            html.push_str(&card.to_html());
        }
        html.push_str("</div>\n");
        html
    }

    /// One line per card, for terminal hosts.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for card in &self.cards {
            let _ = writeln!(text, "{}", card.to_text());
        }
        text
    }
}

impl Container for ProductGrid {
    fn append(&mut self, card: ProductCard) {
        self.cards.push(card);
    }

    fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
