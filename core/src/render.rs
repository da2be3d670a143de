//! Renderer: sort products by price and turn each into a card.

use tracing::trace;

use crate::grid::{escape_html, Container};
use crate::types::Product;

/// Display data for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub image_src: Option<String>,
    pub title: String,
    pub price: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            image_src: product.primary_image().map(str::to_string),
            title: product.title.clone(),
            price: format_price(product.price),
        }
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = String::from("<div class=\"product\">\n");
        if let Some(src) = &self.image_src {
            html.push_str(&format!(
                "  <img src=\"{}\" alt=\"{title}\" class=\"product-image\">\n",
                escape_html(src)
            ));
        }
        html.push_str(&format!("  <h3 class=\"product-title\">{title}</h3>\n"));
        html.push_str(&format!(
            "  <p class=\"product-price\">{}</p>\n",
            escape_html(&self.price)
        ));
        html.push_str("</div>\n");
        html
    }

    pub fn to_text(&self) -> String {
        match &self.image_src {
            Some(src) => format!("{:>10}  {}  [{src}]", self.price, self.title),
            None => format!("{:>10}  {}", self.price, self.title),
        }
    }
}

/// Format minor units as `$<major>.<minor>`.
///
/// Splits the decimal string before its last two characters with no padding,
/// so prices under 10 come out malformed (`5` gives `$.5`).
pub fn format_price(price: i64) -> String {
    let digits = price.to_string();
    let split = digits.len().saturating_sub(2);
    let (major, minor) = digits.split_at(split);
    format!("${major}.{minor}")
}

/// Stable ascending sort by price; equal prices keep their input order.
pub fn sort_by_price(products: &[Product]) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by_key(|product| product.price);
    sorted
}

/// Append one card per product, cheapest first. Never clears `container`.
///
/// Returns the number of cards appended, which always equals `products.len()`.
pub fn render_products<C: Container + ?Sized>(products: &[Product], container: &mut C) -> usize {
    append_sorted(products.iter().collect(), container)
}

pub(crate) fn append_sorted<C: Container + ?Sized>(
    mut selection: Vec<&Product>,
    container: &mut C,
) -> usize {
    selection.sort_by_key(|product| product.price);
    for product in &selection {
        trace!(title = %product.title, price = product.price, "appending card");
        container.append(ProductCard::from_product(product));
    }
    selection.len()
}
