//! Page setup: fetch once, render, hand back the search controller.

use tracing::info;

use crate::error::CatalogError;
use crate::fetch::Fetcher;
use crate::grid::Container;
use crate::http::Transport;
use crate::render::render_products;
use crate::search::SearchController;

/// Fetch the catalog, render it into `container` and return the controller
/// that drives later searches.
///
/// On error `container` is left untouched and the error is returned as-is for
/// the host to report.
pub fn setup<T, C>(fetcher: &Fetcher<T>, container: &mut C) -> Result<SearchController, CatalogError>
where
    T: Transport,
    C: Container + ?Sized,
{
    let products = fetcher.fetch_products()?;
    let rendered = render_products(&products, container);
    info!(rendered, base_url = fetcher.client().base_url(), "product grid ready");
    Ok(SearchController::new(products))
}
