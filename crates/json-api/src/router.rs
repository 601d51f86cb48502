//! App Router

use salvo::Router;

use crate::products;

/// The `api/products` route tree.
///
/// Fixed path segments are registered before the `{uuid}` wildcard so that
/// `search`, `stats` and friends are never captured as identifiers.
pub(crate) fn app_router() -> Router {
    Router::with_path("api/products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(Router::with_path("search").get(products::search::handler))
        .push(Router::with_path("low-stock").get(products::low_stock::handler))
        .push(Router::with_path("stats").get(products::stats::handler))
        .push(Router::with_path("categories").get(products::categories::handler))
        .push(Router::with_path("sku/{sku}").get(products::get_by_sku::handler))
        .push(Router::with_path("category/{category}").get(products::by_category::handler))
        .push(
            Router::with_path("{uuid}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler)
                .push(Router::with_path("activate").put(products::activate::handler))
                .push(Router::with_path("deactivate").put(products::deactivate::handler))
                .push(
                    Router::with_path("stock")
                        .put(products::stock::handler)
                        .push(Router::with_path("adjust").put(products::adjust_stock::handler)),
                ),
        )
}
