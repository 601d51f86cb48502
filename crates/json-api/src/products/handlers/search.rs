//! Product Search Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Product Search Handler
///
/// Accepts `name`, `minPrice` and `maxPrice` query parameters. A non-blank
/// name takes precedence over the price bounds.
#[endpoint(tags("products"), summary = "Search Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name = req.query::<String>("name");
    let min_price = price_param(req, "minPrice")?;
    let max_price = price_param(req, "maxPrice")?;

    let products = state
        .app
        .products
        .search_products(name, min_price, max_price)
        .await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

fn price_param(req: &Request, name: &str) -> Result<Option<Decimal>, ApiError> {
    req.query::<String>(name)
        .map(|value| {
            value
                .parse::<Decimal>()
                .map_err(|_invalid| ApiError::bad_request(format!("Invalid {name} value")))
        })
        .transpose()
}
