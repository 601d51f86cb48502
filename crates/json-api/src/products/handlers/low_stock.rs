//! Low Stock Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Quantity threshold applied when the query parameter is omitted.
const DEFAULT_THRESHOLD: i32 = 10;

/// Low Stock Handler
///
/// Returns active products with stock at or below the threshold.
#[endpoint(tags("products"), summary = "List Low-Stock Products")]
pub(crate) async fn handler(
    threshold: QueryParam<i32, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .low_stock_products(threshold.into_inner().unwrap_or(DEFAULT_THRESHOLD))
        .await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
