//! Get Product By SKU Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Get Product By SKU Handler
#[endpoint(tags("products"), summary = "Get Product by SKU")]
pub(crate) async fn handler(
    sku: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product_by_sku(sku.into_inner())
        .await?;

    Ok(Json(product.into()))
}
