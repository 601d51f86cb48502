//! Set Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Set Stock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockUpdateRequest {
    /// Absolute quantity to set
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Set Stock Handler
///
/// Replaces the stock quantity with an absolute value.
#[endpoint(
    tags("products"),
    summary = "Set Stock",
    responses(
        (status_code = 200, description = "Stock updated"),
        (status_code = 400, description = "Missing or invalid quantity"),
        (status_code = 404, description = "Product not found"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<StockUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(quantity) = json.into_inner().quantity else {
        return Err(ApiError::bad_request("Quantity is required"));
    };

    let product = state
        .app
        .products
        .set_stock(uuid.into_inner().into(), quantity)
        .await?;

    Ok(Json(product.into()))
}
