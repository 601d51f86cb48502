//! Adjust Stock Handler

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

/// Adjust Stock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockAdjustmentRequest {
    /// Signed delta applied to the current quantity
    #[serde(default)]
    pub adjustment: Option<i32>,
}

/// Adjust Stock Handler
///
/// Applies a signed delta to the current quantity. A delta that would drive
/// the quantity negative is rejected and the stored value is unchanged.
#[endpoint(
    tags("products"),
    summary = "Adjust Stock",
    responses(
        (status_code = 200, description = "Stock adjusted"),
        (status_code = 400, description = "Missing adjustment or insufficient stock"),
        (status_code = 404, description = "Product not found"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<StockAdjustmentRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(adjustment) = json.into_inner().adjustment else {
        return Err(ApiError::bad_request("Adjustment is required"));
    };

    let product = state
        .app
        .products
        .adjust_stock(uuid.into_inner().into(), adjustment)
        .await?;

    Ok(Json(product.into()))
}
