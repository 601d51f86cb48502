//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a single product by its identifier.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(uuid.into_inner().into())
        .await?;

    Ok(Json(product.into()))
}
