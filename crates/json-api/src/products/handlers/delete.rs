//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, products::errors::ApiError, state::State};

/// Delete Product Handler
///
/// Hard-deletes the product.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = 204, description = "Product deleted"),
        (status_code = 404, description = "Product not found"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(uuid.into_inner().into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
