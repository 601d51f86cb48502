//! Deactivate Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::ApiError, models::MessageResponse},
    state::State,
};

/// Deactivate Product Handler
///
/// The product stays in the catalog but drops out of active listings.
#[endpoint(tags("products"), summary = "Deactivate Product")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .deactivate_product(uuid.into_inner().into())
        .await?;

    Ok(Json(MessageResponse {
        message: "Product deactivated successfully".to_string(),
    }))
}
