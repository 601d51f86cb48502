//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns all products, optionally restricted to active ones.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    active: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = if active.into_inner() == Some(true) {
        state.app.products.list_active_products().await?
    } else {
        state.app.products.list_products().await?
    };

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
