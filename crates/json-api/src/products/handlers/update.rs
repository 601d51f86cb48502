//! Update Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*,
    products::{
        errors::ApiError,
        models::{ProductResponse, parse_category},
    },
    state::State,
};

/// Update Product Request
///
/// A full overwrite of the product's mutable fields. An omitted `active`
/// flag means active.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl UpdateProductRequest {
    fn into_product_update(self) -> Result<ProductUpdate, ApiError> {
        Ok(ProductUpdate {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            sku: self.sku,
            category: parse_category(self.category)?,
            active: self.active.unwrap_or(true),
        })
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = 200, description = "Product updated"),
        (status_code = 404, description = "Product not found"),
        (status_code = 400, description = "Invalid payload or duplicate SKU"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .products
        .update_product(
            uuid.into_inner().into(),
            json.into_inner().into_product_update()?,
        )
        .await?;

    Ok(Json(updated.into()))
}
