//! Product Wire Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::models::{Product, ProductCategory};

use crate::products::errors::ApiError;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Unit price, an exact decimal encoded as a string
    pub price: Decimal,

    /// Units in stock
    pub quantity: i32,

    /// Stock keeping unit, unique across the catalog
    pub sku: String,

    /// Category wire name, e.g. `HOME_GARDEN`
    pub category: Option<String>,

    /// Whether the product is active
    pub active: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            sku: product.sku,
            category: product
                .category
                .map(|category| category.as_str().to_string()),
            active: product.active,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Confirmation message body: `{"message": "<text>"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Decode an optional category wire name, rejecting unknown values.
pub(crate) fn parse_category(value: Option<String>) -> Result<Option<ProductCategory>, ApiError> {
    value
        .map(|value| value.parse::<ProductCategory>())
        .transpose()
        .map_err(|error| ApiError::bad_request(error.to_string()))
}
