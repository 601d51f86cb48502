//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::products::models::NewProduct;

use crate::{
    extensions::*,
    products::{
        errors::ApiError,
        models::{ProductResponse, parse_category},
    },
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
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

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, ApiError> {
        Ok(NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            sku: self.sku,
            category: parse_category(self.category)?,
            active: self.active,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = 201, description = "Product created"),
        (status_code = 400, description = "Invalid product payload or duplicate SKU"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .products
        .create_product(json.into_inner().into_new_product()?)
        .await?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError,
        models::{ProductCategory, ProductUuid},
    };

    use crate::{
        products::errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_entity() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|product| {
                product.sku == "KEY-001"
                    && product.category == Some(ProductCategory::Electronics)
                    && product.active.is_none()
            })
            .return_once(move |_| Ok(product));

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Mechanical Keyboard",
                "price": 99.99,
                "quantity": 10,
                "sku": "KEY-001",
                "category": "ELECTRONICS",
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.sku, "KEY-001");
        assert!(body.active);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_sku_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|product| Err(ProductsServiceError::DuplicateSku(product.sku)));

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Mechanical Keyboard",
                "price": 99.99,
                "quantity": 10,
                "sku": "KEY-001",
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Product with SKU 'KEY-001' already exists");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_constraint_violation_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Validation(
                "Price must be greater than 0".to_string(),
            ))
        });

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Mechanical Keyboard",
                "price": 0,
                "quantity": 10,
                "sku": "KEY-001",
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Price must be greater than 0");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_unknown_category_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Mechanical Keyboard",
                "price": 99.99,
                "quantity": 10,
                "sku": "KEY-001",
                "category": "GADGETS",
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid category: GADGETS");

        Ok(())
    }
}
