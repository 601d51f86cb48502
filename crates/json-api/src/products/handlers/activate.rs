//! Activate Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::ApiError, models::MessageResponse},
    state::State,
};

/// Activate Product Handler
#[endpoint(tags("products"), summary = "Activate Product")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .activate_product(uuid.into_inner().into())
        .await?;

    Ok(Json(MessageResponse {
        message: "Product activated successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("api/products/{uuid}/activate").put(handler),
        )
    }

    #[tokio::test]
    async fn test_activate_returns_confirmation_message() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_activate_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        repo.expect_deactivate_product().never();

        let mut res = TestClient::put(format!("http://example.com/api/products/{uuid}/activate"))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Product activated successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_activate_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_activate_product()
            .once()
            .return_once(move |_| Err(ProductsServiceError::NotFound(uuid)));

        let res = TestClient::put(format!("http://example.com/api/products/{uuid}/activate"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
