//! Products By Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use stockroom_app::domain::products::models::ProductCategory;

use crate::{
    extensions::*,
    products::{errors::ApiError, models::ProductResponse},
    state::State,
};

/// Products By Category Handler
///
/// Returns every product in the given category. An unknown category name is
/// a client error, not an empty list.
#[endpoint(tags("products"), summary = "List Products by Category")]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = category
        .into_inner()
        .parse::<ProductCategory>()
        .map_err(|error| ApiError::bad_request(error.to_string()))?;

    let products = state.app.products.products_by_category(category).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::{MockProductsService, models::ProductUuid};

    use crate::{
        products::errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("api/products/category/{category}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_by_category_forwards_parsed_category() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_products_by_category()
            .once()
            .withf(|category| *category == ProductCategory::HomeGarden)
            .return_once(move |_| Ok(vec![make_product(uuid)]));

        let mut res = TestClient::get("http://example.com/api/products/category/HOME_GARDEN")
            .send(&make_service(repo))
            .await;

        let products: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(products.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_by_category_unknown_value_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_products_by_category().never();

        let mut res = TestClient::get("http://example.com/api/products/category/GADGETS")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid category: GADGETS");

        Ok(())
    }
}
