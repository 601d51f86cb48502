//! Product Stats Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::errors::ApiError, state::State};

/// Product Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsResponse {
    /// Number of products in the catalog
    pub total_products: i64,

    /// Number of active products
    pub active_products: i64,
}

/// Product Stats Handler
#[endpoint(tags("products"), summary = "Product Stats")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let total_products = state.app.products.product_count().await?;
    let active_products = state.app.products.active_product_count().await?;

    Ok(Json(StatsResponse {
        total_products,
        active_products,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::MockProductsService;

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/products/stats").get(handler))
    }

    #[tokio::test]
    async fn test_stats_reports_total_and_active_counts() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_product_count().once().return_once(|| Ok(7));
        repo.expect_active_product_count()
            .once()
            .return_once(|| Ok(4));

        let mut res = TestClient::get("http://example.com/api/products/stats")
            .send(&make_service(repo))
            .await;

        let body: StatsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.total_products, 7);
        assert_eq!(body.active_products, 4);

        Ok(())
    }
}
