//! Product Categories Handler

use salvo::prelude::*;

use stockroom_app::domain::products::models::ProductCategory;

/// Product Categories Handler
///
/// Returns the closed set of category wire names.
#[endpoint(tags("products"), summary = "List Categories")]
pub(crate) async fn handler() -> Json<Vec<String>> {
    Json(
        ProductCategory::ALL
            .into_iter()
            .map(|category| category.as_str().to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_categories_lists_every_wire_name() -> TestResult {
        let router = Router::new().push(Router::with_path("api/products/categories").get(handler));

        let categories: Vec<String> = TestClient::get("http://example.com/api/products/categories")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(categories.len(), 10, "all categories should be listed");
        assert_eq!(categories.first().map(String::as_str), Some("ELECTRONICS"));
        assert!(
            categories.contains(&"FOOD_BEVERAGE".to_string()),
            "wire names use SCREAMING_SNAKE_CASE"
        );

        Ok(())
    }
}
