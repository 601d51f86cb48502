//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::models::{
    NewProduct, Product, ProductCategory, ProductUpdate, ProductUuid,
};

const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_FOR_UPDATE_SQL: &str = include_str!("sql/get_product_for_update.sql");
const GET_PRODUCT_BY_SKU_SQL: &str = include_str!("sql/get_product_by_sku.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_ACTIVE_PRODUCTS_SQL: &str = include_str!("sql/list_active_products.sql");
const LIST_PRODUCTS_BY_CATEGORY_SQL: &str = include_str!("sql/list_products_by_category.sql");
const LIST_PRODUCTS_BY_NAME_SQL: &str = include_str!("sql/list_products_by_name.sql");
const LIST_PRODUCTS_BY_PRICE_RANGE_SQL: &str = include_str!("sql/list_products_by_price_range.sql");
const LIST_LOW_STOCK_PRODUCTS_SQL: &str = include_str!("sql/list_low_stock_products.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const SET_PRODUCT_ACTIVE_SQL: &str = include_str!("sql/set_product_active.sql");
const SET_PRODUCT_QUANTITY_SQL: &str = include_str!("sql/set_product_quantity.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const COUNT_ACTIVE_PRODUCTS_SQL: &str = include_str!("sql/count_active_products.sql");
const COUNT_PRODUCTS_BY_CATEGORY_SQL: &str = include_str!("sql/count_products_by_category.sql");
const EXISTS_BY_SKU_SQL: &str = include_str!("sql/exists_by_sku.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Persist a new product, assigning its identity and timestamps.
    pub(crate) async fn insert_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
        active: bool,
    ) -> Result<Product, sqlx::Error> {
        let uuid = ProductUuid::new();

        query_as::<Postgres, Product>(INSERT_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.sku)
            .bind(product.category.map(ProductCategory::as_str))
            .bind(active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Like [`get_product`](Self::get_product), but row-locks the product so a
    /// concurrent read-modify-write on the same row serializes behind this
    /// transaction.
    pub(crate) async fn get_product_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_FOR_UPDATE_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_by_sku(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_BY_SKU_SQL)
            .bind(sku)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_active_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_ACTIVE_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_by_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: ProductCategory,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_BY_CATEGORY_SQL)
            .bind(category.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    /// Case-insensitive containment match on the product name.
    pub(crate) async fn list_products_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_BY_NAME_SQL)
            .bind(name)
            .fetch_all(&mut **tx)
            .await
    }

    /// Inclusive on both bounds.
    pub(crate) async fn list_products_by_price_range(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_BY_PRICE_RANGE_SQL)
            .bind(min_price)
            .bind(max_price)
            .fetch_all(&mut **tx)
            .await
    }

    /// Active products at or below the given quantity threshold.
    pub(crate) async fn list_low_stock_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        threshold: i32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_LOW_STOCK_PRODUCTS_SQL)
            .bind(threshold)
            .fetch_all(&mut **tx)
            .await
    }

    /// Full overwrite of every mutable field; refreshes `updated_at`.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(&update.name)
            .bind(&update.description)
            .bind(update.price)
            .bind(update.quantity)
            .bind(&update.sku)
            .bind(update.category.map(ProductCategory::as_str))
            .bind(update.active)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn set_product_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
        active: bool,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(SET_PRODUCT_ACTIVE_SQL)
            .bind(uuid.into_uuid())
            .bind(active)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn set_product_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
        quantity: i32,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(SET_PRODUCT_QUANTITY_SQL)
            .bind(uuid.into_uuid())
            .bind(quantity)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PRODUCTS_SQL).fetch_one(&mut **tx).await
    }

    pub(crate) async fn count_active_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_ACTIVE_PRODUCTS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_products_by_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: ProductCategory,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PRODUCTS_BY_CATEGORY_SQL)
            .bind(category.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn exists_by_sku(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(EXISTS_BY_SKU_SQL)
            .bind(sku)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category = row
            .try_get::<Option<String>, _>("category")?
            .map(|value| value.parse::<ProductCategory>())
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
            sku: row.try_get("sku")?,
            category,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
