//! Products service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductCategory, ProductUpdate, ProductUuid},
        repository::PgProductsRepository,
        validate::validate_new_product,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_active_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_active_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, uuid: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .repository
            .get_product(&mut tx, uuid)
            .await?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        tx.commit().await?;

        Ok(product)
    }

    async fn get_product_by_sku(&self, sku: String) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .repository
            .get_product_by_sku(&mut tx, &sku)
            .await?
            .ok_or(ProductsServiceError::SkuNotFound(sku))?;

        tx.commit().await?;

        Ok(product)
    }

    async fn products_by_category(
        &self,
        category: ProductCategory,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_by_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn search_products_by_name(
        &self,
        name: String,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products_by_name(&mut tx, &name).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn products_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_by_price_range(&mut tx, min_price, max_price)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn low_stock_products(
        &self,
        threshold: i32,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_low_stock_products(&mut tx, threshold)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn search_products(
        &self,
        name: Option<String>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        // Single-criterion precedence: a non-blank name wins outright, then a
        // fully specified price range, then everything.
        if let Some(name) = name.filter(|name| !name.trim().is_empty()) {
            return self.search_products_by_name(name).await;
        }

        if let (Some(min_price), Some(max_price)) = (min_price, max_price) {
            return self.products_by_price_range(min_price, max_price).await;
        }

        self.list_products().await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        validate_new_product(&product)?;

        let mut tx = self.db.begin().await?;

        if self.repository.exists_by_sku(&mut tx, &product.sku).await? {
            return Err(ProductsServiceError::DuplicateSku(product.sku));
        }

        let active = product.active.unwrap_or(true);

        let created = self
            .repository
            .insert_product(&mut tx, &product, active)
            .await
            .map_err(|error| ProductsServiceError::on_sku_conflict(error, &product.sku))?;

        tx.commit().await?;

        tracing::debug!(uuid = %created.uuid, sku = %created.sku, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self
            .repository
            .get_product(&mut tx, uuid)
            .await?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        if update.sku != existing.sku && self.repository.exists_by_sku(&mut tx, &update.sku).await?
        {
            return Err(ProductsServiceError::DuplicateSku(update.sku));
        }

        let updated = self
            .repository
            .update_product(&mut tx, uuid, &update)
            .await
            .map_err(|error| ProductsServiceError::on_sku_conflict(error, &update.sku))?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, uuid).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound(uuid));
        }

        tx.commit().await?;

        tracing::debug!(%uuid, "deleted product");

        Ok(())
    }

    async fn activate_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError> {
        self.set_active(uuid, true).await
    }

    async fn deactivate_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError> {
        self.set_active(uuid, false).await
    }

    async fn set_stock(
        &self,
        uuid: ProductUuid,
        quantity: i32,
    ) -> Result<Product, ProductsServiceError> {
        if quantity < 0 {
            return Err(ProductsServiceError::Validation(
                "Quantity cannot be negative".to_string(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let product = self
            .repository
            .set_product_quantity(&mut tx, uuid, quantity)
            .await?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        tx.commit().await?;

        Ok(product)
    }

    async fn adjust_stock(
        &self,
        uuid: ProductUuid,
        adjustment: i32,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        // The row lock holds until commit or rollback, so concurrent
        // adjustments to the same product serialize here.
        let current = self
            .repository
            .get_product_for_update(&mut tx, uuid)
            .await?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        let new_quantity = current.quantity.saturating_add(adjustment);

        if new_quantity < 0 {
            return Err(ProductsServiceError::InsufficientStock {
                current: current.quantity,
            });
        }

        let product = self
            .repository
            .set_product_quantity(&mut tx, uuid, new_quantity)
            .await?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        tx.commit().await?;

        Ok(product)
    }

    async fn product_count(&self) -> Result<i64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_products(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }

    async fn active_product_count(&self) -> Result<i64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_active_products(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }

    async fn product_count_by_category(
        &self,
        category: ProductCategory,
    ) -> Result<i64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self
            .repository
            .count_products_by_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(count)
    }
}

impl PgProductsService {
    async fn set_active(
        &self,
        uuid: ProductUuid,
        active: bool,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository
            .set_product_active(&mut tx, uuid, active)
            .await?
            .ok_or(ProductsServiceError::NotFound(uuid))?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves all active products.
    async fn list_active_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, uuid: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Retrieve a single product by its SKU.
    async fn get_product_by_sku(&self, sku: String) -> Result<Product, ProductsServiceError>;

    /// Retrieves all products in a category.
    async fn products_by_category(
        &self,
        category: ProductCategory,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves products whose name contains the given text, ignoring case.
    async fn search_products_by_name(
        &self,
        name: String,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves products priced within the inclusive range.
    async fn products_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves active products with stock at or below the threshold.
    async fn low_stock_products(
        &self,
        threshold: i32,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Combined search. A non-blank `name` takes precedence and price bounds
    /// are ignored; otherwise both price bounds select a range query; with
    /// neither criterion, all products are returned.
    async fn search_products(
        &self,
        name: Option<String>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Validates and creates a new product with a unique SKU.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Overwrites a product's mutable fields, re-checking SKU uniqueness when
    /// the SKU changes.
    async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Permanently deletes a product.
    async fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Marks a product as active.
    async fn activate_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Marks a product as inactive.
    async fn deactivate_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Sets the absolute stock quantity.
    async fn set_stock(
        &self,
        uuid: ProductUuid,
        quantity: i32,
    ) -> Result<Product, ProductsServiceError>;

    /// Applies a signed stock adjustment, rejecting any delta that would
    /// drive the quantity negative.
    async fn adjust_stock(
        &self,
        uuid: ProductUuid,
        adjustment: i32,
    ) -> Result<Product, ProductsServiceError>;

    /// Total number of products.
    async fn product_count(&self) -> Result<i64, ProductsServiceError>;

    /// Number of active products.
    async fn active_product_count(&self) -> Result<i64, ProductsServiceError>;

    /// Number of products in a category.
    async fn product_count_by_category(
        &self,
        category: ProductCategory,
    ) -> Result<i64, ProductsServiceError>;
}
