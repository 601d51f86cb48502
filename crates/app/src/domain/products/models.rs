//! Product Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub sku: String,
    pub category: Option<ProductCategory>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Whether any stock is on hand.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Whether stock is at or below the given restock threshold.
    #[must_use]
    pub fn is_low_stock(&self, threshold: i32) -> bool {
        self.quantity <= threshold
    }
}

/// New Product Model
///
/// `active` is optional; an unspecified value defaults to `true` at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub sku: String,
    pub category: Option<ProductCategory>,
    pub active: Option<bool>,
}

/// Product Update Model
///
/// Updates are full overwrites: every mutable field is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub sku: String,
    pub category: Option<ProductCategory>,
    pub active: bool,
}

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Books,
    HomeGarden,
    Sports,
    Toys,
    Automotive,
    Beauty,
    FoodBeverage,
    Other,
}

/// Raised when a category name does not match any known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {0}")]
pub struct UnknownCategory(pub String);

impl ProductCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Electronics,
        Self::Clothing,
        Self::Books,
        Self::HomeGarden,
        Self::Sports,
        Self::Toys,
        Self::Automotive,
        Self::Beauty,
        Self::FoodBeverage,
        Self::Other,
    ];

    /// Stable wire and storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "ELECTRONICS",
            Self::Clothing => "CLOTHING",
            Self::Books => "BOOKS",
            Self::HomeGarden => "HOME_GARDEN",
            Self::Sports => "SPORTS",
            Self::Toys => "TOYS",
            Self::Automotive => "AUTOMOTIVE",
            Self::Beauty => "BEAUTY",
            Self::FoodBeverage => "FOOD_BEVERAGE",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::HomeGarden => "Home & Garden",
            Self::Sports => "Sports",
            Self::Toys => "Toys",
            Self::Automotive => "Automotive",
            Self::Beauty => "Beauty",
            Self::FoodBeverage => "Food & Beverage",
            Self::Other => "Other",
        }
    }
}

impl Display for ProductCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_wire_name() {
        for category in ProductCategory::ALL {
            assert_eq!(
                category.as_str().parse::<ProductCategory>(),
                Ok(category),
                "wire name should parse back to {category:?}"
            );
        }
    }

    #[test]
    fn category_display_names() {
        assert_eq!(ProductCategory::HomeGarden.to_string(), "Home & Garden");
        assert_eq!(ProductCategory::FoodBeverage.to_string(), "Food & Beverage");
        assert_eq!(ProductCategory::Electronics.to_string(), "Electronics");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = "GADGETS".parse::<ProductCategory>();

        assert_eq!(result, Err(UnknownCategory("GADGETS".to_string())));
    }

    #[test]
    fn low_stock_threshold_is_inclusive() {
        let product = Product {
            uuid: ProductUuid::new(),
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(999, 2),
            quantity: 10,
            sku: "WID-001".to_string(),
            category: None,
            active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        assert!(product.in_stock());
        assert!(product.is_low_stock(10));
        assert!(!product.is_low_stock(9));
    }
}
