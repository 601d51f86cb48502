//! Create-time field validation.

use rust_decimal::Decimal;

use crate::domain::products::{errors::ProductsServiceError, models::NewProduct};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;
const SKU_MIN: usize = 3;
const SKU_MAX: usize = 50;

/// Maximum integer digits in a price.
const PRICE_INTEGER_DIGITS: u32 = 10;

/// Maximum fractional digits in a price.
const PRICE_FRACTION_DIGITS: u32 = 2;

/// Validate a product about to be created.
///
/// Violations are reported one at a time, first field wins.
pub(crate) fn validate_new_product(product: &NewProduct) -> Result<(), ProductsServiceError> {
    if product.name.trim().is_empty() {
        return violation("Product name is required");
    }

    if !(NAME_MIN..=NAME_MAX).contains(&product.name.chars().count()) {
        return violation("Product name must be between 2 and 100 characters");
    }

    if let Some(description) = &product.description
        && description.chars().count() > DESCRIPTION_MAX
    {
        return violation("Description cannot exceed 500 characters");
    }

    if product.price <= Decimal::ZERO {
        return violation("Price must be greater than 0");
    }

    if exceeds_price_digits(product.price) {
        return violation("Price must have at most 10 integer digits and 2 decimal places");
    }

    if product.quantity < 0 {
        return violation("Quantity cannot be negative");
    }

    if product.sku.trim().is_empty() {
        return violation("SKU is required");
    }

    if !(SKU_MIN..=SKU_MAX).contains(&product.sku.chars().count()) {
        return violation("SKU must be between 3 and 50 characters");
    }

    Ok(())
}

fn exceeds_price_digits(price: Decimal) -> bool {
    let integer_limit = Decimal::from(10_u64.pow(PRICE_INTEGER_DIGITS));

    price.abs().trunc() >= integer_limit || price.scale() > PRICE_FRACTION_DIGITS
}

fn violation(message: &str) -> Result<(), ProductsServiceError> {
    Err(ProductsServiceError::Validation(message.to_string()))
}
