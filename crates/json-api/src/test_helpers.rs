//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use stockroom_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        models::{Product, ProductCategory, ProductUuid},
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Mechanical Keyboard".to_string(),
        description: Some("Tenkeyless, hot-swappable switches".to_string()),
        price: Decimal::new(9999, 2),
        quantity: 10,
        sku: "KEY-001".to_string(),
        category: Some(ProductCategory::Electronics),
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        products: Arc::new(products),
    }))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
