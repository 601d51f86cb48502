//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db)),
        })
    }
}
