//! Database test utilities and shared infrastructure

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

const DB_USER: &str = "stockroom_test";
const DB_PASSWORD: &str = "stockroom_test_password";

/// Shared PostgreSQL container that starts once and is reused across all tests
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name("stockroom_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// An isolated test database inside the shared container.
///
/// Every test gets its own freshly created database with migrations applied,
/// so service operations can commit normally and state never leaks between
/// tests. Databases live as long as the container, which is torn down with
/// the test process.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pool: PgPool,
}

impl TestDb {
    /// Create an isolated test database with a unique generated name.
    pub(crate) async fn new() -> Self {
        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let thread_id = std::thread::current().id();

        let db_name =
            format!("stockroom_test_{nanos}_{thread_id:?}").replace([':', ' ', '(', ')'], "");

        let base_url = format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/postgres");

        let mut conn = PgConnection::connect(&base_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let database_url = format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{db_name}");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create pool for database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool }
    }

    /// Returns the connection pool for this test database.
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_container_startup() {
        let test_db = TestDb::new().await;

        let result: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to execute test query");

        assert_eq!(result, 1);
    }

    #[tokio::test]
    async fn migrations_create_the_products_table() {
        let test_db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(test_db.pool())
            .await
            .expect("products table should exist after migrations");

        assert_eq!(count, 0);
    }
}
