//! Database Module
//!
//! Pool construction, schema creation and sample data for the product table.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;

const CREATE_PRODUCT_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS product (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL
    )
";

/// Rows inserted when sample data is requested: `(id, name, description)`.
pub const SAMPLE_PRODUCTS: &[(i64, &str, &str)] = &[
    (1, "T-shirt", "Black T-shirt"),
    (2, "Jeans", "Blue jeans"),
    (3, "Cap", "Red cap"),
];

// == Database ==
/// Owns the connection pool shared by the repositories.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    // == Constructors ==
    /// Connects to `database_url` with at most `max_connections` pooled connections.
    ///
    /// In-memory URLs are pinned to a single long-lived connection; every
    /// SQLite connection to `:memory:` otherwise opens its own empty database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = options.connect(database_url).await?;
        debug!("Connected to {}", database_url);

        Ok(Self { pool })
    }

    /// Connects using the database settings in `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::connect(&config.database_url, config.max_connections).await
    }

    /// Fresh private in-memory database.
    pub async fn connect_in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // == Schema ==
    /// Creates the product table if it does not exist yet.
    pub async fn create_schema(&self) -> Result<()> {
        sqlx::query(CREATE_PRODUCT_TABLE)
            .execute(&self.pool)
            .await?;
        info!("Product schema ready");
        Ok(())
    }

    // == Sample Data ==
    /// Inserts [`SAMPLE_PRODUCTS`], leaving rows whose id already exists untouched.
    ///
    /// Returns the number of rows actually inserted.
    pub async fn seed_sample_data(&self) -> Result<u64> {
        let mut inserted = 0;

        for &(id, name, description) in SAMPLE_PRODUCTS {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO product (id, name, description) VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {} sample products", inserted);
        Ok(inserted)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
