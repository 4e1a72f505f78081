//! MySQL implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{ConnectOptions, Executor, Row};
use tracing::instrument;

use core_config::mysql::MySqlConfig;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS product (
    id INT UNSIGNED NOT NULL AUTO_INCREMENT,
    productcode VARCHAR(255) NULL,
    shortdesc VARCHAR(255) NULL,
    longdesc TEXT NULL,
    PRIMARY KEY (id)
)";

const GET_SQL: &str = "SELECT id, productcode, shortdesc, longdesc FROM product WHERE id = ?";
const LIST_SQL: &str = "SELECT id, productcode, shortdesc, longdesc FROM product";
const INSERT_SQL: &str = "INSERT INTO product (productcode, shortdesc, longdesc) VALUES (?, ?, ?)";
const UPDATE_SQL: &str = "UPDATE product SET productcode = ?, shortdesc = ?, longdesc = ? WHERE id = ?";
const DELETE_SQL: &str = "DELETE FROM product WHERE id = ?";

/// MySQL implementation of the ProductRepository
///
/// Owns the connection pool; the five parameterized statements are prepared
/// server-side once during [`connect`](Self::connect), so a broken statement
/// fails service start instead of the first request.
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    /// Connect to MySQL, creating the database and `product` table if absent,
    /// and prepare all statements.
    ///
    /// Any failure here is fatal to service start.
    pub async fn connect(config: &MySqlConfig) -> ProductResult<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password);

        Self::ensure_schema(&options, &config.database).await?;

        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect_with(options.database(&config.database))
            .await?;

        let repository = Self { pool };
        repository.prepare_statements().await?;
        tracing::info!("Connected to MySQL and prepared product statements");
        Ok(repository)
    }

    /// Wrap an already-configured pool (schema assumed present).
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Check the connection is alive; used by the readiness endpoint.
    pub async fn ping(&self) -> ProductResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the database and table if they do not exist, on a throwaway
    /// connection made without a default database.
    ///
    /// The database name comes from configuration, not a query binding, so it
    /// is validated before being interpolated into DDL.
    async fn ensure_schema(
        options: &MySqlConnectOptions,
        database: &str,
    ) -> ProductResult<()> {
        Self::validate_database_name(database)?;

        let mut conn = options.connect().await?;
        let create_database = format!(
            "CREATE DATABASE IF NOT EXISTS `{database}` \
             DEFAULT CHARACTER SET = 'utf8' DEFAULT COLLATE 'utf8_general_ci'"
        );
        conn.execute(create_database.as_str()).await?;
        conn.execute(format!("USE `{database}`").as_str()).await?;
        conn.execute(CREATE_TABLE_SQL).await?;
        Ok(())
    }

    /// Accept only `[A-Za-z0-9_]+` as a database name.
    fn validate_database_name(name: &str) -> ProductResult<()> {
        let valid = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_');

        if valid {
            Ok(())
        } else {
            Err(ProductError::Validation(format!(
                "invalid database name '{name}': only letters, digits and underscores are allowed"
            )))
        }
    }

    /// Prepare the five product statements on a pool connection.
    ///
    /// MySQL prepares per connection; the pool re-prepares transparently on
    /// the others via its statement cache. This pass exists to surface SQL
    /// errors at startup.
    async fn prepare_statements(&self) -> ProductResult<()> {
        let mut conn = self.pool.acquire().await?;
        for sql in [GET_SQL, LIST_SQL, INSERT_SQL, UPDATE_SQL, DELETE_SQL] {
            (&mut *conn).prepare(sql).await?;
        }
        Ok(())
    }

    /// Parse an opaque string identifier into the numeric primary key.
    fn parse_id(id: &str) -> Option<u64> {
        id.parse().ok()
    }

    /// Map one row to a Product, columns in fixed order:
    /// id, productcode, shortdesc, longdesc. NULL text maps to "".
    fn row_to_product(row: &MySqlRow) -> Result<Product, sqlx::Error> {
        let id: u64 = row.try_get(0)?;
        let product_code: Option<String> = row.try_get(1)?;
        let short_desc: Option<String> = row.try_get(2)?;
        let long_desc: Option<String> = row.try_get(3)?;

        Ok(Product {
            id: id.to_string(),
            product_code: product_code.unwrap_or_default(),
            short_desc: short_desc.unwrap_or_default(),
            long_desc: long_desc.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        // Non-numeric ids cannot match an auto-increment key
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query(GET_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let mut rows = sqlx::query(LIST_SQL).fetch(&self.pool);

        // A row or decode error mid-stream aborts the whole listing;
        // a partial list is never returned.
        let mut products = Vec::new();
        while let Some(row) = rows.try_next().await? {
            products.push(Self::row_to_product(&row)?);
        }
        Ok(products)
    }

    #[instrument(skip(self, input), fields(product_code = %input.product_code))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let result = sqlx::query(INSERT_SQL)
            .bind(&input.product_code)
            .bind(&input.short_desc)
            .bind(&input.long_desc)
            .execute(&self.pool)
            .await?;

        let mut product = Product::new(input);
        product.id = result.last_insert_id().to_string();
        tracing::debug!(product_id = %product.id, "Created product");
        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let id = Self::parse_id(&product.id)
            .ok_or_else(|| ProductError::NotFound(product.id.clone()))?;

        let result = sqlx::query(UPDATE_SQL)
            .bind(&product.product_code)
            .bind(&product.short_desc)
            .bind(&product.long_desc)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.clone()));
        }
        tracing::debug!(rows = result.rows_affected(), "Updated product");
        Ok(product.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<()> {
        let key =
            Self::parse_id(id).ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let result = sqlx::query(DELETE_SQL)
            .bind(key)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }
        tracing::debug!(rows = result.rows_affected(), "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_numeric() {
        assert_eq!(MySqlProductRepository::parse_id("42"), Some(42));
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert_eq!(MySqlProductRepository::parse_id("abc"), None);
        assert_eq!(MySqlProductRepository::parse_id(""), None);
        assert_eq!(MySqlProductRepository::parse_id("-1"), None);
    }

    #[test]
    fn test_database_name_accepts_identifier_characters() {
        assert!(MySqlProductRepository::validate_database_name("catalog").is_ok());
        assert!(MySqlProductRepository::validate_database_name("catalog_v2").is_ok());
    }

    #[test]
    fn test_database_name_rejects_metacharacters() {
        for name in ["", "catalog; DROP TABLE product", "cat`alog", "cata log"] {
            let err = MySqlProductRepository::validate_database_name(name).unwrap_err();
            assert!(matches!(err, ProductError::Validation(_)));
        }
    }

    #[test]
    fn test_statements_target_four_fixed_columns() {
        for sql in [GET_SQL, LIST_SQL] {
            assert!(sql.starts_with("SELECT id, productcode, shortdesc, longdesc"));
        }
        assert_eq!(INSERT_SQL.matches('?').count(), 3);
        assert_eq!(UPDATE_SQL.matches('?').count(), 4);
        assert_eq!(DELETE_SQL.matches('?').count(), 1);
    }
}
