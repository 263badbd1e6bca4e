use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductPatch, ProductPayload};
use business::domain::product::repository::{ProductQuery, ProductRepository};
use business::domain::shared::pagination::PageRequest;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// SQLSTATE class 22 is "data exception", class 23 "integrity constraint violation".
fn is_constraint_violation(code: Option<&str>) -> bool {
    matches!(code, Some(code) if code.starts_with("22") || code.starts_with("23"))
}

/// Logs the driver error and hands back a variant that carries no driver details.
fn map_sqlx_error(operation: &'static str, error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error
        && is_constraint_violation(db_error.code().as_deref())
    {
        tracing::warn!(operation, error = %error, "products: constraint violation");
        return RepositoryError::ConstraintViolation;
    }

    tracing::error!(operation, error = %error, "products: database error");
    RepositoryError::Unavailable
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn search(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("search", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, payload: &ProductPayload) -> Result<Product, RepositoryError> {
        // Dropping the transaction without commit rolls it back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("insert", e))?;

        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, description, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, price, created_at, updated_at"#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        tx.commit().await.map_err(|e| map_sqlx_error("insert", e))?;

        Ok(entity.into_domain())
    }

    async fn replace(&self, id: i64, payload: &ProductPayload) -> Result<bool, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("replace", e))?;

        let result = sqlx::query(
            r#"UPDATE products
            SET name = $2, description = $3, price = $4, updated_at = now()
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("replace", e))?;

        tx.commit().await.map_err(|e| map_sqlx_error("replace", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn merge_update(&self, id: i64, patch: &ProductPatch) -> Result<bool, RepositoryError> {
        // Nothing to write: report existence without touching updated_at.
        if patch.is_empty() {
            return Ok(self.search(id).await?.is_some());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("merge_update", e))?;

        let result = sqlx::query(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price = COALESCE($5, price),
                updated_at = now()
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(patch.price)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("merge_update", e))?;

        tx.commit().await.map_err(|e| map_sqlx_error("merge_update", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        tx.commit().await.map_err(|e| map_sqlx_error("delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProductQuery for ProductRepositoryPostgres {
    async fn fetch_window(&self, request: &PageRequest) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, created_at, updated_at FROM products ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(to_sql_bound(request.limit))
        .bind(to_sql_bound(request.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("fetch_window", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_all(&self) -> Result<u64, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_all", e))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
