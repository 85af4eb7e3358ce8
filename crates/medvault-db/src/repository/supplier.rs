//! # Supplier Repository
//!
//! Database operations for suppliers.
//!
//! Suppliers are created and listed through the API. Deletion exists only at
//! the store level and is refused by the database while any medicine still
//! references the supplier.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use medvault_core::{NewSupplier, Supplier};

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Lists every supplier ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, name, contact, created_at, updated_at
            FROM suppliers
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = suppliers.len(), "Listed suppliers");
        Ok(suppliers)
    }

    /// Gets a supplier by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, name, contact, created_at, updated_at
            FROM suppliers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    /// Inserts a new supplier and returns its assigned ID.
    pub async fn insert(&self, supplier: &NewSupplier) -> DbResult<i64> {
        debug!(name = %supplier.name, "Inserting supplier");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (name, contact, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            "#,
        )
        .bind(&supplier.name)
        .bind(&supplier.contact)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!(id, "Supplier inserted");
        Ok(id)
    }

    /// Deletes a supplier.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - medicines still reference it
    /// * `Err(DbError::NotFound)` - no supplier with this ID
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting supplier");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplier", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Counts suppliers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
