//! # Medicine Repository
//!
//! Database operations for medicines.
//!
//! ## Key Operations
//! - Joined reads (every row carries its supplier's name and contact)
//! - Substring search across medicine name, company and supplier name
//! - Expiring-soon window
//! - Insert / full-replace update / delete, each in its own transaction
//!
//! ## Expiring Window
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  today = 2026-10-16, days = 30                                          │
//! │                                                                         │
//! │     expired          │◄────────── window (inclusive) ──────────►│       │
//! │  ────────────────────┼───────────────────────────────────────────┼───── │
//! │                 2026-10-16                                  2026-11-15  │
//! │                                                                         │
//! │  ORDER BY expiry_date ASC  → soonest first                              │
//! │  days_until_expiry = expiry_date - today                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Days, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use medvault_core::{ExpiringMedicine, MedicineInput, MedicineWithSupplier};

/// Shared projection for joined medicine reads.
const SELECT_WITH_SUPPLIER: &str = r#"
    SELECT
        m.id,
        m.name,
        m.company,
        m.manufacture_date,
        m.expiry_date,
        m.quantity,
        m.price_cents,
        m.supplier_id,
        m.created_at,
        m.updated_at,
        s.name AS supplier_name,
        s.contact AS supplier_contact
    FROM medicines m
    INNER JOIN suppliers s ON s.id = m.supplier_id
"#;

/// Repository for medicine database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = MedicineRepository::new(pool);
///
/// let id = repo.insert(&input).await?;
/// let medicine = repo.get_by_id(id).await?;
/// let soon = repo.expiring(Local::now().date_naive(), 30).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MedicineRepository {
    pool: SqlitePool,
}

impl MedicineRepository {
    /// Creates a new MedicineRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicineRepository { pool }
    }

    /// Lists every medicine with supplier info, ordered by medicine name.
    pub async fn list(&self) -> DbResult<Vec<MedicineWithSupplier>> {
        let sql = format!("{} ORDER BY m.name, m.id", SELECT_WITH_SUPPLIER);

        let medicines = sqlx::query_as::<_, MedicineWithSupplier>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = medicines.len(), "Listed medicines");
        Ok(medicines)
    }

    /// Gets a medicine by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(..))` - Medicine found
    /// * `Ok(None)` - Medicine not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<MedicineWithSupplier>> {
        let sql = format!("{} WHERE m.id = ?1", SELECT_WITH_SUPPLIER);

        let medicine = sqlx::query_as::<_, MedicineWithSupplier>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(medicine)
    }

    /// Case-insensitive substring search over medicine name, company and
    /// supplier name.
    ///
    /// An empty (or all-whitespace) query returns every medicine. Matching
    /// runs on the joined rows with Unicode case folding; SQLite's `LIKE`
    /// only folds ASCII. Wildcard characters in the query match literally.
    pub async fn search(&self, query: &str) -> DbResult<Vec<MedicineWithSupplier>> {
        let query = query.trim();

        debug!(query = %query, "Searching medicines");

        let medicines = self.list().await?;
        if query.is_empty() {
            return Ok(medicines);
        }

        let needle = query.to_lowercase();
        let medicines: Vec<_> = medicines
            .into_iter()
            .filter(|m| m.matches_folded(&needle))
            .collect();

        debug!(count = medicines.len(), "Search returned medicines");
        Ok(medicines)
    }

    /// Medicines expiring between `today` and `today + days`, inclusive,
    /// soonest first.
    ///
    /// A negative window is empty.
    pub async fn expiring(&self, today: NaiveDate, days: i64) -> DbResult<Vec<ExpiringMedicine>> {
        debug!(%today, days, "Fetching expiring medicines");

        if days < 0 {
            return Ok(Vec::new());
        }

        let until = window_end(today, days);
        let sql = format!(
            r#"{}
            WHERE m.expiry_date >= ?1 AND m.expiry_date <= ?2
            ORDER BY m.expiry_date, m.name, m.id"#,
            SELECT_WITH_SUPPLIER
        );

        let medicines = sqlx::query_as::<_, MedicineWithSupplier>(&sql)
            .bind(today)
            .bind(until)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = medicines.len(), %until, "Expiring window fetched");

        Ok(medicines
            .into_iter()
            .map(|m| ExpiringMedicine::new(m, today))
            .collect())
    }

    /// Inserts a new medicine and returns its assigned ID.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - supplier_id has no supplier
    pub async fn insert(&self, medicine: &MedicineInput) -> DbResult<i64> {
        debug!(name = %medicine.name, supplier_id = medicine.supplier_id, "Inserting medicine");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO medicines (
                name, company, manufacture_date, expiry_date,
                quantity, price_cents, supplier_id,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            "#,
        )
        .bind(&medicine.name)
        .bind(&medicine.company)
        .bind(medicine.manufacture_date)
        .bind(medicine.expiry_date)
        .bind(medicine.quantity)
        .bind(medicine.price.cents())
        .bind(medicine.supplier_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!(id, "Medicine inserted");
        Ok(id)
    }

    /// Replaces every field of an existing medicine.
    ///
    /// ## Returns
    /// * `Ok(())` - exactly one row updated
    /// * `Err(DbError::NotFound)` - no medicine with this ID
    /// * `Err(DbError::ForeignKeyViolation)` - supplier_id has no supplier
    pub async fn update(&self, id: i64, medicine: &MedicineInput) -> DbResult<()> {
        debug!(id, "Updating medicine");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE medicines SET
                name = ?2,
                company = ?3,
                manufacture_date = ?4,
                expiry_date = ?5,
                quantity = ?6,
                price_cents = ?7,
                supplier_id = ?8,
                updated_at = ?9
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&medicine.name)
        .bind(&medicine.company)
        .bind(medicine.manufacture_date)
        .bind(medicine.expiry_date)
        .bind(medicine.quantity)
        .bind(medicine.price.cents())
        .bind(medicine.supplier_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() != 1 {
            return Err(DbError::not_found("Medicine", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes a medicine.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no medicine with this ID
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting medicine");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM medicines WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Medicine", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Counts medicines.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medicines")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Last day of the window, clamped to the largest date SQLite text
/// comparison handles (four-digit years).
fn window_end(today: NaiveDate, days: i64) -> NaiveDate {
    let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);

    u64::try_from(days)
        .ok()
        .and_then(|d| today.checked_add_days(Days::new(d)))
        .filter(|end| end.year() <= 9999)
        .unwrap_or(last)
}

// =============================================================================
// Unit Tests
// =============================================================================
