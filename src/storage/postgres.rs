//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, implementing [`CompanyService`] and
//! [`InvoiceService`] over a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! biztime = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! ```sql
//! companies (code TEXT PRIMARY KEY, name TEXT, description TEXT)
//! invoices  (id SERIAL PRIMARY KEY, comp_code TEXT REFERENCES companies ON DELETE CASCADE,
//!            amt DOUBLE PRECISION, paid BOOLEAN, add_date TIMESTAMPTZ, paid_date TIMESTAMPTZ)
//! ```
//!
//! Every handler operation maps onto one parameterised statement; nothing
//! here opens a transaction.

use crate::config::DatabaseConfig;
use crate::core::error::StorageError;
use crate::core::model::{
    Company, CompanySummary, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice,
};
use crate::core::{CompanyService, InvoiceService};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const BACKEND: &str = "PostgreSQL";

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required tables (idempotent).
///
/// This creates:
/// - `companies` keyed by `code`
/// - `invoices` with `comp_code` referencing `companies` (cascade on delete)
///
/// Safe to call on every startup. Existing tables are never altered.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS companies (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create companies table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id SERIAL PRIMARY KEY,
            comp_code TEXT NOT NULL REFERENCES companies ON DELETE CASCADE,
            amt DOUBLE PRECISION NOT NULL,
            paid BOOLEAN NOT NULL DEFAULT FALSE,
            add_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            paid_date TIMESTAMPTZ
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_comp_code ON invoices (comp_code)")
        .execute(pool)
        .await
        .map_err(|e| anyhow!("Failed to create invoices index: {}", e))?;

    Ok(())
}

/// Open a connection pool for the configured database
pub async fn connect(config: &DatabaseConfig, database: &str) -> Result<PgPool> {
    let url = config.connection_url(database);
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&url)
        .await
        .map_err(|e| {
            StorageError::QueryError {
                backend: BACKEND,
                message: format!("failed to connect to database '{}': {}", database, e),
            }
            .into()
        })
}

/// Translate a sqlx error into a [`StorageError`], keeping constraint
/// violations distinguishable from other failures.
fn storage_error(table: &'static str, key: &str, err: sqlx::Error) -> anyhow::Error {
    let code = err
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());

    let err = match code.as_deref() {
        Some(UNIQUE_VIOLATION) => StorageError::UniqueViolation {
            table,
            key: key.to_string(),
        },
        Some(FOREIGN_KEY_VIOLATION) => StorageError::ForeignKeyViolation {
            table,
            message: err.to_string(),
        },
        _ => StorageError::QueryError {
            backend: BACKEND,
            message: err.to_string(),
        },
    };
    err.into()
}

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

/// Company and invoice storage backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use biztime::storage::PostgresStore;
///
/// let pool = PgPool::connect("postgres://localhost/biztime").await?;
/// let store = PostgresStore::new(pool);
/// ensure_schema(store.pool()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CompanyService for PostgresStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies ORDER BY code")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("companies", "", e))
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("companies", code, e))
    }

    async fn create(&self, company: Company) -> Result<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("companies", &company.code, e))
    }

    async fn update(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
             RETURNING code, name, description",
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("companies", code, e))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("companies", code, e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl InvoiceService for PostgresStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("invoices", "", e))
    }

    async fn get(&self, id: i32) -> Result<Option<Invoice>> {
        let sql = format!("SELECT {} FROM invoices WHERE id = $1", INVOICE_COLUMNS);
        sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("invoices", &id.to_string(), e))
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let sql = format!(
            "INSERT INTO invoices (comp_code, amt, add_date) VALUES ($1, $2, $3) RETURNING {}",
            INVOICE_COLUMNS
        );
        sqlx::query_as::<_, Invoice>(&sql)
            .bind(&invoice.comp_code)
            .bind(invoice.amt)
            .bind(invoice.add_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("invoices", &invoice.comp_code, e))
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        let sql = format!(
            "UPDATE invoices SET amt = $1, paid = $2, paid_date = $3 WHERE id = $4 RETURNING {}",
            INVOICE_COLUMNS
        );
        sqlx::query_as::<_, Invoice>(&sql)
            .bind(changes.amt)
            .bind(changes.paid)
            .bind(changes.paid_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("invoices", &id.to_string(), e))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("invoices", &id.to_string(), e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_company(&self, comp_code: &str) -> Result<Vec<Invoice>> {
        let sql = format!(
            "SELECT {} FROM invoices WHERE comp_code = $1 ORDER BY id",
            INVOICE_COLUMNS
        );
        sqlx::query_as::<_, Invoice>(&sql)
            .bind(comp_code)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("invoices", comp_code, e))
    }
}
