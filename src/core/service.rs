//! Service traits for the `companies` and `invoices` tables
//!
//! These are the only way handlers reach the database. Lookups answer with
//! `Option`/`bool`; an `Err` always means the store itself failed (constraint
//! violation, lost connection, ...).

use crate::core::model::{
    Company, CompanySummary, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice,
};
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for the `companies` table
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// List every company as `{code, name}`, ordered by code
    async fn list(&self) -> Result<Vec<CompanySummary>>;

    /// Get a company by its code
    async fn get(&self, code: &str) -> Result<Option<Company>>;

    /// Insert a company; a taken code is a unique violation
    async fn create(&self, company: Company) -> Result<Company>;

    /// Overwrite name and description, returning `None` if the row is gone
    async fn update(&self, code: &str, name: &str, description: &str)
    -> Result<Option<Company>>;

    /// Delete a company and, by cascade, its invoices
    ///
    /// Returns whether a row was deleted.
    async fn delete(&self, code: &str) -> Result<bool>;
}

/// Service trait for the `invoices` table
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// List every invoice as `{id, comp_code}`, ordered by id
    async fn list(&self) -> Result<Vec<InvoiceSummary>>;

    /// Get an invoice by id
    async fn get(&self, id: i32) -> Result<Option<Invoice>>;

    /// Insert an invoice; an unknown company is a foreign key violation
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Write the mutable columns, returning `None` if the row is gone
    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>>;

    /// Delete an invoice, returning whether a row was deleted
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Every invoice billed to a company, ordered by id
    async fn list_for_company(&self, comp_code: &str) -> Result<Vec<Invoice>>;
}
