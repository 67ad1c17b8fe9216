//! In-memory implementation of the company and invoice services
//!
//! Useful for tests and local development. Both tables live behind a single
//! `RwLock` so the unique, foreign key and cascade rules of the relational
//! schema hold exactly as they do in PostgreSQL.

use crate::core::error::StorageError;
use crate::core::model::{
    Company, CompanySummary, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice,
};
use crate::core::{CompanyService, InvoiceService};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    next_invoice_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            companies: BTreeMap::new(),
            invoices: BTreeMap::new(),
            next_invoice_id: 1,
        }
    }
}

/// In-memory store implementing both [`CompanyService`] and [`InvoiceService`]
///
/// Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StorageError::LockPoisoned("read").into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StorageError::LockPoisoned("write").into())
    }
}

#[async_trait]
impl CompanyService for InMemoryStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        let tables = self.read()?;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        let tables = self.read()?;
        Ok(tables.companies.get(code).cloned())
    }

    async fn create(&self, company: Company) -> Result<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            return Err(StorageError::UniqueViolation {
                table: "companies",
                key: company.code,
            }
            .into());
        }

        tables
            .companies
            .insert(company.code.clone(), company.clone());
        Ok(company)
    }

    async fn update(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<Option<Company>> {
        let mut tables = self.write()?;

        Ok(tables.companies.get_mut(code).map(|company| {
            company.name = name.to_string();
            company.description = description.to_string();
            company.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let mut tables = self.write()?;

        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);
        Ok(true)
    }
}

#[async_trait]
impl InvoiceService for InMemoryStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Invoice>> {
        let tables = self.read()?;
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(&invoice.comp_code) {
            return Err(StorageError::ForeignKeyViolation {
                table: "invoices",
                message: format!(
                    "Key (comp_code)=({}) is not present in table \"companies\"",
                    invoice.comp_code
                ),
            }
            .into());
        }

        let id = tables.next_invoice_id;
        tables.next_invoice_id += 1;

        let stored = Invoice {
            id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: false,
            add_date: invoice.add_date,
            paid_date: None,
        };
        tables.invoices.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        let mut tables = self.write()?;

        Ok(tables.invoices.get_mut(&id).map(|invoice| {
            invoice.amt = changes.amt;
            invoice.paid = changes.paid;
            invoice.paid_date = changes.paid_date;
            invoice.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.invoices.remove(&id).is_some())
    }

    async fn list_for_company(&self, comp_code: &str) -> Result<Vec<Invoice>> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == comp_code)
            .cloned()
            .collect())
    }
}
