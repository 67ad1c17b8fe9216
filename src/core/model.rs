//! Row types for the `companies` and `invoices` tables and the shapes the
//! API returns for them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full `companies` row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// `{code, name}` projection used by the company listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// A full `invoices` row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
}

/// `{id, comp_code}` projection used by the invoice listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

/// Values for a new `invoices` row; the store assigns the id
#[derive(Clone, Debug, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
    pub add_date: DateTime<Utc>,
}

/// The mutable columns of an invoice, written as a whole by an update
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceChanges {
    pub amt: f64,
    pub paid: bool,
    pub paid_date: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Compute the columns an update writes.
    ///
    /// The amount is replaced. `paid: Some(true)` stamps `paid_date` only when
    /// the invoice was unpaid, `Some(false)` always clears it, and `None`
    /// leaves the payment state untouched.
    pub fn revise(&self, amt: f64, paid: Option<bool>, now: DateTime<Utc>) -> InvoiceChanges {
        let (paid, paid_date) = match paid {
            Some(true) if !self.paid => (true, Some(now)),
            Some(true) => (true, self.paid_date),
            Some(false) => (false, None),
            None => (self.paid, self.paid_date),
        };

        InvoiceChanges {
            amt,
            paid,
            paid_date,
        }
    }
}

/// Invoice detail with its company joined in
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub company: Option<Company>,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Option<Company>) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// A company with every invoice billed to it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyInvoices {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<Invoice>,
}
