//! Core module containing the data model, service traits, errors and
//! request validation

pub mod error;
pub mod model;
pub mod service;
pub mod validation;

pub use error::{ApiError, ApiResult, StorageError};
pub use model::{Company, CompanySummary, Invoice, InvoiceSummary};
pub use service::{CompanyService, InvoiceService};
