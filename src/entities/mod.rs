//! Entities module - the company and invoice resources

pub mod company;
pub mod invoice;

pub use company::CompanyDescriptor;
pub use invoice::InvoiceDescriptor;
