//! # BizTime
//!
//! A REST API for companies and the invoices billed to them.
//!
//! ## Features
//!
//! - **Companies**: list, fetch, create, partially update and delete by code
//! - **Invoices**: list, fetch (with the company joined in), create, update
//!   amount and payment state, delete, and list per company
//! - **Uniform errors**: every failure renders as
//!   `{"error": {"message", "status"}, "message"}`
//! - **Pluggable storage**: in-memory (default) or PostgreSQL (`postgres` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, Company, CompanyService, CompanySummary, Invoice, InvoiceService,
        InvoiceSummary, StorageError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{BizTimeConfig, Environment, StorageBackend};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder, ServerHost};
}
