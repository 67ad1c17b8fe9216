//! Shared test harness for storage backend testing
//!
//! Provides the seeded BizTime fixture and the macros that run the service
//! contract and REST suites against any store.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod service_tests;


use anyhow::Result;
use biztime::core::model::{Company, InvoiceChanges, NewInvoice};
use biztime::core::{CompanyService, InvoiceService};
use chrono::{DateTime, TimeZone, Utc};

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Ids of the seeded invoices, in insertion order
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub apple_100: i32,
    pub apple_200: i32,
    pub apple_300_paid: i32,
    pub ibm_400: i32,
}

/// `paid_date` of the seeded paid invoice
pub fn seeded_paid_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()
}

pub fn company(code: &str, name: &str, description: &str) -> Company {
    Company {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn new_invoice(comp_code: &str, amt: f64) -> NewInvoice {
    NewInvoice {
        comp_code: comp_code.to_string(),
        amt,
        add_date: Utc::now(),
    }
}

/// Seed the store with:
///
/// ```text
///  code  |      name      |  description
/// -------+----------------+---------------
///  apple | Apple Computer | Maker of OSX.
///  ibm   | IBM            | Big blue.
///
///  comp_code | amt | paid | paid_date
/// -----------+-----+------+------------
///  apple     | 100 | f    |
///  apple     | 200 | f    |
///  apple     | 300 | t    | 2018-01-01
///  ibm       | 400 | f    |
/// ```
pub async fn seed<S>(store: &S) -> Result<Fixture>
where
    S: CompanyService + InvoiceService,
{
    CompanyService::create(store, company("apple", "Apple Computer", "Maker of OSX.")).await?;
    CompanyService::create(store, company("ibm", "IBM", "Big blue.")).await?;

    let apple_100 = InvoiceService::create(store, new_invoice("apple", 100.0)).await?.id;
    let apple_200 = InvoiceService::create(store, new_invoice("apple", 200.0)).await?.id;
    let apple_300_paid = InvoiceService::create(store, new_invoice("apple", 300.0)).await?.id;
    let ibm_400 = InvoiceService::create(store, new_invoice("ibm", 400.0)).await?.id;

    InvoiceService::update(
        store,
        apple_300_paid,
        InvoiceChanges {
            amt: 300.0,
            paid: true,
            paid_date: Some(seeded_paid_date()),
        },
    )
    .await?;

    Ok(Fixture {
        apple_100,
        apple_200,
        apple_300_paid,
        ibm_400,
    })
}
