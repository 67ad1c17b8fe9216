//! Entity descriptor for Invoice

use super::{
    create_invoice, delete_invoice, get_invoice, handlers::InvoiceAppState,
    list_company_invoices, list_invoices, update_invoice,
};
use crate::core::{CompanyService, InvoiceService};
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Invoice entity
pub struct InvoiceDescriptor {
    pub invoices: Arc<dyn InvoiceService>,
    pub companies: Arc<dyn CompanyService>,
}

impl InvoiceDescriptor {
    pub fn new(invoices: Arc<dyn InvoiceService>, companies: Arc<dyn CompanyService>) -> Self {
        Self {
            invoices,
            companies,
        }
    }
}

impl EntityDescriptor for InvoiceDescriptor {
    fn entity_type(&self) -> &str {
        "invoice"
    }

    fn build_routes(&self) -> Router {
        let state = InvoiceAppState {
            invoices: self.invoices.clone(),
            companies: self.companies.clone(),
        };

        Router::new()
            .route("/invoices", get(list_invoices).post(create_invoice))
            .route(
                "/invoices/{id}",
                get(get_invoice).put(update_invoice).delete(delete_invoice),
            )
            .route("/invoices/company/{code}", get(list_company_invoices))
            .with_state(state)
    }
}
