//! Entity descriptor for Company

use super::{
    create_company, delete_company, get_company, handlers::CompanyAppState, list_companies,
    update_company,
};
use crate::core::CompanyService;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Company entity
pub struct CompanyDescriptor {
    pub companies: Arc<dyn CompanyService>,
}

impl CompanyDescriptor {
    pub fn new(companies: Arc<dyn CompanyService>) -> Self {
        Self { companies }
    }
}

impl EntityDescriptor for CompanyDescriptor {
    fn entity_type(&self) -> &str {
        "company"
    }

    fn build_routes(&self) -> Router {
        let state = CompanyAppState {
            companies: self.companies.clone(),
        };

        Router::new()
            .route("/companies", get(list_companies).post(create_company))
            .route(
                "/companies/{code}",
                get(get_company).patch(update_company).delete(delete_company),
            )
            .with_state(state)
    }
}
