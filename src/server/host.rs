//! Server host holding the state shared by every exposure
//!
//! The host owns the entity registry built from the injected store
//! services. It knows nothing about HTTP; [`RestExposure`](super::exposure::RestExposure)
//! turns it into a router.

use crate::core::{CompanyService, InvoiceService};
use crate::entities::{CompanyDescriptor, InvoiceDescriptor};
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    /// Route descriptors for every resource, each bound to its services
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build the host and register the company and invoice resources
    pub fn new(companies: Arc<dyn CompanyService>, invoices: Arc<dyn InvoiceService>) -> Self {
        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(CompanyDescriptor::new(companies.clone())));
        entity_registry.register(Box::new(InvoiceDescriptor::new(invoices, companies)));

        Self { entity_registry }
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}
