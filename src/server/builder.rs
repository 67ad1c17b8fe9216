//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::core::{CompanyService, InvoiceService};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    companies: Option<Arc<dyn CompanyService>>,
    invoices: Option<Arc<dyn InvoiceService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one store for both tables
    ///
    /// The in-memory store must serve both services from the same tables
    /// for foreign keys and cascades to hold.
    pub fn with_store<S>(self, store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        let store = Arc::new(store);
        self.with_company_service(store.clone())
            .with_invoice_service(store)
    }

    pub fn with_company_service(mut self, service: Arc<dyn CompanyService>) -> Self {
        self.companies = Some(service);
        self
    }

    pub fn with_invoice_service(mut self, service: Arc<dyn InvoiceService>) -> Self {
        self.invoices = Some(service);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    fn into_parts(self) -> Result<(ServerHost, Vec<Router>)> {
        let companies = self.companies.ok_or_else(|| {
            anyhow::anyhow!("CompanyService is required. Call .with_store() or .with_company_service()")
        })?;
        let invoices = self.invoices.ok_or_else(|| {
            anyhow::anyhow!("InvoiceService is required. Call .with_store() or .with_invoice_service()")
        })?;

        let host = ServerHost::new(companies, invoices);
        Ok((host, self.custom_routes))
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let (host, custom_routes) = self.into_parts()?;
        RestExposure::build_router(Arc::new(host), custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the given address and handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
