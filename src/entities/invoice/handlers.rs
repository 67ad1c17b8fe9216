//! Invoice HTTP handlers

use crate::core::error::{ApiError, ApiResult};
use crate::core::model::{CompanyInvoices, InvoiceDetail, NewInvoice};
use crate::core::validation::{JsonBody, PathParam, validators};
use crate::core::{CompanyService, InvoiceService};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

const MISSING_FIELDS: &str = "Request does not contain the required information please resubmit";
const MISSING_AMOUNT: &str = "Invoice Amt value not submitted please resubmit";

/// Invoice-specific AppState
///
/// Invoice views join in company rows, so both services are carried.
#[derive(Clone)]
pub struct InvoiceAppState {
    pub invoices: Arc<dyn InvoiceService>,
    pub companies: Arc<dyn CompanyService>,
}

/// Parse an invoice id from the path. Anything that is not an integer
/// cannot name an invoice.
fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// GET /invoices
pub async fn list_invoices(State(state): State<InvoiceAppState>) -> ApiResult<Json<Value>> {
    let invoices = state.invoices.list().await?;
    if invoices.is_empty() {
        return Err(ApiError::not_found("No invoices available"));
    }

    Ok(Json(json!({ "invoices": invoices })))
}

/// GET /invoices/{id}
pub async fn get_invoice(
    State(state): State<InvoiceAppState>,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<Value>> {
    let not_found = || ApiError::not_found(format!("Invoice {} not found", id));

    let invoice_id = parse_id(&id).ok_or_else(not_found)?;
    let invoice = state
        .invoices
        .get(invoice_id)
        .await?
        .ok_or_else(not_found)?;
    let company = state.companies.get(&invoice.comp_code).await?;
    let detail = InvoiceDetail::new(invoice, company);

    Ok(Json(json!({ "invoice": detail })))
}

/// POST /invoices
///
/// The company is not looked up first: an unknown `comp_code` is rejected
/// by the store's foreign key and surfaces as a 500.
pub async fn create_invoice(
    State(state): State<InvoiceAppState>,
    body: JsonBody,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let invoice = parse_new_invoice(&body).map_err(|detail| {
        tracing::debug!(%detail, "Rejected invoice");
        ApiError::bad_request(MISSING_FIELDS)
    })?;

    let invoice = state.invoices.create(invoice).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Invoice created");

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

fn parse_new_invoice(body: &JsonBody) -> Result<NewInvoice, String> {
    Ok(NewInvoice {
        comp_code: validators::required_str("comp_code", body.get("comp_code"))?,
        amt: validators::required_amount("amt", body.get("amt"))?,
        add_date: Utc::now(),
    })
}

/// PUT /invoices/{id}
///
/// `amt` replaces the stored amount. `paid: true` on an unpaid invoice
/// stamps `paid_date`; `paid: false` clears it.
pub async fn update_invoice(
    State(state): State<InvoiceAppState>,
    PathParam(id): PathParam<String>,
    body: JsonBody,
) -> ApiResult<Json<Value>> {
    let not_found = || ApiError::not_found(format!("Invoice id {} not found", id));

    let invoice_id = parse_id(&id).ok_or_else(not_found)?;
    let invoice = state
        .invoices
        .get(invoice_id)
        .await?
        .ok_or_else(not_found)?;

    let amt = validators::required_amount("amt", body.get("amt")).map_err(|detail| {
        tracing::debug!(%detail, id = invoice_id, "Rejected invoice update");
        ApiError::bad_request(MISSING_AMOUNT)
    })?;
    let paid = validators::optional_bool("paid", body.get("paid")).map_err(ApiError::BadRequest)?;

    let changes = invoice.revise(amt, paid, Utc::now());
    let invoice = state
        .invoices
        .update(invoice_id, changes)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(id = invoice.id, paid = invoice.paid, "Invoice updated");

    Ok(Json(json!({ "invoice": invoice })))
}

/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<InvoiceAppState>,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<Value>> {
    let not_found = || ApiError::not_found(format!("Invoice id {} not found", id));

    let invoice_id = parse_id(&id).ok_or_else(not_found)?;
    state
        .invoices
        .get(invoice_id)
        .await?
        .ok_or_else(not_found)?;

    if !state.invoices.delete(invoice_id).await? {
        return Err(not_found());
    }
    tracing::info!(id = invoice_id, "Invoice deleted");

    Ok(Json(json!({ "status": "deleted" })))
}

/// GET /invoices/company/{code}
pub async fn list_company_invoices(
    State(state): State<InvoiceAppState>,
    PathParam(code): PathParam<String>,
) -> ApiResult<Json<Value>> {
    let company = state
        .companies
        .get(&code)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Company code {} not found.", code)))?;
    let invoices = state.invoices.list_for_company(&code).await?;
    let company = CompanyInvoices { company, invoices };

    Ok(Json(json!({ "company": company })))
}
