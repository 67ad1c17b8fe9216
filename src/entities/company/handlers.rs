//! Company HTTP handlers

use crate::core::error::{ApiError, ApiResult};
use crate::core::model::Company;
use crate::core::validation::{JsonBody, PathParam, validators};
use crate::core::CompanyService;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;

const MISSING_FIELDS: &str = "Request missing required information, please resubmit";

/// Company-specific AppState
#[derive(Clone)]
pub struct CompanyAppState {
    pub companies: Arc<dyn CompanyService>,
}

fn not_found(code: &str) -> ApiError {
    ApiError::not_found(format!("Company {} not found", code))
}

/// GET /companies
pub async fn list_companies(State(state): State<CompanyAppState>) -> ApiResult<Json<Value>> {
    let companies = state.companies.list().await?;
    if companies.is_empty() {
        return Err(ApiError::not_found("No companies were found"));
    }

    Ok(Json(json!({ "companies": companies })))
}

/// GET /companies/{code}
pub async fn get_company(
    State(state): State<CompanyAppState>,
    PathParam(code): PathParam<String>,
) -> ApiResult<Json<Value>> {
    let company = state
        .companies
        .get(&code)
        .await?
        .ok_or_else(|| not_found(&code))?;

    Ok(Json(json!({ "company": company })))
}

/// POST /companies
///
/// `code`, `name` and `description` are all required. A code that is
/// already taken fails in the store and surfaces as a 500.
pub async fn create_company(
    State(state): State<CompanyAppState>,
    body: JsonBody,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let company = parse_new_company(&body).map_err(|detail| {
        tracing::debug!(%detail, "Rejected company");
        ApiError::bad_request(MISSING_FIELDS)
    })?;

    let company = state.companies.create(company).await?;
    tracing::info!(code = %company.code, "Company created");

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

fn parse_new_company(body: &JsonBody) -> Result<Company, String> {
    Ok(Company {
        code: validators::required_str("code", body.get("code"))?,
        name: validators::required_str("name", body.get("name"))?,
        description: validators::required_str("description", body.get("description"))?,
    })
}

/// PATCH /companies/{code}
///
/// Each supplied `name`/`description` replaces the stored value; anything
/// omitted is kept.
pub async fn update_company(
    State(state): State<CompanyAppState>,
    PathParam(code): PathParam<String>,
    body: JsonBody,
) -> ApiResult<Json<Value>> {
    let existing = state
        .companies
        .get(&code)
        .await?
        .ok_or_else(|| not_found(&code))?;

    let name = validators::optional_str("name", body.get("name")).map_err(ApiError::BadRequest)?;
    let description = validators::optional_str("description", body.get("description"))
        .map_err(ApiError::BadRequest)?;

    let name = name.unwrap_or(existing.name);
    let description = description.unwrap_or(existing.description);

    let company = state
        .companies
        .update(&code, &name, &description)
        .await?
        .ok_or_else(|| not_found(&code))?;
    tracing::info!(code = %company.code, "Company updated");

    Ok(Json(json!({ "company": company })))
}

/// DELETE /companies/{code}
///
/// The company's invoices are deleted with it.
pub async fn delete_company(
    State(state): State<CompanyAppState>,
    PathParam(code): PathParam<String>,
) -> ApiResult<Json<Value>> {
    let missing = || ApiError::not_found(format!("Company code {} not found", code));

    state.companies.get(&code).await?.ok_or_else(missing)?;

    if !state.companies.delete(&code).await? {
        return Err(missing());
    }
    tracing::info!(%code, "Company deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
