//! Company handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::handlers::DataResponse;
use crate::AppState;
use reviewhub_common::{
    db::models::Company,
    errors::{AppError, Result},
};

/// GET /api/companies - all companies, name ascending
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Company>>>> {
    let companies = state
        .repo
        .list_companies()
        .await
        .map_err(|e| e.redact("Failed to fetch companies"))?;

    Ok(Json(DataResponse { data: companies }))
}

/// GET /api/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Company>>> {
    let company = state
        .repo
        .find_company_by_id(&id)
        .await
        .map_err(|e| e.redact("Failed to fetch company"))?
        .ok_or_else(|| AppError::NotFound {
            resource: "Company".into(),
        })?;

    Ok(Json(DataResponse { data: company }))
}
