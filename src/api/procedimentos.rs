use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use super::auth::require_admin;
use super::AppState;
use crate::domain::{Procedimento, ProcedimentoPayload};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub departamento: Option<String>,
}

pub async fn list_procedimentos(
    Query(params): Query<ListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Procedimento>>, AppError> {
    let departamento = params.departamento.as_deref().filter(|d| !d.is_empty());
    let procedimentos = state.repo.list_procedimentos(departamento).await?;
    Ok(Json(procedimentos))
}

pub async fn create_procedimento(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Procedimento>), AppError> {
    require_admin(&headers, state.config.admin_password.as_deref())?;

    // Bodies not declared as JSON are read as an empty payload.
    let payload = if is_json_content_type(&headers) {
        ProcedimentoPayload::from_body(&body)
    } else {
        ProcedimentoPayload::default()
    };

    let novo = payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let procedimento = state.repo.insert_procedimento(&novo).await?;
    tracing::info!(
        id = procedimento.id,
        departamento = %novo.departamento,
        "procedimento created"
    );

    Ok((StatusCode::CREATED, Json(procedimento)))
}

pub async fn delete_procedimento(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    // Non-numeric ids never match a record route.
    let id = parse_id(&raw_id)
        .ok_or_else(|| AppError::NotFound("Recurso não encontrado.".into()))?;

    require_admin(&headers, state.config.admin_password.as_deref())?;

    if !state.repo.delete_procedimento(id).await? {
        return Err(AppError::NotFound("Procedimento não encontrado.".into()));
    }

    tracing::info!(id, "procedimento deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `application/json` or any `application/*+json` mimetype, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mimetype = value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mimetype == "application/json"
        || (mimetype.starts_with("application/") && mimetype.ends_with("+json"))
}

/// Accept only unsigned decimal ids.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
