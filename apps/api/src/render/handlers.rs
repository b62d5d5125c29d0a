//! Axum route handlers for the preview and template selection.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::document::TemplateId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetTemplateRequest {
    pub template: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub template: TemplateId,
    pub name: &'static str,
    pub available: Vec<TemplateId>,
}

fn parse_template(raw: &str) -> Result<TemplateId, AppError> {
    raw.parse::<TemplateId>().map_err(AppError::Validation)
}

fn template_response(template: TemplateId) -> TemplateResponse {
    TemplateResponse {
        template,
        name: template.display_name(),
        available: TemplateId::ALL.to_vec(),
    }
}

/// GET /api/v1/preview?template=modern
///
/// Printable HTML of the latest Document snapshot. Without `template` the
/// session's selected template is used.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let template = query.template.as_deref().map(parse_template).transpose()?;
    let rendered = state.session.preview(template).await?;
    Ok(Html(rendered.html))
}

/// GET /api/v1/template
pub async fn handle_get_template(
    State(state): State<AppState>,
) -> Result<Json<TemplateResponse>, AppError> {
    Ok(Json(template_response(state.session.template().await?)))
}

/// PUT /api/v1/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<SetTemplateRequest>,
) -> Result<Json<TemplateResponse>, AppError> {
    let template = parse_template(&req.template)?;
    state.session.set_template(template).await?;
    Ok(Json(template_response(template)))
}
