//! Axum route handlers for the Document editing API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::{FieldPath, FieldValue};
use crate::errors::AppError;
use crate::models::document::{Document, EntryId, Section};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub path: FieldPath,
    pub value: FieldValue,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub index: usize,
    pub id: EntryId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEntryResponse {
    pub removed_id: EntryId,
}

#[derive(Debug, Deserialize)]
pub struct SetSkillsRequest {
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
    /// The list as the editor textarea shows it.
    pub text: String,
}

fn parse_section(raw: &str) -> Result<Section, AppError> {
    raw.parse::<Section>().map_err(AppError::Validation)
}

/// GET /api/v1/document
pub async fn handle_get_document(
    State(state): State<AppState>,
) -> Result<Json<Document>, AppError> {
    Ok(Json(state.session.document().await?))
}

/// PATCH /api/v1/document/field
///
/// Returns the full Document after the update so the editor can re-sync.
pub async fn handle_update_field(
    State(state): State<AppState>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<Document>, AppError> {
    Ok(Json(state.session.update_field(req.path, req.value).await?))
}

/// POST /api/v1/document/:section
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<AddEntryResponse>, AppError> {
    let section = parse_section(&section)?;
    let (index, id) = state.session.add_entry(section).await?;
    Ok(Json(AddEntryResponse { index, id }))
}

/// DELETE /api/v1/document/:section/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((section, index)): Path<(String, usize)>,
) -> Result<Json<RemoveEntryResponse>, AppError> {
    let section = parse_section(&section)?;
    let removed_id = state.session.remove_entry(section, index).await?;
    Ok(Json(RemoveEntryResponse { removed_id }))
}

/// PUT /api/v1/document/skills
pub async fn handle_set_skills(
    State(state): State<AppState>,
    Json(req): Json<SetSkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let (skills, text) = state.session.set_skills(req.raw).await?;
    Ok(Json(SkillsResponse { skills, text }))
}
