//! Axum route handlers for the suggestion panel.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::document::Document;
use crate::session::{Shortcut, TriggerRequest};
use crate::state::AppState;
use crate::suggestion::{SuggestionKind, SuggestionTarget, SuggestionView, TargetSpec};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerBody {
    pub kind: SuggestionKind,
    pub context: String,
    #[serde(default)]
    pub current_text: Option<String>,
    /// `summary`, `skills` or `work-<index>`.
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct EditSuggestionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub target: SuggestionTarget,
    pub document: Document,
}

/// POST /api/v1/suggestions
///
/// Starts a suggestion and returns immediately with the pending state;
/// poll GET /api/v1/suggestions for the result.
pub async fn handle_trigger(
    State(state): State<AppState>,
    Json(body): Json<TriggerBody>,
) -> Result<(StatusCode, Json<SuggestionView>), AppError> {
    let target = body.target.parse::<TargetSpec>()?;
    let view = state
        .session
        .trigger(TriggerRequest {
            kind: body.kind,
            context: body.context,
            current_text: body.current_text,
            target,
        })
        .await?;
    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// POST /api/v1/suggestions/summary
pub async fn handle_suggest_summary(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SuggestionView>), AppError> {
    let view = state.session.trigger_shortcut(Shortcut::Summary).await?;
    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// POST /api/v1/suggestions/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SuggestionView>), AppError> {
    let view = state.session.trigger_shortcut(Shortcut::Skills).await?;
    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// POST /api/v1/suggestions/work/:index
pub async fn handle_improve_work(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<(StatusCode, Json<SuggestionView>), AppError> {
    let view = state
        .session
        .trigger_shortcut(Shortcut::ImproveWork(index))
        .await?;
    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// GET /api/v1/suggestions
pub async fn handle_get_suggestion(
    State(state): State<AppState>,
) -> Result<Json<SuggestionView>, AppError> {
    Ok(Json(state.session.suggestion().await?))
}

/// PUT /api/v1/suggestions/text
pub async fn handle_edit_suggestion(
    State(state): State<AppState>,
    Json(req): Json<EditSuggestionRequest>,
) -> Result<Json<SuggestionView>, AppError> {
    Ok(Json(state.session.edit_suggestion(req.text).await?))
}

/// POST /api/v1/suggestions/apply
pub async fn handle_apply(
    State(state): State<AppState>,
) -> Result<Json<ApplyResponse>, AppError> {
    let (target, document) = state.session.apply_suggestion().await?;
    Ok(Json(ApplyResponse { target, document }))
}

/// POST /api/v1/suggestions/discard
pub async fn handle_discard(
    State(state): State<AppState>,
) -> Result<Json<SuggestionView>, AppError> {
    Ok(Json(state.session.discard_suggestion().await?))
}
