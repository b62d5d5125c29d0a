pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::suggestion::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document editing
        .route("/api/v1/document", get(editor::handle_get_document))
        .route("/api/v1/document/field", patch(editor::handle_update_field))
        .route("/api/v1/document/skills", put(editor::handle_set_skills))
        .route("/api/v1/document/:section", post(editor::handle_add_entry))
        .route(
            "/api/v1/document/:section/:index",
            delete(editor::handle_remove_entry),
        )
        // Preview
        .route(
            "/api/v1/template",
            get(render::handle_get_template).put(render::handle_set_template),
        )
        .route("/api/v1/preview", get(render::handle_preview))
        // Suggestions
        .route(
            "/api/v1/suggestions",
            get(suggestions::handle_get_suggestion).post(suggestions::handle_trigger),
        )
        .route(
            "/api/v1/suggestions/summary",
            post(suggestions::handle_suggest_summary),
        )
        .route(
            "/api/v1/suggestions/skills",
            post(suggestions::handle_suggest_skills),
        )
        .route(
            "/api/v1/suggestions/work/:index",
            post(suggestions::handle_improve_work),
        )
        .route(
            "/api/v1/suggestions/text",
            put(suggestions::handle_edit_suggestion),
        )
        .route(
            "/api/v1/suggestions/apply",
            post(suggestions::handle_apply),
        )
        .route(
            "/api/v1/suggestions/discard",
            post(suggestions::handle_discard),
        )
        .with_state(state)
}
