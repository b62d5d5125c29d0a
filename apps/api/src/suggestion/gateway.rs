//! Suggestion gateway: turns a suggestion request into backend text.
//!
//! The gateway never fails to its caller. Missing credentials, backend errors
//! and empty answers all degrade to a fixed string, because whatever comes
//! back is shown to the user as editable text.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::llm_client::{LlmError, TextBackend};
use crate::suggestion::prompts::{
    EMPTY_RESPONSE_MESSAGE, FAILURE_MESSAGE, IMPROVE_WORK_PROMPT_TEMPLATE, MISSING_KEY_MESSAGE,
    SUGGEST_SKILLS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Summary,
    ImproveWork,
    SuggestSkills,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuggestionKind::Summary => "summary",
            SuggestionKind::ImproveWork => "improve_work",
            SuggestionKind::SuggestSkills => "suggest_skills",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub kind: SuggestionKind,
    pub context: String,
    /// Existing text to rewrite. Only `improve_work` embeds it.
    #[serde(default)]
    pub current_text: Option<String>,
}

/// Why a gateway call produced no backend text.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no API key configured")]
    Unavailable,

    #[error("backend call failed: {0}")]
    Failure(#[from] LlmError),
}

/// Builds the kind-specific natural-language instruction.
pub fn build_instruction(request: &SuggestionRequest) -> String {
    match request.kind {
        SuggestionKind::Summary => SUMMARY_PROMPT_TEMPLATE.replace("{context}", &request.context),
        SuggestionKind::ImproveWork => IMPROVE_WORK_PROMPT_TEMPLATE
            .replace(
                "{current_text}",
                request.current_text.as_deref().unwrap_or_default(),
            )
            .replace("{context}", &request.context),
        SuggestionKind::SuggestSkills => {
            SUGGEST_SKILLS_PROMPT_TEMPLATE.replace("{context}", &request.context)
        }
    }
}

#[derive(Clone, Default)]
pub struct SuggestionGateway {
    backend: Option<Arc<dyn TextBackend>>,
}

impl SuggestionGateway {
    /// `None` means no credential is configured; every request short-circuits.
    pub fn new(backend: Option<Arc<dyn TextBackend>>) -> Self {
        Self { backend }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Raw outcome, keeping the failure taxonomy visible.
    pub async fn try_request(&self, request: &SuggestionRequest) -> Result<String, GatewayError> {
        let backend = self.backend.as_ref().ok_or(GatewayError::Unavailable)?;
        let instruction = build_instruction(request);
        info!(kind = %request.kind, "requesting suggestion");
        Ok(backend.send(&instruction).await?)
    }

    /// Always returns displayable text.
    pub async fn request_suggestion(&self, request: &SuggestionRequest) -> String {
        match self.try_request(request).await {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
            Ok(text) => text,
            Err(GatewayError::Unavailable) => {
                warn!(kind = %request.kind, "suggestion requested without an API key");
                MISSING_KEY_MESSAGE.to_string()
            }
            Err(GatewayError::Failure(e)) => {
                error!(kind = %request.kind, "AI generation error: {e}");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
