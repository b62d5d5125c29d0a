// Instruction templates for the suggestion gateway.
// Placeholders are replaced with plain `str::replace` before sending.

/// Profile summary. Replace `{context}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "You are a professional career coach. \
    Write a concise, professional CV profile summary (max 80 words) for a person with \
    the following details: {context}. Use active voice and professional terminology.";

/// Job description rewrite. Replace `{current_text}` and `{context}`.
pub const IMPROVE_WORK_PROMPT_TEMPLATE: &str = "You are a professional resume editor. \
    Rewrite the following job description bullet points to be more impactful, using \
    action verbs and result-oriented language. Keep it concise. \
    Original text: \"{current_text}\". Context: {context}";

/// Skill list for a job title. Replace `{context}`.
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = "List 10 key technical and soft skills \
    (comma separated) relevant for a job title of \"{context}\". \
    Return only the comma separated list.";

/// Shown instead of a suggestion when no credential is configured.
pub const MISSING_KEY_MESSAGE: &str = "API Key is missing. Please configure the environment.";

/// Shown when the backend call fails for any reason.
pub const FAILURE_MESSAGE: &str = "Failed to generate suggestion. Please try again.";

/// Shown when the backend answers with no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No suggestion generated.";
