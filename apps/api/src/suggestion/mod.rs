// AI-assisted suggestions: instruction building, the backend round trip,
// and merging accepted text back into the Document.

pub mod gateway;
pub mod handlers;
pub mod merge;
pub mod prompts;
#[cfg(test)]
pub mod testing;

pub use gateway::{SuggestionGateway, SuggestionKind};
pub use merge::{MergeError, SuggestionMerge, SuggestionTarget, SuggestionView, TargetSpec};
