//! Suggestion merge state machine.
//!
//! ```text
//! Idle ──trigger──▶ Pending(seq) ──resolve(seq)──▶ Ready(text) ──apply──▶ Idle
//!   ▲                   │  ▲                          │
//!   └──────discard──────┴──┴────────trigger───────────┘
//! ```
//!
//! Every trigger takes the next sequence number. A gateway response is only
//! accepted while its sequence is the one currently pending; anything else is
//! a superseded or discarded request and is dropped.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::editor::{EditController, EditError, FieldPath, PersonalField, WorkField};
use crate::models::document::{EntryId, Section};
use crate::suggestion::gateway::{SuggestionKind, SuggestionRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("suggestion target entry {0} no longer exists")]
    StaleTarget(EntryId),

    #[error("no suggestion is ready to apply")]
    NotReady,

    #[error("unknown suggestion target '{0}'")]
    InvalidTarget(String),

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Target as the editor names it: `summary`, `skills` or `work-<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetSpec {
    Summary,
    Skills,
    WorkIndex(usize),
}

impl FromStr for TargetSpec {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(TargetSpec::Summary),
            "skills" => Ok(TargetSpec::Skills),
            other => other
                .strip_prefix("work-")
                .and_then(|n| n.parse::<usize>().ok())
                .map(TargetSpec::WorkIndex)
                .ok_or_else(|| MergeError::InvalidTarget(other.to_string())),
        }
    }
}

impl TryFrom<String> for TargetSpec {
    type Error = MergeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TargetSpec> for String {
    fn from(spec: TargetSpec) -> Self {
        match spec {
            TargetSpec::Summary => "summary".to_string(),
            TargetSpec::Skills => "skills".to_string(),
            TargetSpec::WorkIndex(i) => format!("work-{i}"),
        }
    }
}

/// Where an accepted suggestion lands. Work targets hold the entry's stable
/// id, so removals elsewhere in the list cannot redirect the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entryId", rename_all = "snake_case")]
pub enum SuggestionTarget {
    Summary,
    Skills,
    Work(EntryId),
}

impl SuggestionTarget {
    /// Pins a positional spec to the entry currently at that position.
    pub fn resolve(spec: TargetSpec, editor: &EditController) -> Result<Self, MergeError> {
        Ok(match spec {
            TargetSpec::Summary => SuggestionTarget::Summary,
            TargetSpec::Skills => SuggestionTarget::Skills,
            TargetSpec::WorkIndex(index) => {
                SuggestionTarget::Work(editor.entry_id(Section::Work, index)?)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionState {
    Idle,
    Pending {
        seq: u64,
        kind: SuggestionKind,
        target: SuggestionTarget,
    },
    Ready {
        seq: u64,
        kind: SuggestionKind,
        target: SuggestionTarget,
        text: String,
    },
}

/// A gateway request the caller must run, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTicket {
    pub seq: u64,
    pub request: SuggestionRequest,
}

/// Serializable view of the pending-suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionView {
    pub state: &'static str,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SuggestionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<SuggestionTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug)]
pub struct SuggestionMerge {
    state: SuggestionState,
    last_seq: u64,
}

impl Default for SuggestionMerge {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionMerge {
    pub fn new() -> Self {
        Self {
            state: SuggestionState::Idle,
            last_seq: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    pub fn loading(&self) -> bool {
        matches!(self.state, SuggestionState::Pending { .. })
    }

    /// Starts a new pending suggestion, superseding whatever was there.
    pub fn trigger(
        &mut self,
        kind: SuggestionKind,
        context: String,
        current_text: Option<String>,
        target: SuggestionTarget,
    ) -> SuggestionTicket {
        self.last_seq += 1;
        let seq = self.last_seq;
        if let SuggestionState::Pending { seq: old, .. } = self.state {
            debug!(old, seq, "superseding pending suggestion");
        }
        self.state = SuggestionState::Pending { seq, kind, target };
        info!(seq, %kind, ?target, "suggestion triggered");
        SuggestionTicket {
            seq,
            request: SuggestionRequest {
                kind,
                context,
                current_text,
            },
        }
    }

    /// Accepts a gateway response. Returns false when `seq` is not the
    /// currently pending request.
    pub fn resolve(&mut self, seq: u64, text: String) -> bool {
        let (kind, target) = match self.state {
            SuggestionState::Pending {
                seq: pending,
                kind,
                target,
            } if pending == seq => (kind, target),
            _ => {
                debug!(seq, "dropping stale suggestion response");
                return false;
            }
        };
        self.state = SuggestionState::Ready {
            seq,
            kind,
            target,
            text,
        };
        debug!(seq, %kind, "suggestion ready");
        true
    }

    /// Lets the user edit the suggestion text before accepting it.
    pub fn edit_text(&mut self, new_text: String) -> Result<(), MergeError> {
        match &mut self.state {
            SuggestionState::Ready { text, .. } => {
                *text = new_text;
                Ok(())
            }
            _ => Err(MergeError::NotReady),
        }
    }

    pub fn discard(&mut self) {
        self.state = SuggestionState::Idle;
    }

    /// Merges the ready text into the Document and returns to Idle.
    ///
    /// In any state other than Ready this fails with `NotReady` and changes
    /// nothing. A Ready suggestion always ends in Idle, even when the merge
    /// fails with `StaleTarget`.
    pub fn apply(&mut self, editor: &mut EditController) -> Result<SuggestionTarget, MergeError> {
        if !matches!(self.state, SuggestionState::Ready { .. }) {
            return Err(MergeError::NotReady);
        }
        let SuggestionState::Ready { target, text, .. } =
            std::mem::replace(&mut self.state, SuggestionState::Idle)
        else {
            return Err(MergeError::NotReady);
        };

        match target {
            SuggestionTarget::Summary => {
                editor.update_field(FieldPath::Personal(PersonalField::Summary), text.into())?;
            }
            SuggestionTarget::Skills => {
                editor.merge_skills(&text);
            }
            SuggestionTarget::Work(id) => {
                let index = editor.work_index_of(id).ok_or_else(|| {
                    warn!(%id, "suggestion target was removed while pending");
                    MergeError::StaleTarget(id)
                })?;
                editor.update_field(
                    FieldPath::Work {
                        index,
                        field: WorkField::Description,
                    },
                    text.into(),
                )?;
            }
        }
        info!(?target, "suggestion applied");
        Ok(target)
    }

    pub fn view(&self) -> SuggestionView {
        let (state, kind, target, text) = match &self.state {
            SuggestionState::Idle => ("idle", None, None, None),
            SuggestionState::Pending { kind, target, .. } => {
                ("pending", Some(*kind), Some(*target), None)
            }
            SuggestionState::Ready {
                kind, target, text, ..
            } => ("ready", Some(*kind), Some(*target), Some(text.clone())),
        };
        SuggestionView {
            state,
            loading: self.loading(),
            kind,
            target,
            text,
        }
    }
}
