//! Editing session. One task owns the Document and the suggestion state.
//!
//! HTTP handlers hold a cloneable `SessionHandle` and talk to the task over an
//! mpsc channel with oneshot replies, so every mutation happens on a single
//! control task and nothing needs a lock. Gateway calls run in spawned tasks
//! and report back through the same channel, tagged with their sequence
//! number.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use crate::editor::{EditController, EditError, FieldPath, FieldValue};
use crate::models::document::{Document, EntryId, Section, TemplateId};
use crate::render::{render, RenderedDocument};
use crate::suggestion::merge::SuggestionTicket;
use crate::suggestion::{
    MergeError, SuggestionGateway, SuggestionKind, SuggestionMerge, SuggestionTarget,
    SuggestionView, TargetSpec,
};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("editing session is no longer running")]
    Closed,

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Suggestion triggers that build their context from the Document, the way
/// the editor's wand buttons do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Summary,
    Skills,
    ImproveWork(usize),
}

/// A suggestion trigger with explicit context.
#[derive(Debug, Clone)]
pub struct TriggerRequest {
    pub kind: SuggestionKind,
    pub context: String,
    pub current_text: Option<String>,
    pub target: TargetSpec,
}

type Reply<T> = oneshot::Sender<T>;

enum Command {
    Document(Reply<Document>),
    UpdateField(FieldPath, FieldValue, Reply<Result<Document, EditError>>),
    AddEntry(Section, Reply<Result<(usize, EntryId), EditError>>),
    RemoveEntry(Section, usize, Reply<Result<EntryId, EditError>>),
    SetSkills(String, Reply<(Vec<String>, String)>),
    Template(Reply<TemplateId>),
    SetTemplate(TemplateId, Reply<()>),
    Trigger(TriggerRequest, Reply<Result<SuggestionView, MergeError>>),
    TriggerShortcut(Shortcut, Reply<Result<SuggestionView, MergeError>>),
    Resolved { seq: u64, text: String },
    Suggestion(Reply<SuggestionView>),
    EditSuggestion(String, Reply<Result<SuggestionView, MergeError>>),
    ApplySuggestion(Reply<Result<(SuggestionTarget, Document), MergeError>>),
    DiscardSuggestion(Reply<SuggestionView>),
}

/// The state owned by the session task.
pub struct Session {
    editor: EditController,
    merge: SuggestionMerge,
    template: TemplateId,
}

impl Session {
    pub fn new(document: Document, template: TemplateId) -> Self {
        Self {
            editor: EditController::new(document),
            merge: SuggestionMerge::new(),
            template,
        }
    }

    /// Explicit-context trigger. `work-<index>` is pinned to that entry's id now.
    fn trigger(&mut self, request: TriggerRequest) -> Result<SuggestionTicket, MergeError> {
        let target = SuggestionTarget::resolve(request.target, &self.editor)?;
        Ok(self
            .merge
            .trigger(request.kind, request.context, request.current_text, target))
    }

    /// Builds the context the editor would send for `shortcut`.
    fn shortcut_request(&self, shortcut: Shortcut) -> Result<TriggerRequest, MergeError> {
        let doc = self.editor.document();
        Ok(match shortcut {
            Shortcut::Summary => TriggerRequest {
                kind: SuggestionKind::Summary,
                context: format!(
                    "{} with skills in {}",
                    doc.personal.job_title,
                    doc.skills.join(", ")
                ),
                current_text: None,
                target: TargetSpec::Summary,
            },
            Shortcut::Skills => TriggerRequest {
                kind: SuggestionKind::SuggestSkills,
                context: doc.personal.job_title.clone(),
                current_text: None,
                target: TargetSpec::Skills,
            },
            Shortcut::ImproveWork(index) => {
                let entry = doc.work.get(index).ok_or(EditError::InvalidIndex {
                    section: Section::Work,
                    index,
                    len: doc.work.len(),
                })?;
                TriggerRequest {
                    kind: SuggestionKind::ImproveWork,
                    context: format!("Role: {}", entry.title),
                    current_text: Some(entry.description.clone()),
                    target: TargetSpec::WorkIndex(index),
                }
            }
        })
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Document>,
}

/// Starts the session task and returns a handle to it. The task stops once
/// every handle is dropped.
pub fn spawn(session: Session, gateway: SuggestionGateway) -> SessionHandle {
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let snapshots = session.editor.subscribe();
    let loopback = commands.downgrade();
    info!(
        template = %session.template,
        gateway_configured = gateway.is_configured(),
        "editing session started"
    );
    tokio::spawn(run(session, gateway, rx, loopback));
    SessionHandle {
        commands,
        snapshots,
    }
}

async fn run(
    mut session: Session,
    gateway: SuggestionGateway,
    mut rx: mpsc::Receiver<Command>,
    loopback: mpsc::WeakSender<Command>,
) {
    while let Some(command) = rx.recv().await {
        handle(&mut session, &gateway, &loopback, command);
    }
    info!("editing session stopped");
}

fn handle(
    session: &mut Session,
    gateway: &SuggestionGateway,
    loopback: &mpsc::WeakSender<Command>,
    command: Command,
) {
    match command {
        Command::Document(reply) => {
            let _ = reply.send(session.editor.document().clone());
        }
        Command::UpdateField(path, value, reply) => {
            let result = session
                .editor
                .update_field(path, value)
                .map(|()| session.editor.document().clone());
            let _ = reply.send(result);
        }
        Command::AddEntry(section, reply) => {
            let index = session.editor.add_entry(section);
            let added = session.editor.entry_id(section, index).map(|id| (index, id));
            let _ = reply.send(added);
        }
        Command::RemoveEntry(section, index, reply) => {
            let _ = reply.send(session.editor.remove_entry(section, index));
        }
        Command::SetSkills(raw, reply) => {
            let skills = session.editor.set_skills(&raw).to_vec();
            let _ = reply.send((skills, session.editor.skills_text()));
        }
        Command::Template(reply) => {
            let _ = reply.send(session.template);
        }
        Command::SetTemplate(template, reply) => {
            debug!(%template, "template selected");
            session.template = template;
            let _ = reply.send(());
        }
        Command::Trigger(request, reply) => {
            let result = start_suggestion(session, gateway, loopback, request);
            let _ = reply.send(result);
        }
        Command::TriggerShortcut(shortcut, reply) => {
            let result = session
                .shortcut_request(shortcut)
                .and_then(|request| start_suggestion(session, gateway, loopback, request));
            let _ = reply.send(result);
        }
        Command::Resolved { seq, text } => {
            session.merge.resolve(seq, text);
        }
        Command::Suggestion(reply) => {
            let _ = reply.send(session.merge.view());
        }
        Command::EditSuggestion(text, reply) => {
            let result = session.merge.edit_text(text).map(|_| session.merge.view());
            let _ = reply.send(result);
        }
        Command::ApplySuggestion(reply) => {
            let result = session
                .merge
                .apply(&mut session.editor)
                .map(|target| (target, session.editor.document().clone()));
            let _ = reply.send(result);
        }
        Command::DiscardSuggestion(reply) => {
            session.merge.discard();
            let _ = reply.send(session.merge.view());
        }
    }
}

/// Moves the merge controller to Pending and runs the gateway call off the
/// session task. No cancellation: a superseded call still completes and its
/// response is dropped by sequence number.
fn start_suggestion(
    session: &mut Session,
    gateway: &SuggestionGateway,
    loopback: &mpsc::WeakSender<Command>,
    request: TriggerRequest,
) -> Result<SuggestionView, MergeError> {
    let ticket = session.trigger(request)?;
    let gateway = gateway.clone();
    let loopback = loopback.clone();
    tokio::spawn(async move {
        let text = gateway.request_suggestion(&ticket.request).await;
        if let Some(commands) = loopback.upgrade() {
            let _ = commands
                .send(Command::Resolved {
                    seq: ticket.seq,
                    text,
                })
                .await;
        }
    });
    Ok(session.merge.view())
}

impl SessionHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> Command,
    ) -> Result<T, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| SessionError::Closed)?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Latest published snapshot, read without a round trip to the session task.
    pub fn snapshot(&self) -> Document {
        self.snapshots.borrow().clone()
    }

    pub async fn document(&self) -> Result<Document, SessionError> {
        self.request(Command::Document).await
    }

    /// Returns the Document as this edit left it.
    pub async fn update_field(
        &self,
        path: FieldPath,
        value: FieldValue,
    ) -> Result<Document, SessionError> {
        Ok(self
            .request(|r| Command::UpdateField(path, value, r))
            .await??)
    }

    pub async fn add_entry(&self, section: Section) -> Result<(usize, EntryId), SessionError> {
        Ok(self.request(|r| Command::AddEntry(section, r)).await??)
    }

    pub async fn remove_entry(
        &self,
        section: Section,
        index: usize,
    ) -> Result<EntryId, SessionError> {
        Ok(self
            .request(|r| Command::RemoveEntry(section, index, r))
            .await??)
    }

    /// The stored list and its textarea form.
    pub async fn set_skills(&self, raw: String) -> Result<(Vec<String>, String), SessionError> {
        self.request(|r| Command::SetSkills(raw, r)).await
    }

    pub async fn template(&self) -> Result<TemplateId, SessionError> {
        self.request(Command::Template).await
    }

    pub async fn set_template(&self, template: TemplateId) -> Result<(), SessionError> {
        self.request(|r| Command::SetTemplate(template, r)).await
    }

    /// Renders the latest snapshot; `template` overrides the session's choice.
    pub async fn preview(
        &self,
        template: Option<TemplateId>,
    ) -> Result<RenderedDocument, SessionError> {
        let template = match template {
            Some(t) => t,
            None => self.template().await?,
        };
        Ok(render(&self.snapshot(), template))
    }

    pub async fn trigger(&self, request: TriggerRequest) -> Result<SuggestionView, SessionError> {
        Ok(self.request(|r| Command::Trigger(request, r)).await??)
    }

    pub async fn trigger_shortcut(
        &self,
        shortcut: Shortcut,
    ) -> Result<SuggestionView, SessionError> {
        Ok(self
            .request(|r| Command::TriggerShortcut(shortcut, r))
            .await??)
    }

    pub async fn suggestion(&self) -> Result<SuggestionView, SessionError> {
        self.request(Command::Suggestion).await
    }

    pub async fn edit_suggestion(&self, text: String) -> Result<SuggestionView, SessionError> {
        Ok(self.request(|r| Command::EditSuggestion(text, r)).await??)
    }

    /// Returns the target and the Document right after the merge.
    pub async fn apply_suggestion(&self) -> Result<(SuggestionTarget, Document), SessionError> {
        Ok(self.request(Command::ApplySuggestion).await??)
    }

    pub async fn discard_suggestion(&self) -> Result<SuggestionView, SessionError> {
        self.request(Command::DiscardSuggestion).await
    }
}
