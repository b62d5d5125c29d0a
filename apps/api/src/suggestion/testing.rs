//! In-process `TextBackend` fakes shared by the suggestion and session tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextBackend};

enum Reply {
    Text(String),
    Fail,
}

/// Records every instruction it receives and answers with a fixed reply.
pub struct RecordingBackend {
    reply: Reply,
    calls: Mutex<Vec<String>>,
}

impl RecordingBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Reply::Fail,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextBackend for RecordingBackend {
    async fn send(&self, instruction: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(instruction.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            }),
        }
    }
}

/// Echoes the instruction back after a delay chosen by a marker in the text:
/// instructions containing "slow" take ten times longer than the rest.
pub struct EchoBackend {
    pub fast: Duration,
}

#[async_trait]
impl TextBackend for EchoBackend {
    async fn send(&self, instruction: &str) -> Result<String, LlmError> {
        let delay = if instruction.contains("slow") {
            self.fast * 10
        } else {
            self.fast
        };
        tokio::time::sleep(delay).await;
        Ok(format!("echo: {instruction}"))
    }
}
