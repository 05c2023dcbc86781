//! Chat client doubles.

use async_trait::async_trait;
use doorstep_llm::{ChatClient, ChatRequest, ChatResponse, LlmError, OPENAI_API_KEY_ENV};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Chat client that always returns the same reply.
#[derive(Debug, Clone)]
pub struct FixedChatClient {
    response: String,
}

impl FixedChatClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl ChatClient for FixedChatClient {
    async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse, LlmError> {
        Ok(ChatResponse {
            content: self.response.clone(),
            model: "fixed".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "fixed"
    }
}

/// Chat client that replays a fixed sequence of replies and records every
/// request it receives.
#[derive(Debug, Clone)]
pub struct ScriptedChatClient {
    replies: Arc<Mutex<VecDeque<String>>>,
    /// Requests seen so far, in call order.
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl ScriptedChatClient {
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(
                replies.into_iter().map(Into::into).collect(),
            )),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().push(request);
        let Some(reply) = self.replies.lock().pop_front() else {
            return Err(LlmError::MalformedResponse(
                "scripted replies exhausted".to_string(),
            ));
        };
        Ok(ChatResponse {
            content: reply,
            model: "scripted".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Chat client that fails every call.
#[derive(Debug, Clone)]
pub enum FailingChatClient {
    /// Fails as if the provider credential were absent.
    MissingKey,
    /// Fails as if the provider returned garbage.
    Service(String),
}

impl FailingChatClient {
    /// Double for a client whose credential is missing.
    pub fn missing_key() -> Self {
        Self::MissingKey
    }

    /// Double for a provider-side failure with the given message.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }
}

#[async_trait]
impl ChatClient for FailingChatClient {
    async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse, LlmError> {
        match self {
            Self::MissingKey => Err(LlmError::MissingApiKey(OPENAI_API_KEY_ENV)),
            Self::Service(message) => Err(LlmError::MalformedResponse(message.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}
