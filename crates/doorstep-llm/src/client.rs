//! Chat client interface and message types.

use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction.
    System,
    /// End-user message.
    User,
    /// Model reply.
    Assistant,
}

/// One message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Build a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A single chat completion request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered conversation messages, system instruction first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature for this request.
    pub temperature: Option<f32>,
    /// Optional completion length cap.
    pub max_tokens: Option<u32>,
}

/// A chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text.
    pub content: String,
    /// Model that produced the reply.
    pub model: String,
}

/// A completed first turn: the system instruction, the user message, and the
/// model's reply. Carried whole so a follow-up call can replay it as
/// conversational history.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// System instruction sent with the turn.
    pub system: String,
    /// User message sent with the turn.
    pub user: String,
    /// Model reply text.
    pub reply: String,
}

#[async_trait]
/// Chat client abstraction over an external generative-text provider.
///
/// Implementations perform a single synchronous call per invocation: no
/// caching, no retry, no timeout. A hung or erroring call propagates to the
/// caller.
pub trait ChatClient: Send + Sync {
    /// Perform one chat completion.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;

    /// Identifier of the model this client invokes.
    fn model_name(&self) -> &str;

    /// Invoke the model with a system instruction and one user message.
    async fn invoke(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<Exchange, LlmError> {
        let request = ChatRequest {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: Some(temperature),
            max_tokens: None,
        };
        let response = self.complete(request).await?;
        Ok(Exchange {
            system: system.to_string(),
            user: user.to_string(),
            reply: response.content,
        })
    }

    /// Invoke the model a second time, replaying a prior exchange as
    /// conversational history before the new user message.
    async fn invoke_follow_up(
        &self,
        prior: &Exchange,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(&prior.system),
                ChatMessage::user(&prior.user),
                ChatMessage::assistant(&prior.reply),
                ChatMessage::user(user),
            ],
            temperature: Some(temperature),
            max_tokens: None,
        };
        let response = self.complete(request).await?;
        Ok(response.content)
    }
}
