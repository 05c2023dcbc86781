//! Generative model client for Doorstep.
//!
//! This crate owns the chat message shapes, the `ChatClient` seam the report
//! pipeline talks to, and the OpenAI-compatible HTTP implementation.

pub mod client;
pub mod error;
pub mod openai;

/// Chat client interface and message types.
pub use client::{ChatClient, ChatMessage, ChatRequest, ChatResponse, Exchange, Role};
/// Model error type.
pub use error::LlmError;
/// OpenAI-compatible chat client.
pub use openai::{OPENAI_API_KEY_ENV, OpenAiChatClient};
