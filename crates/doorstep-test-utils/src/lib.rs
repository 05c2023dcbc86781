//! Test doubles shared across Doorstep crates.

pub mod llm;
pub mod store;

pub use llm::{FailingChatClient, FixedChatClient, ScriptedChatClient};
pub use store::FailingRecordStore;
