//! OpenAI-compatible chat client.

use crate::client::{ChatClient, ChatMessage, ChatRequest, ChatResponse, Role};
use crate::error::LlmError;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

/// Environment variable holding the provider credential.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    model: String,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

/// Chat client speaking the OpenAI chat-completions wire format.
pub struct OpenAiChatClient {
    base_url: String,
    model: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenAiChatClient {
    /// Build a client with an explicit credential.
    pub fn new(base_url: Option<String>, model: impl Into<String>, api_key: String) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.into(),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build a client with the credential taken from `OPENAI_API_KEY`.
    ///
    /// Fails fast when the variable is absent, before any network attempt.
    pub fn from_env(
        base_url: Option<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let api_key = std::env::var(OPENAI_API_KEY_ENV)
            .map_err(|_| LlmError::MissingApiKey(OPENAI_API_KEY_ENV))?;
        Ok(Self::new(base_url, model, api_key))
    }

    fn role_to_string(role: Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    fn build_messages(messages: &[ChatMessage]) -> Vec<OpenAiMessage> {
        messages
            .iter()
            .map(|message| OpenAiMessage {
                role: Self::role_to_string(message.role).to_string(),
                content: message.content.clone(),
            })
            .collect()
    }

    fn build_request_body(&self, request: &ChatRequest) -> OpenAiRequest {
        OpenAiRequest {
            model: self.model.clone(),
            messages: Self::build_messages(&request.messages),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);
        debug!(
            "invoking chat completion (model={}, messages={})",
            self.model,
            body.messages.len()
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let parsed: OpenAiResponse = response
            .json()
            .await
            .map_err(|err| LlmError::MalformedResponse(err.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("no choices in response".to_string()))?;

        Ok(ChatResponse {
            content: choice.message.content,
            model: parsed.model,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_BASE_URL, OpenAiChatClient};
    use crate::client::{ChatMessage, ChatRequest};
    use pretty_assertions::assert_eq;

    #[test]
    fn request_body_matches_chat_completions_format() {
        let client = OpenAiChatClient::new(None, "gpt-4o", "sk-test".to_string());
        let request = ChatRequest {
            messages: vec![
                ChatMessage::system("Be helpful."),
                ChatMessage::user("Hello"),
            ],
            temperature: Some(1.0),
            max_tokens: Some(512),
        };

        let body = client.build_request_body(&request);
        let json = serde_json::to_value(&body).expect("serialize");

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["temperature"], 1.0);
        assert_eq!(json["max_tokens"], 512);
        let messages = json["messages"].as_array().expect("messages");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "Be helpful.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Hello");
    }

    #[test]
    fn request_body_omits_unset_sampling_fields() {
        let client = OpenAiChatClient::new(None, "gpt-4o", "sk-test".to_string());
        let request = ChatRequest {
            messages: vec![ChatMessage::user("Hello")],
            temperature: None,
            max_tokens: None,
        };

        let body = client.build_request_body(&request);
        let json = serde_json::to_value(&body).expect("serialize");

        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn default_base_url_is_openai() {
        let client = OpenAiChatClient::new(None, "gpt-4o", "sk-test".to_string());
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn from_env_without_key_fails_fast() {
        // Skipped when the ambient environment carries the variable.
        if std::env::var(super::OPENAI_API_KEY_ENV).is_ok() {
            return;
        }
        let result = OpenAiChatClient::from_env(None, "gpt-4o");
        assert!(matches!(
            result,
            Err(crate::error::LlmError::MissingApiKey(_))
        ));
    }
}
