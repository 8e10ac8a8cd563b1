// src/llm/mod.rs

//! Thin abstraction over the text-completion provider.
//!
//! Every agent role shares one [`LlmClient`] and differs only in its sampling
//! temperature. The client is an opaque service: it receives role-tagged
//! messages and returns the generated text.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod gemini;

pub use gemini::GeminiClient;

/// Errors that can occur while calling the provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A text-completion provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, LlmError>;
}

/// The four roles the assistant plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRole {
    LessonDesigner,
    QuizGenerator,
    DifferentiatedSupport,
    ParentCommunicator,
}

impl AgentRole {
    /// Quiz generation runs cooler for predictable output; support material
    /// runs hotter for variety.
    pub fn temperature(self) -> f32 {
        match self {
            AgentRole::LessonDesigner => 0.7,
            AgentRole::QuizGenerator => 0.5,
            AgentRole::DifferentiatedSupport => 0.8,
            AgentRole::ParentCommunicator => 0.7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentRole::LessonDesigner => "lesson_designer",
            AgentRole::QuizGenerator => "quiz_generator",
            AgentRole::DifferentiatedSupport => "differentiated_support",
            AgentRole::ParentCommunicator => "parent_communicator",
        }
    }
}

/// A provider client bound to one role.
#[derive(Clone)]
pub struct Agent {
    role: AgentRole,
    client: Arc<dyn LlmClient>,
}

impl Agent {
    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub async fn invoke(&self, messages: &[Message]) -> Result<String, LlmError> {
        tracing::debug!(agent = self.role.name(), "invoking llm");
        self.client.complete(messages, self.role.temperature()).await
    }
}

/// Hands out role-bound agents that share a single provider client.
#[derive(Clone)]
pub struct AgentFactory {
    client: Arc<dyn LlmClient>,
}

impl AgentFactory {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn agent(&self, role: AgentRole) -> Agent {
        Agent {
            role,
            client: Arc::clone(&self.client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingClient {
        temperatures: Mutex<Vec<f32>>,
    }

    #[async_trait]
    impl LlmClient for RecordingClient {
        async fn complete(&self, _messages: &[Message], temperature: f32) -> Result<String, LlmError> {
            self.temperatures.lock().unwrap().push(temperature);
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn agents_use_their_role_temperature() {
        let client = Arc::new(RecordingClient {
            temperatures: Mutex::new(Vec::new()),
        });
        let factory = AgentFactory::new(client.clone());

        for role in [
            AgentRole::LessonDesigner,
            AgentRole::QuizGenerator,
            AgentRole::DifferentiatedSupport,
            AgentRole::ParentCommunicator,
        ] {
            let agent = factory.agent(role);
            assert_eq!(agent.role(), role);
            agent.invoke(&[Message::user("hi")]).await.unwrap();
        }

        assert_eq!(*client.temperatures.lock().unwrap(), vec![0.7, 0.5, 0.8, 0.7]);
    }
}
