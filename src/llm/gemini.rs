// src/llm/gemini.rs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use super::{LlmClient, LlmError, Message, MessageRole};

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Builds the request body. System messages become the `systemInstruction`;
/// everything else is sent as user turns in order.
fn build_payload(messages: &[Message], temperature: f32) -> Value {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for msg in messages {
        match msg.role {
            MessageRole::System => system_parts.push(json!({ "text": msg.content })),
            MessageRole::User => contents.push(json!({
                "role": "user",
                "parts": [{ "text": msg.content }]
            })),
        }
    }

    let mut payload = json!({
        "contents": contents,
        "generationConfig": { "temperature": temperature },
    });

    if !system_parts.is_empty() {
        payload["systemInstruction"] = json!({ "parts": system_parts });
    }

    payload
}

/// Concatenates the text parts of the first candidate.
fn extract_text(data: &Value) -> Result<String, LlmError> {
    let parts = data
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| LlmError::ParseError("No candidate content in response".to_string()))?;

    Ok(parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect())
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_payload(messages, temperature))
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => LlmError::InvalidRequest(text),
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    LlmError::AuthenticationFailed(text)
                }
                _ => LlmError::ProviderUnavailable(format!("Gemini API error ({}): {}", status, text)),
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        extract_text(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_become_the_instruction() {
        let payload = build_payload(
            &[Message::system("be brief"), Message::user("hello")],
            0.5,
        );

        assert_eq!(payload["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(payload["contents"].as_array().unwrap().len(), 1);
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(payload["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn user_only_payload_has_no_instruction() {
        let payload = build_payload(&[Message::user("hello")], 0.8);
        assert!(payload.get("systemInstruction").is_none());
    }

    #[test]
    fn text_parts_are_joined() {
        let data = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello, " }, { "text": "class." }] }
            }]
        });
        assert_eq!(extract_text(&data).unwrap(), "Hello, class.");
    }

    #[test]
    fn missing_candidates_is_a_parse_error() {
        let err = extract_text(&json!({ "candidates": [] })).unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }
}
