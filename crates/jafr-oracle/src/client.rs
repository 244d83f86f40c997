//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use jafr_config::OracleConfig;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::status::check_response;
use crate::{NarrativeOracle, NarrativeRequest};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for a chat-completions endpoint.
pub struct ChatCompletionClient {
    http: reqwest::Client,
    url: String,
    model: String,
    temperature: f32,
    timeout_secs: u64,
}

impl ChatCompletionClient {
    /// Build a client from the oracle section of the config.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jafr/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            url: config.completions_url(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout_secs: config.timeout_secs,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NarrativeOracle for ChatCompletionClient {
    async fn generate_narrative(
        &self,
        request: &NarrativeRequest,
        credential: &str,
    ) -> Result<String, OracleError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.temperature,
            max_tokens: request.max_tokens,
        };

        let sent = self
            .http
            .post(&self.url)
            .bearer_auth(credential)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let resp = check_response(sent).await?;

        let text = resp.text().await.map_err(|e| self.transport_error(e))?;
        parse_completion(&text)
    }
}

impl ChatCompletionClient {
    fn transport_error(&self, error: reqwest::Error) -> OracleError {
        if error.is_timeout() {
            OracleError::Timeout {
                after_secs: self.timeout_secs,
            }
        } else {
            OracleError::Http(error)
        }
    }
}

/// Extract the first choice's text from a completion body.
fn parse_completion(body: &str) -> Result<String, OracleError> {
    let data: ChatResponse = serde_json::from_str(body)
        .map_err(|e| OracleError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let content = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| OracleError::MalformedResponse("no choices in response".into()))?
        .message
        .content
        .unwrap_or_default();

    let content = content.trim();
    if content.is_empty() {
        return Err(OracleError::MalformedResponse(
            "completion has no text".into(),
        ));
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "  ### التفسير\nنص التفسير  "},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    }"#;

    #[test]
    fn parses_first_choice() {
        assert_eq!(parse_completion(FIXTURE).unwrap(), "### التفسير\nنص التفسير");
    }

    #[test]
    fn empty_choices_are_malformed() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, OracleError::MalformedResponse(_)));
    }

    #[test]
    fn null_content_is_malformed() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(matches!(
            parse_completion(body),
            Err(OracleError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            parse_completion("<html>bad gateway</html>"),
            Err(OracleError::MalformedResponse(_))
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            temperature: 0.5,
            max_tokens: 100,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "usr");
        assert_eq!(value["max_tokens"], 100);
    }

    #[test]
    fn client_uses_config_url() {
        let config = OracleConfig {
            base_url: "http://127.0.0.1:1/v1".into(),
            ..OracleConfig::default()
        };
        let client = ChatCompletionClient::new(&config).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:1/v1/chat/completions");
    }
}
