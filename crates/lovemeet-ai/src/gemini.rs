use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::AiError;
use crate::{GenerateRequest, TextModel};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Google Gemini `generateContent` over REST.
///
/// No overall request timeout is set; a stalled call waits on the
/// transport. There is no retry.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            config: GeminiConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

pub(crate) fn build_request_body(request: &GenerateRequest) -> Value {
    let mut body = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }],
    });

    body["generationConfig"] = match &request.response_schema {
        // Search grounding is not combined with a JSON response schema; the
        // API rejects tool use alongside responseMimeType=application/json.
        Some(schema) => json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        }),
        None => json!({
            "thinkingConfig": { "thinkingBudget": 0 }
        }),
    };

    body
}

/// Concatenated text of the first candidate. A response with no candidates
/// (e.g. a blocked prompt) yields empty text.
pub(crate) fn parse_response_text(data: &Value) -> Result<String, AiError> {
    if !data.is_object() {
        return Err(AiError::Malformed("response is not a JSON object".into()));
    }

    let Some(candidate) = data.get("candidates").and_then(|c| c.get(0)) else {
        let reason = data
            .pointer("/promptFeedback/blockReason")
            .and_then(Value::as_str)
            .unwrap_or("none given");
        warn!(reason, "Gemini returned no candidates");
        return Ok(String::new());
    };

    let parts = candidate
        .pointer("/content/parts")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let text: String = parts
        .iter()
        .filter(|p| !p.get("thought").and_then(Value::as_bool).unwrap_or(false))
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    Ok(text)
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let Some(api_key) = self.config.api_key.as_deref().filter(|k| !k.trim().is_empty())
        else {
            return Err(AiError::MissingApiKey);
        };

        let body = build_request_body(request);
        info!(
            model = %self.config.model,
            structured = request.response_schema.is_some(),
            "Calling Gemini"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(AiError::status(status.as_u16(), &text));
        }

        let data: Value =
            serde_json::from_str(&text).map_err(|e| AiError::Malformed(e.to_string()))?;
        let output = parse_response_text(&data)?;
        debug!(chars = output.chars().count(), "Gemini response received");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_disables_thinking() {
        let body = build_request_body(&GenerateRequest::text("hello"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn json_request_carries_schema() {
        let schema = json!({ "type": "ARRAY" });
        let body = build_request_body(&GenerateRequest::json("venues", schema.clone()));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn parses_text_and_skips_thoughts() {
        let data = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "planning...", "thought": true },
                        { "text": "Every sunset " },
                        { "text": "reminds me of you." }
                    ]
                },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(
            parse_response_text(&data).unwrap(),
            "Every sunset reminds me of you."
        );
    }

    #[test]
    fn blocked_prompt_is_empty_text() {
        let data = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert_eq!(parse_response_text(&data).unwrap(), "");
        assert!(matches!(
            parse_response_text(&json!([1, 2])),
            Err(AiError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: Some("  ".into()),
            base_url: "http://127.0.0.1:1/".into(),
            ..GeminiConfig::default()
        })
        .unwrap();
        assert!(!client.has_api_key());
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:1/models/gemini-3-flash-preview:generateContent"
        );

        let err = client.generate(&GenerateRequest::text("hi")).await.unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey));
    }
}
