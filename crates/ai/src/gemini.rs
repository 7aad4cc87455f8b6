//! HTTP gateway for Google's generative language API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::recommendation::RecommendationError;
use crate::request::RecommendationRequest;
use crate::service::RecommendationGateway;

/// Calls `generateContent` with a JSON response schema and hands back the
/// model's JSON answer unvalidated.
#[derive(Debug, Clone)]
pub struct GenerativeGateway {
    client: Client,
    config: GatewayConfig,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerativeGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn body(request: &RecommendationRequest) -> JsonValue {
        json!({
            "contents": [{ "parts": [{ "text": request.prompt() }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        })
    }
}

fn response_schema() -> JsonValue {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "sku": { "type": "STRING" },
                "productName": { "type": "STRING" },
                "currentStock": { "type": "INTEGER" },
                "recommendation": {
                    "type": "STRING",
                    "description": "A brief justification for the recommendation."
                },
                "suggestedRestockQuantity": { "type": "INTEGER" }
            },
            "required": [
                "sku",
                "productName",
                "currentStock",
                "recommendation",
                "suggestedRestockQuantity"
            ]
        }
    })
}

/// Concatenated text parts of the first candidate.
fn answer_text(resp: GenerateResponse) -> Option<String> {
    let content = resp.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

#[async_trait]
impl RecommendationGateway for GenerativeGateway {
    async fn generate(
        &self,
        request: &RecommendationRequest,
    ) -> Result<JsonValue, RecommendationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RecommendationError::MissingApiKey)?;

        let url = self.config.generate_url();
        debug!(%url, model = %self.config.model, "calling generative API");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::body(request))
            .send()
            .await
            .map_err(|e| RecommendationError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RecommendationError::Api {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let envelope: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))?;

        let text = answer_text(envelope).ok_or_else(|| {
            RecommendationError::MalformedResponse("response carried no text".to_string())
        })?;

        serde_json::from_str(text.trim())
            .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))
    }
}
