use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LlmConfig, entities::app_errors::CoreError},
    generation::ports::LlmClient,
};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
// Conservative bound; an expired call is reported as an upstream failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const VISION_MAX_TOKENS: u32 = 300;

const GENERATION_SYSTEM_PROMPT: &str = "You are 'Ide.Chef', a creative and \
    reliable AI chef assistant. You turn whatever ingredients the user has \
    on hand into simple, delicious recipes.";

#[derive(Debug, Clone)]
pub struct OpenAiLlmClient {
    api_key: String,
    generation_model: String,
    vision_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenAiLlmClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            api_key: config.openai_api_key,
            generation_model: config.generation_model,
            vision_model: config.vision_model,
            client,
        }
    }

    async fn call_chat_api(&self, request: ChatRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }

    fn generation_request(&self, prompt: String) -> ChatRequest {
        ChatRequest {
            model: self.generation_model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(GENERATION_SYSTEM_PROMPT.to_string()),
                },
                Message {
                    role: "user",
                    content: MessageContent::Text(prompt),
                },
            ],
            max_tokens: None,
        }
    }

    fn vision_request(&self, prompt: String, image_data_url: String) -> ChatRequest {
        ChatRequest {
            model: self.vision_model.clone(),
            messages: vec![Message {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_url,
                        },
                    },
                ]),
            }],
            max_tokens: Some(VISION_MAX_TOKENS),
        }
    }
}

impl LlmClient for OpenAiLlmClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        self.call_chat_api(self.generation_request(prompt)).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image_data_url: String,
    ) -> Result<String, CoreError> {
        self.call_chat_api(self.vision_request(prompt, image_data_url))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenAiLlmClient {
        OpenAiLlmClient::new(LlmConfig {
            openai_api_key: "test-key".to_string(),
            generation_model: "gpt-4o-mini".to_string(),
            vision_model: "gpt-4o".to_string(),
        })
    }

    #[test]
    fn generation_request_opens_with_the_persona_system_message() {
        let request = client().generation_request("make soup".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert!(
            value["messages"][0]["content"]
                .as_str()
                .unwrap()
                .contains("Ide.Chef")
        );
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "make soup");
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn vision_request_caps_tokens_and_embeds_the_image() {
        let request = client().vision_request(
            "list ingredients".to_string(),
            "data:image/jpeg;base64,aGk=".to_string(),
        );
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["max_tokens"], 300);
        let parts = value["messages"][0]["content"].as_array().unwrap();
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/jpeg;base64,aGk=");
    }
}
