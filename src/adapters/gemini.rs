use crate::adapters::{prompts, schema};
use crate::core::{ArticleConfig, ConfigProvider, ContentGenerator, GeneratedArticle, Video};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Returned in place of a transcription when the model answers with no text.
pub const TRANSCRIPTION_FAILURE_SENTINEL: &str = "Error generating transcription.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined in order.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// `ContentGenerator` backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    site_name: String,
    language: String,
    result_count: usize,
}

impl GeminiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_key = config.api_key();
        let api_key = validate_required_field("gemini.api_key", &api_key)?;
        validate_non_empty_string("gemini.api_key", api_key)?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            api_base: config.api_base().trim_end_matches('/').to_string(),
            model: config.model().to_string(),
            site_name: config.site_name().to_string(),
            language: config.language().to_string(),
            result_count: config.result_count(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }

    async fn generate(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> Result<Option<String>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        };

        let endpoint = self.endpoint();
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        Ok(payload.text())
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn search_videos(&self, query: &str) -> Result<Vec<Video>> {
        let prompt = prompts::search_prompt(query, self.result_count);
        let text = self
            .generate(prompt, Some(schema::video_list_schema()))
            .await?
            .unwrap_or_default();

        match serde_json::from_str::<Vec<Video>>(&text) {
            Ok(videos) => Ok(videos),
            Err(e) => {
                tracing::warn!("Error parsing search response: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn generate_transcription(&self, video: &Video) -> Result<String> {
        let prompt = prompts::transcription_prompt(video, &self.language);
        let text = self.generate(prompt, None).await?;
        Ok(text.unwrap_or_else(|| TRANSCRIPTION_FAILURE_SENTINEL.to_string()))
    }

    async fn generate_article(
        &self,
        video: &Video,
        config: &ArticleConfig,
    ) -> Result<GeneratedArticle> {
        let prompt = prompts::article_prompt(video, config, &self.site_name, &self.language);
        let text = self
            .generate(prompt, Some(schema::article_schema()))
            .await?
            .ok_or(AppError::MalformedArticle)?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("Error parsing article response: {}", e);
            AppError::MalformedArticle
        })
    }
}
