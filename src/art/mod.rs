#[cfg(test)]
pub(crate) mod mock_provider;
mod prompt;
pub mod styles;

pub use prompt::build_prompt;

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine};
use log::{debug, info, warn};
use reqwest::{header::AUTHORIZATION, Client};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use uuid::Uuid;

use crate::config::{Credentials, ProviderConfig};
use crate::error::GenerationError;

const CREATE_PATH: &str = "/foundationModels/v1/imageGenerationAsync";
const OPERATIONS_PATH: &str = "/operations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Wide,
    ];

    // Unknown keys become `1:1`.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "4:3" => AspectRatio::Landscape,
            "3:4" => AspectRatio::Portrait,
            "16:9" => AspectRatio::Wide,
            _ => AspectRatio::Square,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Wide => "16:9",
        }
    }

    // `(widthRatio, heightRatio)` as sent to the provider.
    pub fn tokens(self) -> (&'static str, &'static str) {
        match self {
            AspectRatio::Square => ("1", "1"),
            AspectRatio::Landscape => ("4", "3"),
            AspectRatio::Portrait => ("3", "4"),
            AspectRatio::Wide => ("16", "9"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Saved { filename: String },
    TimedOut,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequest<'a> {
    model_uri: String,
    generation_options: GenerationOptions,
    messages: [PromptMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
    aspect_ratio: RatioTokens,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RatioTokens {
    width_ratio: &'static str,
    height_ratio: &'static str,
}

#[derive(Debug, Serialize)]
struct PromptMessage<'a> {
    weight: &'static str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct Operation {
    id: Option<String>,
    #[serde(default)]
    done: bool,
    response: Option<OperationResponse>,
    error: Option<OperationError>,
}

#[derive(Debug, Deserialize)]
struct OperationResponse {
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct ArtClient {
    client: Client,
    config: ProviderConfig,
    output_dir: PathBuf,
}

impl ArtClient {
    pub fn new(config: ProviderConfig, output_dir: impl Into<PathBuf>) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        let output_dir = output_dir.into();

        info!("Using image provider at: {}", config.api_base);
        if config.credentials.is_none() {
            warn!("Image provider credentials are not set; generation requests will be rejected");
        }

        Ok(Self {
            client,
            config,
            output_dir,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.config.credentials.is_some()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    // Submits the prompt, polls the operation until it is done or the poll budget runs
    // out, and stores the image.
    pub async fn generate(
        &self,
        prompt: &str,
        seed: Option<i64>,
        ratio: AspectRatio,
    ) -> Result<GenerationOutcome, GenerationError> {
        let credentials = self
            .config
            .credentials
            .as_ref()
            .ok_or(GenerationError::MissingCredentials)?;

        let operation_id = self.start(credentials, prompt, seed, ratio).await?;
        info!("Image generation started, operation {}", operation_id);

        let poll = self.config.poll;
        for attempt in 1..=poll.attempts {
            sleep(poll.interval).await;

            let operation = self.fetch_operation(credentials, &operation_id).await?;
            if !operation.done {
                debug!("Operation {} not done yet (attempt {}/{})", operation_id, attempt, poll.attempts);
                continue;
            }

            if let Some(error) = operation.error {
                return Err(GenerationError::OperationFailed(format!(
                    "{} (code {})",
                    error.message, error.code
                )));
            }

            let image = operation
                .response
                .and_then(|response| response.image)
                .ok_or_else(|| {
                    GenerationError::MalformedResponse(format!(
                        "operation {} finished without an image",
                        operation_id
                    ))
                })?;

            let filename = self.store_image(&image).await?;
            info!("Operation {} done after {} poll(s), saved {}", operation_id, attempt, filename);
            return Ok(GenerationOutcome::Saved { filename });
        }

        warn!("Operation {} still running after {} polls, giving up", operation_id, poll.attempts);
        Ok(GenerationOutcome::TimedOut)
    }

    async fn start(
        &self,
        credentials: &Credentials,
        prompt: &str,
        seed: Option<i64>,
        ratio: AspectRatio,
    ) -> Result<String, GenerationError> {
        let (width_ratio, height_ratio) = ratio.tokens();
        let payload = CreateRequest {
            model_uri: format!("art://{}/yandex-art/latest", credentials.folder_id),
            generation_options: GenerationOptions {
                seed,
                aspect_ratio: RatioTokens {
                    width_ratio,
                    height_ratio,
                },
            },
            messages: [PromptMessage {
                weight: "1",
                text: prompt,
            }],
        };
        debug!("Create payload: {:?}", payload);

        let url = format!("{}{}", self.config.api_base, CREATE_PATH);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, credentials.auth.header_value())
            .json(&payload)
            .send()
            .await?;

        let body = success_body(response).await?;
        let operation: Operation = parse_operation(&body)?;
        operation
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GenerationError::MalformedResponse(format!("no operation id in: {}", body)))
    }

    async fn fetch_operation(
        &self,
        credentials: &Credentials,
        operation_id: &str,
    ) -> Result<Operation, GenerationError> {
        let url = format!("{}{}/{}", self.config.api_base, OPERATIONS_PATH, operation_id);
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, credentials.auth.header_value())
            .send()
            .await?;

        let body = success_body(response).await?;
        parse_operation(&body)
    }

    // Decodes a base64 image and writes it under a fresh random name.
    pub async fn store_image(&self, encoded: &str) -> Result<String, GenerationError> {
        let bytes = general_purpose::STANDARD.decode(encoded.trim())?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let filename = format!("{}.jpeg", Uuid::new_v4().simple());
        tokio::fs::write(self.output_dir.join(&filename), &bytes).await?;

        debug!("Wrote {} bytes to {}", bytes.len(), filename);
        Ok(filename)
    }
}

async fn success_body(response: reqwest::Response) -> Result<String, GenerationError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(GenerationError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

fn parse_operation(body: &str) -> Result<Operation, GenerationError> {
    serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}
