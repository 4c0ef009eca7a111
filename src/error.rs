use thiserror::Error;

// Running out of poll attempts is GenerationOutcome::TimedOut, not an error.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Image provider credentials are not configured (set YANDEX_CLOUD_ID and either YANDEX_API_KEY or YANDEX_IAM_TOKEN)")]
    MissingCredentials,

    #[error("Image provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Image generation failed: {0}")]
    OperationFailed(String),

    #[error("Unexpected response from image provider: {0}")]
    MalformedResponse(String),

    #[error("Request to image provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to store generated image: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    pub fn is_upstream(&self) -> bool {
        matches!(self, GenerationError::Upstream { .. })
    }
}
