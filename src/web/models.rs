use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub ratio: Option<String>,
    pub seed: Option<SeedInput>,
}

// Seeds arrive either as JSON numbers or as strings typed into a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedInput {
    Number(i64),
    Text(String),
}

impl SeedInput {
    // `0` and blank strings mean "no seed".
    pub fn resolve(&self) -> Result<Option<i64>, String> {
        let seed = match self {
            SeedInput::Number(n) => *n,
            SeedInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<i64>()
                    .map_err(|_| format!("Seed must be an integer, got {:?}", text))?
            }
        };
        Ok(if seed == 0 { None } else { Some(seed) })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_used: Option<String>,
}

impl GenerateResponse {
    pub fn saved(filename: String, prompt_used: String) -> Self {
        Self {
            success: true,
            filename: Some(filename),
            error: None,
            prompt_used: Some(prompt_used),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt_used: String) -> Self {
        self.prompt_used = Some(prompt_used);
        self
    }
}
