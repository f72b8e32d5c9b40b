use serde::{Deserialize, Serialize};

/// Form body posted by the page's "Generate Blog" button.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
