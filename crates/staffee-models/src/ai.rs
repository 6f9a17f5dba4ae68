//! AI-assisted content generation. Generation itself happens in the
//! backend; these are the prompt and result shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionPrompt {
    #[validate(length(min = 1, max = 200, message = "Job title is required"))]
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPrompt {
    #[validate(length(min = 1, max = 200, message = "Topic is required"))]
    pub topic: String,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedContent {
    pub content: String,
}
