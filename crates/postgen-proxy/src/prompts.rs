//! Fixed prompts and sampling settings for each proxy endpoint.

use serde::{Deserialize, Serialize};

use crate::llm::{ChatMessage, ChatRequest};

pub const POST_SYSTEM_PROMPT: &str = "You are an expert LinkedIn content creator who writes authentic, engaging professional posts. Follow the requested format and length exactly and return only the post text.";
pub const POST_TEMPERATURE: f32 = 0.8;
pub const POST_MAX_TOKENS: u32 = 1000;

pub const IDEAS_SYSTEM_PROMPT: &str = "You are an expert LinkedIn content strategist who creates engaging content ideas across various professional topics.";
pub const IDEAS_USER_PROMPT: &str = r#"Generate 10 compelling LinkedIn content ideas for the next 2 weeks. Include diverse topics like:
- Leadership insights
- Industry trends
- Personal growth
- Team collaboration
- Innovation
- Career development

Return ONLY a valid JSON array with this exact structure:
[
  {
    "title": "Short catchy title",
    "description": "Brief description of the content idea (2-3 sentences)",
    "category": "One of: Leadership, Career, Innovation, Industry, Personal"
  }
]

Return only the JSON array, no additional text."#;
pub const IDEAS_TEMPERATURE: f32 = 0.9;
pub const IDEAS_MAX_TOKENS: u32 = 1500;

/// One idea as returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIdea {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

pub fn post_request(model: &str, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(POST_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ],
        temperature: POST_TEMPERATURE,
        max_tokens: POST_MAX_TOKENS,
    }
}

pub fn ideas_request(model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(IDEAS_SYSTEM_PROMPT),
            ChatMessage::user(IDEAS_USER_PROMPT),
        ],
        temperature: IDEAS_TEMPERATURE,
        max_tokens: IDEAS_MAX_TOKENS,
    }
}

/// The model is told to answer with a bare JSON array; anything else is an error.
pub fn parse_ideas(text: &str) -> Result<Vec<GeneratedIdea>, serde_json::Error> {
    serde_json::from_str(text.trim())
}
