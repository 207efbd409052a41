use super::{ApiClient, ApiResult};
use crate::models::{GeneratedIdea, PostType};
use serde::{Deserialize, Serialize};

/// Prompt sent to the generation proxy for one post.
pub(crate) fn post_prompt(theme: &str, post_type: PostType) -> String {
    match post_type {
        PostType::Long => format!(
            r#"Generate a professional and engaging long-form LinkedIn post (300-500 words) about "{theme}".
    Include:
    - A compelling hook
    - Key insights or stories
    - Actionable takeaways
    - A call-to-action
    - Use line breaks for readability
    - Include relevant emojis sparingly
    Make it authentic and valuable."#
        ),
        PostType::Short => format!(
            r#"Generate a concise and impactful LinkedIn post (100-150 words) about "{theme}".
    Include:
    - A strong opening line
    - One key insight
    - A clear call-to-action
    Keep it punchy and memorable."#
        ),
        PostType::Carousel => format!(
            r#"Generate content for a LinkedIn carousel post about "{theme}".
    Provide:
    - Slide 1: Attention-grabbing title (max 10 words)
    - Slides 2-8: Key points, one per slide (max 30 words each)
    - Slide 9: Call-to-action or conclusion
    Format as: [SLIDE X] Content
    Make each slide visually scannable and impactful."#
        ),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct GeneratePostRequest {
    pub prompt: String,
    pub theme: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
}

impl GeneratePostRequest {
    pub fn new(theme: &str, post_type: PostType) -> Self {
        Self {
            prompt: post_prompt(theme, post_type),
            theme: theme.to_string(),
            post_type,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
struct GeneratePostResponse {
    content: String,
}

#[derive(Deserialize, Clone, Debug)]
struct GenerateIdeasResponse {
    #[serde(default)]
    ideas: Vec<GeneratedIdea>,
}

impl ApiClient {
    /// Returns the proxy's `content` verbatim.
    pub async fn generate_linkedin_post(
        &self,
        theme: &str,
        post_type: PostType,
    ) -> ApiResult<String> {
        let req = reqwest::Client::new()
            .post(self.proxy_url("/api/generate"))
            .json(&GeneratePostRequest::new(theme, post_type));

        let res: GeneratePostResponse = Self::execute(req, "Failed to generate post").await?;
        Ok(res.content)
    }

    pub async fn generate_calendar_ideas(&self) -> ApiResult<Vec<GeneratedIdea>> {
        let req = reqwest::Client::new()
            .post(self.proxy_url("/api/generate-ideas"))
            .header("Content-Type", "application/json");

        let res: GenerateIdeasResponse = Self::execute(req, "Failed to generate ideas").await?;
        Ok(res.ideas)
    }
}
