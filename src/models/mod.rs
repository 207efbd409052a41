use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Length/format of a generated post.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum PostType {
    #[default]
    Short,
    Long,
    Carousel,
}

impl PostType {
    /// Display order of the type picker.
    pub const ALL: [PostType; 3] = [PostType::Short, PostType::Long, PostType::Carousel];

    pub fn label(self) -> &'static str {
        match self {
            PostType::Short => "Short Post",
            PostType::Long => "Long Post",
            PostType::Carousel => "Carousel",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            PostType::Short => "100-150 words",
            PostType::Long => "300-500 words",
            PostType::Carousel => "9 slides",
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum IdeaStatus {
    #[default]
    Pending,
    Completed,
    /// Stored by the schema, never set from the dashboard.
    Archived,
}

impl IdeaStatus {
    /// Anything that is not pending flips back to pending.
    pub fn toggled(self) -> Self {
        match self {
            IdeaStatus::Pending => IdeaStatus::Completed,
            IdeaStatus::Completed | IdeaStatus::Archived => IdeaStatus::Pending,
        }
    }
}

/// The fixed category labels offered by the idea picker.
///
/// The column itself is free text, so ideas keep their raw `category` string and
/// this enum is only used for lookups and the picker.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
pub(crate) enum IdeaCategory {
    Leadership,
    Career,
    Innovation,
    Industry,
    #[default]
    Personal,
}

pub(crate) const UNKNOWN_CATEGORY_BADGE: &str = "bg-gray-100 text-gray-700 border-gray-200";

impl IdeaCategory {
    pub const ALL: [IdeaCategory; 5] = [
        IdeaCategory::Leadership,
        IdeaCategory::Career,
        IdeaCategory::Innovation,
        IdeaCategory::Industry,
        IdeaCategory::Personal,
    ];

    pub fn badge_class(self) -> &'static str {
        match self {
            IdeaCategory::Leadership => "bg-blue-100 text-blue-700 border-blue-200",
            IdeaCategory::Career => "bg-green-100 text-green-700 border-green-200",
            IdeaCategory::Innovation => "bg-purple-100 text-purple-700 border-purple-200",
            IdeaCategory::Industry => "bg-orange-100 text-orange-700 border-orange-200",
            IdeaCategory::Personal => "bg-pink-100 text-pink-700 border-pink-200",
        }
    }
}

/// Badge classes for a raw category string; unrecognized labels get the gray badge.
pub(crate) fn category_badge_class(category: &str) -> &'static str {
    IdeaCategory::from_str(category)
        .map(IdeaCategory::badge_class)
        .unwrap_or(UNKNOWN_CATEGORY_BADGE)
}

/// Row of the `posts` table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Post {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    #[serde(default)]
    pub theme: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Insert payload for `posts`. Everything else is filled in by column defaults.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct NewPost {
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub theme: String,
}

/// Row of the `calendar_ideas` table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct CalendarIdea {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    pub status: IdeaStatus,
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload for `calendar_ideas`.
///
/// Optional fields serialize as `null` so a bulk insert always sends the same keys.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct NewCalendarIdea {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub status: IdeaStatus,
}

/// One idea as returned by the ideas proxy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct GeneratedIdea {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// Supabase auth user object. Only the fields the dashboard reads are typed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl User {
    /// Name from the OIDC profile, falling back to the email.
    pub fn display_name(&self) -> Option<String> {
        self.user_metadata
            .get("full_name")
            .or_else(|| self.user_metadata.get("name"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .or_else(|| self.email.clone())
    }

    pub fn initial(&self) -> String {
        self.display_name()
            .and_then(|n| n.trim().chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Session returned by the auth token endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

/// Sessions are treated as expired slightly early so a request does not race the deadline.
const EXPIRY_MARGIN_SECS: i64 = 10;

impl Session {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        match self.expires_at {
            Some(at) => at <= now_secs + EXPIRY_MARGIN_SECS,
            None => false,
        }
    }

    /// The token endpoint may omit `expires_at`; derive it from `expires_in`.
    pub fn with_expiry_from(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() && self.expires_in > 0 {
            self.expires_at = Some(now_secs + self.expires_in);
        }
        self
    }
}
