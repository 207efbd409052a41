use super::rest::Order;
use super::{ApiClient, ApiResult};
use crate::models::{CalendarIdea, IdeaStatus, NewCalendarIdea};
use serde::Serialize;

pub(crate) const IDEAS_TABLE: &str = "calendar_ideas";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct StatusPatch {
    pub status: IdeaStatus,
}

impl ApiClient {
    /// Earliest scheduled first; undated ideas sort last (PostgREST default for `asc`).
    pub async fn list_ideas(&self) -> ApiResult<Vec<CalendarIdea>> {
        self.select_all(IDEAS_TABLE, "scheduled_date", Order::Asc)
            .await
    }

    pub async fn insert_idea(&self, idea: &NewCalendarIdea) -> ApiResult<()> {
        self.insert_rows(IDEAS_TABLE, idea).await
    }

    /// One request for the whole batch.
    pub async fn insert_ideas(&self, ideas: &[NewCalendarIdea]) -> ApiResult<()> {
        self.insert_rows(IDEAS_TABLE, ideas).await
    }

    pub async fn set_idea_status(&self, id: &str, status: IdeaStatus) -> ApiResult<()> {
        self.update_by_id(IDEAS_TABLE, id, &StatusPatch { status })
            .await
    }

    pub async fn delete_idea(&self, id: &str) -> ApiResult<()> {
        self.delete_by_id(IDEAS_TABLE, id).await
    }
}
