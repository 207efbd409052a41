use crate::api::ApiResult;
use crate::models::{CalendarIdea, GeneratedIdea, IdeaCategory, IdeaStatus, NewCalendarIdea};
use crate::state::Toast;
use crate::util::parse_input_date;
use chrono::{Days, NaiveDate};

/// Status buckets rendered by the calendar, in display order. Other statuses are not shown.
pub(crate) const VISIBLE_STATUSES: [IdeaStatus; 2] = [IdeaStatus::Pending, IdeaStatus::Completed];

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IdeaGroup {
    pub status: IdeaStatus,
    pub ideas: Vec<CalendarIdea>,
}

impl IdeaGroup {
    pub fn count_label(&self) -> String {
        format!("({})", self.ideas.len())
    }
}

/// Group by status in [`VISIBLE_STATUSES`] order, keeping list order inside a
/// group and dropping empty groups.
pub(crate) fn group_by_status(ideas: &[CalendarIdea]) -> Vec<IdeaGroup> {
    VISIBLE_STATUSES
        .iter()
        .map(|status| IdeaGroup {
            status: *status,
            ideas: ideas.iter().filter(|i| i.status == *status).cloned().collect(),
        })
        .filter(|g| !g.ideas.is_empty())
        .collect()
}

/// Give the n-th generated idea the date `today + n + 1` days.
pub(crate) fn schedule_generated_ideas(
    ideas: Vec<GeneratedIdea>,
    today: NaiveDate,
) -> Vec<NewCalendarIdea> {
    ideas
        .into_iter()
        .enumerate()
        .map(|(index, idea)| NewCalendarIdea {
            title: idea.title,
            description: Some(idea.description).filter(|d| !d.is_empty()),
            category: Some(idea.category).filter(|c| !c.is_empty()),
            scheduled_date: today.checked_add_days(Days::new(index as u64 + 1)),
            status: IdeaStatus::Pending,
        })
        .collect()
}

/// Form state of the "add idea" dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    /// Raw `<input type="date">` value.
    pub scheduled_date: String,
}

impl IdeaDraft {
    pub fn to_new_idea(&self) -> Result<NewCalendarIdea, Toast> {
        if self.title.trim().is_empty() {
            return Err(Toast::error("Please enter a title"));
        }
        let scheduled_date = parse_input_date(&self.scheduled_date)
            .map_err(|_| Toast::error("Please enter a valid date"))?;

        Ok(NewCalendarIdea {
            title: self.title.clone(),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
            category: Some(self.category.to_string()),
            scheduled_date,
            status: IdeaStatus::Pending,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalendarState {
    pub ideas: Vec<CalendarIdea>,
    pub loading: bool,
    pub generating: bool,
    pub dialog_open: bool,
    pub draft: IdeaDraft,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self {
            ideas: vec![],
            loading: true,
            generating: false,
            dialog_open: false,
            draft: IdeaDraft::default(),
        }
    }
}

impl CalendarState {
    pub fn finish_load(&mut self, result: ApiResult<Vec<CalendarIdea>>) -> Option<Toast> {
        self.loading = false;
        match result {
            Ok(ideas) => {
                self.ideas = ideas;
                None
            }
            Err(_) => Some(Toast::error("Failed to load ideas")),
        }
    }

    pub fn groups(&self) -> Vec<IdeaGroup> {
        group_by_status(&self.ideas)
    }

    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.ideas.is_empty()
    }

    pub fn open_dialog(&mut self) {
        self.draft = IdeaDraft::default();
        self.dialog_open = true;
    }

    /// Called after the insert and the refetch that follows it.
    pub fn finish_add(&mut self, result: ApiResult<()>) -> Toast {
        match result {
            Ok(()) => {
                self.dialog_open = false;
                self.draft = IdeaDraft::default();
                Toast::success("Idea added!")
            }
            Err(_) => Toast::error("Failed to add idea"),
        }
    }

    pub fn finish_generate(&mut self, result: ApiResult<usize>) -> Toast {
        self.generating = false;
        match result {
            Ok(n) => Toast::success(format!("Generated {n} new content ideas!")),
            Err(_) => Toast::error("Failed to generate ideas"),
        }
    }

    /// New status for `id`, if the idea is listed.
    pub fn status_target(&self, id: &str) -> Option<IdeaStatus> {
        self.ideas
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.status.toggled())
    }

    pub fn finish_status(&mut self, id: &str, status: IdeaStatus, result: ApiResult<()>) -> Option<Toast> {
        match result {
            Ok(()) => {
                for idea in self.ideas.iter_mut().filter(|i| i.id == id) {
                    idea.status = status;
                }
                None
            }
            Err(_) => Some(Toast::error("Failed to update status")),
        }
    }

    pub fn finish_delete(&mut self, id: &str, result: ApiResult<()>) -> Toast {
        match result {
            Ok(()) => {
                self.ideas.retain(|i| i.id != id);
                Toast::success("Idea deleted")
            }
            Err(_) => Toast::error("Failed to delete idea"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind};
    use crate::state::ToastKind;

    fn idea(id: &str, status: IdeaStatus) -> CalendarIdea {
        CalendarIdea {
            id: id.to_string(),
            user_id: None,
            title: format!("idea {id}"),
            description: None,
            scheduled_date: None,
            status,
            category: None,
            created_at: "x".to_string(),
            updated_at: "x".to_string(),
        }
    }

    fn generated(n: usize) -> Vec<GeneratedIdea> {
        (0..n)
            .map(|i| GeneratedIdea {
                title: format!("t{i}"),
                description: format!("d{i}"),
                category: "Innovation".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_ten_ideas_scheduled_on_consecutive_days_from_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 28).expect("valid date");
        let scheduled = schedule_generated_ideas(generated(10), today);
        assert_eq!(scheduled.len(), 10);

        let dates: Vec<NaiveDate> = scheduled
            .iter()
            .map(|i| i.scheduled_date.expect("every idea gets a date"))
            .collect();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 12, 29).expect("valid date"));
        assert_eq!(dates[9], NaiveDate::from_ymd_opt(2027, 1, 7).expect("valid date"));
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
        for (i, idea) in scheduled.iter().enumerate() {
            assert_eq!(idea.title, format!("t{i}"));
            assert_eq!(idea.status, IdeaStatus::Pending);
        }
    }

    #[test]
    fn test_manual_add_q1_planning() {
        let draft = IdeaDraft {
            title: "Q1 Planning".to_string(),
            description: String::new(),
            category: IdeaCategory::Career,
            scheduled_date: String::new(),
        };
        let row = draft.to_new_idea().expect("valid draft");
        assert_eq!(row.status, IdeaStatus::Pending);
        assert!(row.description.is_none());
        assert!(row.scheduled_date.is_none());
        assert_eq!(row.category.as_deref(), Some("Career"));

        let v = serde_json::to_value(&row).expect("should serialize");
        assert_eq!(v["status"], "pending");
        assert!(v["description"].is_null());
        assert!(v["scheduled_date"].is_null());

        // What the refetch returns for that row.
        let mut stored = idea("q1", IdeaStatus::Pending);
        stored.title = row.title.clone();
        stored.category = row.category.clone();
        let groups = group_by_status(&[stored]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].status, IdeaStatus::Pending);
        assert_eq!(groups[0].count_label(), "(1)");
    }

    #[test]
    fn test_draft_requires_title_and_valid_date() {
        let toast = IdeaDraft::default().to_new_idea().expect_err("no title");
        assert_eq!(toast.message, "Please enter a title");

        let draft = IdeaDraft {
            title: "x".to_string(),
            scheduled_date: "tomorrow".to_string(),
            ..Default::default()
        };
        assert!(draft.to_new_idea().is_err());

        assert_eq!(IdeaDraft::default().category, IdeaCategory::Personal);
    }

    #[test]
    fn test_grouping_order_and_archived_hidden() {
        let ideas = vec![
            idea("1", IdeaStatus::Completed),
            idea("2", IdeaStatus::Archived),
            idea("3", IdeaStatus::Pending),
            idea("4", IdeaStatus::Pending),
        ];
        let groups = group_by_status(&ideas);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].status, IdeaStatus::Pending);
        assert_eq!(
            groups[0].ideas.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["3", "4"]
        );
        assert_eq!(groups[1].status, IdeaStatus::Completed);
        assert!(groups.iter().all(|g| g.status != IdeaStatus::Archived));

        let only_completed = group_by_status(&[idea("1", IdeaStatus::Completed)]);
        assert_eq!(only_completed.len(), 1);
        assert_eq!(only_completed[0].status, IdeaStatus::Completed);
    }

    #[test]
    fn test_status_toggle_twice_returns_to_pending() {
        let mut state = CalendarState::default();
        state.finish_load(Ok(vec![idea("a", IdeaStatus::Pending)]));

        let next = state.status_target("a").expect("listed");
        assert!(state.finish_status("a", next, Ok(())).is_none());
        assert_eq!(state.ideas[0].status, IdeaStatus::Completed);

        let next = state.status_target("a").expect("listed");
        state.finish_status("a", next, Ok(()));
        assert_eq!(state.ideas[0].status, IdeaStatus::Pending);
    }

    #[test]
    fn test_delete_unknown_idea_is_noop() {
        let mut state = CalendarState::default();
        state.finish_load(Ok(vec![idea("a", IdeaStatus::Pending)]));
        let before = state.ideas.clone();
        state.finish_delete("missing", Ok(()));
        assert_eq!(state.ideas, before);
    }

    #[test]
    fn test_failed_add_keeps_dialog_open() {
        let mut state = CalendarState::default();
        state.open_dialog();
        state.draft.title = "keep me".to_string();
        let toast = state.finish_add(Err(ApiError {
            kind: ApiErrorKind::Backend,
            message: "nope".to_string(),
        }));
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(state.dialog_open);
        assert_eq!(state.draft.title, "keep me");

        state.finish_add(Ok(()));
        assert!(!state.dialog_open);
        assert!(state.draft.title.is_empty());
    }
}
