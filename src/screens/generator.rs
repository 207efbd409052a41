use crate::api::ApiResult;
use crate::models::{NewPost, PostType};
use crate::state::Toast;

/// Generator screen state. Pages keep it in a signal and call the methods below
/// around each client call.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GeneratorState {
    pub theme: String,
    pub post_type: PostType,
    pub generated: String,
    pub generating: bool,
    pub saving: bool,
    pub copied: bool,
    /// Theme and type of the request in flight.
    requested: Option<(String, PostType)>,
    /// Theme and type `generated` was produced for. Saving uses these, not the
    /// current inputs.
    generated_for: Option<(String, PostType)>,
}

impl GeneratorState {
    /// Returns what to send, or the toast to show instead.
    pub fn begin_generate(&mut self) -> Result<(String, PostType), Toast> {
        if self.theme.trim().is_empty() {
            return Err(Toast::error("Please enter a theme for your post"));
        }
        self.generating = true;
        let request = (self.theme.clone(), self.post_type);
        self.requested = Some(request.clone());
        Ok(request)
    }

    pub fn finish_generate(&mut self, result: ApiResult<String>) -> Toast {
        self.generating = false;
        let requested = self.requested.take();
        match result {
            Ok(content) => {
                self.generated = content;
                self.generated_for = requested;
                self.copied = false;
                Toast::success("Post generated successfully!")
            }
            Err(_) => Toast::error("Failed to generate post. Please try again."),
        }
    }

    /// Copy, share and save only apply once there is output.
    pub fn has_output(&self) -> bool {
        !self.generated.is_empty()
    }

    pub fn begin_save(&mut self) -> Option<NewPost> {
        if !self.has_output() || self.saving {
            return None;
        }
        let (theme, post_type) = self.generated_for.clone()?;
        self.saving = true;
        Some(NewPost {
            content: self.generated.clone(),
            post_type,
            theme,
        })
    }

    pub fn finish_save(&mut self, result: ApiResult<()>) -> Toast {
        self.saving = false;
        match result {
            Ok(()) => Toast::success("Post saved to history!"),
            Err(_) => Toast::error("Failed to save post"),
        }
    }

    pub fn share_content(&self) -> Option<String> {
        self.has_output().then(|| self.generated.clone())
    }
}

/// The popup opening is all that can be observed.
pub(crate) fn share_toast(result: Result<(), String>) -> Toast {
    match result {
        Ok(()) => Toast::success("LinkedIn share dialog opened"),
        Err(e) if !e.is_empty() => Toast::error(e),
        Err(_) => Toast::error("Failed to share post to LinkedIn"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind, GeneratePostRequest};
    use crate::state::ToastKind;

    fn failure() -> ApiError {
        ApiError {
            kind: ApiErrorKind::Http,
            message: "Failed to generate post (500)".to_string(),
        }
    }

    #[test]
    fn test_blank_theme_is_rejected_without_request() {
        let mut state = GeneratorState {
            theme: "   ".to_string(),
            ..Default::default()
        };
        let toast = state.begin_generate().expect_err("blank theme should be rejected");
        assert_eq!(toast.message, "Please enter a theme for your post");
        assert!(!state.generating);
    }

    #[test]
    fn test_short_post_for_remote_work_enables_output_controls() {
        let mut state = GeneratorState {
            theme: "remote work".to_string(),
            ..Default::default()
        };
        assert_eq!(state.post_type, PostType::Short);
        assert!(!state.has_output());

        let (theme, post_type) = state.begin_generate().expect("should start");
        assert!(state.generating);
        let request = GeneratePostRequest::new(&theme, post_type);
        assert!(request.prompt.contains("100-150 words"));

        let toast = state.finish_generate(Ok("Remote work tip".to_string()));
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(!state.generating);
        assert!(state.has_output());
        assert!(state.share_content().is_some());
        assert!(state.begin_save().is_some());
    }

    #[test]
    fn test_failed_generation_keeps_previous_output() {
        let mut state = GeneratorState {
            theme: "x".to_string(),
            generated: "earlier".to_string(),
            ..Default::default()
        };
        state.begin_generate().expect("should start");
        let toast = state.finish_generate(Err(failure()));
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(state.generated, "earlier");
        assert!(!state.generating);
    }

    #[test]
    fn test_save_payload_and_no_double_save() {
        let mut state = GeneratorState {
            theme: "leadership".to_string(),
            post_type: PostType::Carousel,
            ..Default::default()
        };
        state.begin_generate().expect("should start");
        state.finish_generate(Ok("[SLIDE 1] Lead".to_string()));
        let payload = state.begin_save().expect("should save");
        assert_eq!(payload.post_type, PostType::Carousel);
        assert_eq!(payload.theme, "leadership");
        assert!(state.begin_save().is_none());

        state.finish_save(Ok(()));
        assert!(!state.saving);
    }

    #[test]
    fn test_nothing_to_save_or_share_without_output() {
        let mut state = GeneratorState::default();
        assert!(state.begin_save().is_none());
        assert!(state.share_content().is_none());
    }

    #[test]
    fn test_save_uses_type_and_theme_of_generated_post() {
        let mut state = GeneratorState {
            theme: "remote work".to_string(),
            ..Default::default()
        };
        state.begin_generate().expect("should start");
        // Inputs changed while the request was in flight.
        state.post_type = PostType::Long;
        state.finish_generate(Ok("Short take on remote work".to_string()));

        state.post_type = PostType::Carousel;
        state.theme = "leadership".to_string();

        let payload = state.begin_save().expect("should save");
        assert_eq!(payload.post_type, PostType::Short);
        assert_eq!(payload.theme, "remote work");
        assert_eq!(payload.content, "Short take on remote work");
    }

    #[test]
    fn test_failed_regeneration_keeps_earlier_save_target() {
        let mut state = GeneratorState {
            theme: "first".to_string(),
            ..Default::default()
        };
        state.begin_generate().expect("should start");
        state.finish_generate(Ok("first post".to_string()));

        state.theme = "second".to_string();
        state.post_type = PostType::Long;
        state.begin_generate().expect("should start");
        state.finish_generate(Err(failure()));

        let payload = state.begin_save().expect("should save");
        assert_eq!(payload.theme, "first");
        assert_eq!(payload.post_type, PostType::Short);
        assert_eq!(payload.content, "first post");
    }

    #[test]
    fn test_share_reads_output_without_touching_state() {
        let state = GeneratorState {
            theme: "x".to_string(),
            generated: "ready to post".to_string(),
            ..Default::default()
        };
        let before = state.clone();
        assert_eq!(state.share_content().as_deref(), Some("ready to post"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_share_toast_messages() {
        assert_eq!(share_toast(Ok(())).kind, ToastKind::Success);
        assert_eq!(
            share_toast(Err(String::new())).message,
            "Failed to share post to LinkedIn"
        );
        assert_eq!(share_toast(Err("Popup blocked".to_string())).message, "Popup blocked");
    }
}
