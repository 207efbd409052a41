//! LinkedIn share intent.
//!
//! Posting through the API needs elevated partner permissions, so sharing opens
//! LinkedIn's own pre-filled composer and the user confirms there. Success here
//! only means the dialog opened.

const SHARE_BASE_URL: &str = "https://www.linkedin.com/feed/?shareActive=true&text=";
const POPUP_FEATURES: &str = "width=600,height=600";

pub(crate) fn share_intent_url(content: &str) -> String {
    format!("{SHARE_BASE_URL}{}", urlencoding::encode(content))
}

pub(crate) fn share_post_to_linkedin(content: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window object".to_string())?;
    match window.open_with_url_and_target_and_features(
        &share_intent_url(content),
        "_blank",
        POPUP_FEATURES,
    ) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("Popup blocked. Allow popups to share on LinkedIn.".to_string()),
        Err(e) => Err(format!("Failed to open LinkedIn: {e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_intent_url_encodes_text() {
        let url = share_intent_url("Hello world & friends\n#rust");
        assert_eq!(
            url,
            "https://www.linkedin.com/feed/?shareActive=true&text=Hello%20world%20%26%20friends%0A%23rust"
        );
    }

    #[test]
    fn test_share_intent_url_empty() {
        assert_eq!(share_intent_url(""), SHARE_BASE_URL);
    }
}
