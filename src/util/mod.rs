use chrono::NaiveDate;
use wasm_bindgen_futures::JsFuture;

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

pub(crate) fn now_secs() -> i64 {
    now_ms() / 1000
}

/// Today's calendar date in UTC (browser clock).
pub(crate) fn today_utc() -> NaiveDate {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        d.get_utc_full_year() as i32,
        d.get_utc_month() + 1,
        d.get_utc_date(),
    )
    .unwrap_or_default()
}

/// `Oct 20, 2026`, or "No date".
pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "No date".to_string(),
    }
}

/// Date part of a backend timestamp, formatted like [`format_date`]. Unparseable
/// values are shown as-is.
pub(crate) fn format_timestamp(ts: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(ts)
        .map(|d| format_date(Some(d.date_naive())))
        .unwrap_or_else(|_| ts.to_string())
}

/// Parse an `<input type="date">` value; blank means no date.
pub(crate) fn parse_input_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map(Some)
}

pub(crate) async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window object".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

/// Run `f` once after `ms` milliseconds.
pub(crate) fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;

    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(f)
                .as_ref()
                .unchecked_ref(),
            ms,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2026-10-19T08:15:00.123456+00:00"), "Oct 19, 2026");
        assert_eq!(format_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2026, 10, 20)), "Oct 20, 2026");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2027, 1, 5)), "Jan 5, 2027");
        assert_eq!(format_date(None), "No date");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("").ok(), Some(None));
        assert_eq!(parse_input_date("  ").ok(), Some(None));
        assert_eq!(
            parse_input_date("2026-11-02").ok(),
            Some(NaiveDate::from_ymd_opt(2026, 11, 2))
        );
        assert!(parse_input_date("11/02/2026").is_err());
    }
}
