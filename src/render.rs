//! Message rendering: template substitution, truncation and permalinks.

use crate::config::NotifierConfig;
use crate::event::LogEvent;

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "<strong>{level}</strong> {message}";

/// Hard cap on the templated message body, in characters.
const MAX_MESSAGE_CHARS: usize = 1000;

/// Format of the `{time}` placeholder: 12-hour clock, UTC, no meridiem
/// marker.
const TIME_FORMAT: &str = "%Y-%m-%d %I:%M:%S";

/// Render the final notification text for one event.
///
/// `{level}`, `{message}` and `{time}` are substituted by literal
/// find-and-replace, in that order, one pass each over the whole
/// string. Placeholder tokens appearing inside the event's own message
/// text are therefore substituted too; that matches the established
/// behavior and stays (see the quirk test below).
///
/// The body is hard-cut at 1000 characters with no ellipsis. The
/// permalink block (when `base_url` is set) is appended afterwards, so
/// the total length may exceed the cap.
pub fn render_message(config: &NotifierConfig, event: &LogEvent) -> String {
    let template = match config.message_template.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => DEFAULT_TEMPLATE,
    };

    let body = template
        .replace("{level}", event.level.as_str())
        .replace("{message}", &event.rendered_message)
        .replace("{time}", &event.timestamp.format(TIME_FORMAT).to_string());

    let mut msg = truncate_chars(&body, MAX_MESSAGE_CHARS);

    if let Some(base_url) = config.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
        msg.push('\n');
        msg.push_str(&format!(
            "<a href=\"{}/#/events?filter=@Id%20%3D%3D%20%22{}%22&show=expanded\">Click here to open in Seq</a>",
            base_url, event.id
        ));
        msg.push('\n');
    }

    msg
}

/// Cut `s` to at most `max` characters, never splitting a code point.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Level;
    use chrono::{TimeZone, Utc};

    fn config() -> NotifierConfig {
        NotifierConfig::new("token", "42")
    }

    #[test]
    fn test_default_template() {
        let event = LogEvent::new("event-1", Level::Warning, "hello");
        assert_eq!(
            render_message(&config(), &event),
            "<strong>Warning</strong> hello"
        );
    }

    #[test]
    fn test_blank_template_uses_default() {
        let mut config = config();
        config.message_template = Some("   ".to_string());
        let event = LogEvent::new("event-1", Level::Warning, "hello");
        assert_eq!(
            render_message(&config, &event),
            "<strong>Warning</strong> hello"
        );
    }

    #[test]
    fn test_custom_template_with_time() {
        let mut config = config();
        config.message_template = Some("[{time}] {level}: {message}".to_string());
        let event = LogEvent::new("event-1", Level::Error, "disk full")
            .with_timestamp(Utc.with_ymd_and_hms(2026, 8, 25, 13, 5, 9).unwrap());
        // 12-hour clock: 13:05 renders as 01:05.
        assert_eq!(
            render_message(&config, &event),
            "[2026-08-25 01:05:09] Error: disk full"
        );
    }

    #[test]
    fn test_body_truncated_to_1000_chars() {
        let event = LogEvent::new("event-1", Level::Information, "x".repeat(2000));
        let rendered = render_message(&config(), &event);
        assert_eq!(rendered.chars().count(), 1000);
        assert!(rendered.starts_with("<strong>Information</strong> "));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let event = LogEvent::new("event-1", Level::Information, "é".repeat(2000));
        let rendered = render_message(&config(), &event);
        assert_eq!(rendered.chars().count(), 1000);
    }

    #[test]
    fn test_permalink_block_appended_after_truncation() {
        let mut config = config();
        config.base_url = Some("https://seq.example.com".to_string());
        let event = LogEvent::new("event-1", Level::Information, "x".repeat(2000));
        let rendered = render_message(&config, &event);

        // Body capped first, then the blank line and anchor line appended,
        // so the total exceeds the cap.
        assert!(rendered.chars().count() > 1000);
        let body = rendered.split('\n').next().unwrap();
        assert_eq!(body.chars().count(), 1000);
        assert!(rendered.ends_with("</a>\n"));
    }

    #[test]
    fn test_permalink_line() {
        let mut config = config();
        config.base_url = Some("https://seq.example.com".to_string());
        let event = LogEvent::new("event-42", Level::Warning, "hello");
        let rendered = render_message(&config, &event);

        assert!(rendered.contains(
            "https://seq.example.com/#/events?filter=@Id%20%3D%3D%20%22event-42%22&show=expanded"
        ));
        assert!(rendered.contains("Click here to open in Seq"));
        // Blank line between body and anchor, trailing newline after it.
        assert!(rendered.contains("hello\n<a href="));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_no_permalink_without_base_url() {
        let event = LogEvent::new("event-1", Level::Warning, "hello");
        assert!(!render_message(&config(), &event).contains("<a href="));
    }

    #[test]
    fn test_placeholder_tokens_in_message_are_substituted() {
        // Known quirk: replacement is literal find-and-replace over the
        // composed string, so a "{time}" inside the event message is
        // substituted as well.
        let event = LogEvent::new("event-1", Level::Warning, "deploy at {time}")
            .with_timestamp(Utc.with_ymd_and_hms(2026, 8, 25, 9, 30, 0).unwrap());
        assert_eq!(
            render_message(&config(), &event),
            "<strong>Warning</strong> deploy at 2026-08-25 09:30:00"
        );
    }
}
