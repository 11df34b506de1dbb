//! Background color selection for notifications.

use crate::event::Level;

/// Fixed level-to-color map. Total over [`Level`]: every variant has an
/// entry, so lookup never fails for a valid level.
pub fn level_color(level: Level) -> &'static str {
    match level {
        Level::Verbose | Level::Debug => "gray",
        Level::Information => "green",
        Level::Warning => "yellow",
        Level::Error | Level::Fatal => "red",
    }
}

/// Pick the color for a notification.
///
/// A non-blank configured override wins and is passed through verbatim,
/// even when it is not a color HipChat knows - the API rejects unknown
/// values itself. Otherwise the level map decides.
pub fn select_color(override_color: Option<&str>, level: Level) -> String {
    match override_color {
        Some(color) if !color.trim().is_empty() => color.to_string(),
        _ => level_color(level).to_string(),
    }
}
