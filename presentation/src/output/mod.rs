//! Output formatting for read models

pub mod console;
pub mod formatter;
pub mod json;

pub use console::ConsoleFormatter;
pub use formatter::{OutputFormatter, formatter_for};
pub use json::JsonFormatter;

/// Turn colored output off when `enabled` is false
///
/// Enabling never forces color: terminal detection still decides, so piped
/// output stays plain.
pub fn set_color_enabled(enabled: bool) {
    if let Some(forced) = color_override(enabled) {
        colored::control::set_override(forced);
    }
}

fn color_override(enabled: bool) -> Option<bool> {
    (!enabled).then_some(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_override_only_disables() {
        assert_eq!(color_override(false), Some(false));
        assert_eq!(color_override(true), None);
    }
}
