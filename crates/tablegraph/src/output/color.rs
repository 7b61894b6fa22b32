//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Error/Unknown:  red     (names that do not exist)
//!   - Info/Reference: cyan    (entity names in titles)
//!   - Accent:         magenta (explanations)
//!   - Muted:          dimmed  (totals, empty-list notices)
//!   - Emphasis:       bold    (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply accent color (magenta) to text.
pub(crate) fn accent(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.magenta().to_string()
}

/// Apply dimmed style to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Marker printed in front of an unknown name.
pub(crate) fn unknown_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "x" } else { "✗" };
    error(icon, config)
}

/// Bullet printed in front of list entries.
pub(crate) fn bullet(config: &OutputConfig) -> &'static str {
    if config.use_ascii { "-" } else { "•" }
}
