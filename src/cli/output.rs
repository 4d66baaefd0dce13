//! Output formatting helpers for CLI commands

use colored::Colorize;

/// Check or cross for a boolean flag.
pub fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

/// Colored check or cross.
pub fn colored_mark(ok: bool) -> String {
    if ok {
        mark(ok).green().to_string()
    } else {
        mark(ok).red().to_string()
    }
}

/// First `max` characters of `text`, with `…` when something was cut.
pub fn shorten(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let mut cut: String = flat.chars().take(max).collect();
        cut.push('…');
        cut
    }
}
