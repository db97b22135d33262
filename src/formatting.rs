use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing characters for tables and separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    /// Joins a horizontal rule to a vertical separator above it
    pub tee_up: String,
    /// Joins a horizontal rule to a vertical separator below it
    pub tee_down: String,
    pub winner_marker: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            tee_up: "┴".to_string(),
            tee_down: "┬".to_string(),
            winner_marker: "◀".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            tee_up: "+".to_string(),
            tee_down: "+".to_string(),
            winner_marker: "<".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and an underline of matching display width
///
/// `double_line` selects ═/= instead of ─/-.
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Left-align `text` in a column of `width` terminal cells, truncating if needed
pub fn pad_right(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
