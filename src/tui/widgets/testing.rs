/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
///
/// This provides consistent theming for tests.
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(255, 200, 0), // Gold
        unfocused_selection_fg: None,
        header_fg: Color::Rgb(159, 226, 191), // Seafoam
        error_fg: Color::Red,
        success_fg: Color::Green,
        info_fg: Color::Cyan,
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    let config = test_config();
    render_widget_with_config(widget, width, height, &config)
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Convert a buffer to a string representation for snapshot testing
///
/// Each line of the buffer is converted to a string, preserving spacing.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    let mut output = String::new();

    for y in 0..area.height {
        output.push_str(&buffer_line(buf, y));
        if y + 1 < area.height {
            output.push('\n');
        }
    }

    output
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        output.push_str(buf[(x, line)].symbol());
    }

    output
}

/// Assert that a buffer matches the expected lines (trailing spaces ignored)
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let area = buf.area();
    assert_eq!(
        area.height as usize,
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        area.height
    );

    for (i, expected_line) in expected.iter().enumerate() {
        let actual = buffer_line(buf, i as u16);
        assert_eq!(
            actual.trim_end(),
            expected_line.trim_end(),
            "\nLine {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual
        );
    }
}

/// Column of the first occurrence of `needle` on `line`, in cells
pub fn find_in_line(buf: &Buffer, line: u16, needle: &str) -> Option<u16> {
    let area = buf.area();
    let first = needle.chars().next()?.to_string();
    (0..area.width).find(|&x| {
        buf[(x, line)].symbol() == first
            && buffer_line(buf, line)
                .chars()
                .skip(x as usize)
                .collect::<String>()
                .starts_with(needle)
    })
}
