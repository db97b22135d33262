/// StatusPanel widget - loading indicator or error box
///
/// The two are mutually exclusive: the view picks one variant from state,
/// so showing one always hides the other.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPanel<'a> {
    Loading,
    Error(&'a str),
}

const LOADING_TEXT: &str = "Loading...";
const RETRY_HINT: &str = "Press Enter or R to retry";

impl StatusPanel<'_> {
    fn draw_box(area: Rect, buf: &mut Buffer, config: &DisplayConfig, style: Style) {
        let bc = &config.box_chars;
        let inner_width = area.width.saturating_sub(2) as usize;
        let top = format!("{}{}{}", bc.top_left, bc.horizontal.repeat(inner_width), bc.top_right);
        let bottom = format!("{}{}{}", bc.bottom_left, bc.horizontal.repeat(inner_width), bc.bottom_right);

        buf.set_string(area.x, area.y, &top, style);
        for y in area.y + 1..area.bottom().saturating_sub(1) {
            buf.set_string(area.x, y, &bc.vertical, style);
            buf.set_string(area.right() - 1, y, &bc.vertical, style);
        }
        buf.set_string(area.x, area.bottom() - 1, &bottom, style);
    }

    fn centered_x(area: Rect, text: &str) -> u16 {
        let width = text.width() as u16;
        area.x + area.width.saturating_sub(width) / 2
    }
}

impl RenderableWidget for StatusPanel<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let content_width = area.width.saturating_sub(4) as usize;
        match self {
            StatusPanel::Loading => {
                let style = Style::default().fg(config.info_fg);
                Self::draw_box(area, buf, config, style);
                let y = area.y + area.height / 2;
                let x = Self::centered_x(area, LOADING_TEXT);
                buf.set_stringn(x, y, LOADING_TEXT, content_width, style.add_modifier(Modifier::BOLD));
            }
            StatusPanel::Error(message) => {
                let style = Style::default().fg(config.error_fg);
                Self::draw_box(area, buf, config, style);
                let y = area.y + 1;
                buf.set_stringn(area.x + 2, y, message, content_width, style.add_modifier(Modifier::BOLD));
                if area.height >= 4 {
                    buf.set_stringn(
                        area.x + 2,
                        y + 1,
                        RETRY_HINT,
                        content_width,
                        Style::default().fg(Color::DarkGray),
                    );
                }
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        match self {
            StatusPanel::Loading => Some(3),
            StatusPanel::Error(_) => Some(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_loading_panel() {
        let buf = render_widget(&StatusPanel::Loading, 20, 3);
        assert_buffer(&buf, &[
            "╭──────────────────╮",
            "│    Loading...    │",
            "╰──────────────────╯",
        ]);
    }

    #[test]
    fn test_error_panel() {
        let panel = StatusPanel::Error("Failed to load data: timeout");
        let buf = render_widget(&panel, 34, 4);
        assert_buffer(&buf, &[
            "╭────────────────────────────────╮",
            "│ Failed to load data: timeout   │",
            "│ Press Enter or R to retry      │",
            "╰────────────────────────────────╯",
        ]);
        assert_eq!(buf[(2, 1)].fg, test_config().error_fg);
    }

    #[test]
    fn test_error_message_truncated() {
        let panel = StatusPanel::Error("Failed to load data: a very long network error");
        let buf = render_widget(&panel, 20, 4);
        assert_eq!(buffer_line(&buf, 1), "│ Failed to load d │");
    }

    #[test]
    fn test_ascii_box() {
        let buf = render_widget_with_config(&StatusPanel::Loading, 14, 3, &test_config_ascii());
        assert_eq!(buffer_line(&buf, 0), "+------------+");
    }

    #[test]
    fn test_too_small_renders_nothing() {
        let buf = render_widget(&StatusPanel::Loading, 3, 2);
        assert_eq!(buffer_to_string(&buf).trim(), "");
    }
}
