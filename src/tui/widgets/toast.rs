/// ToastStack widget - transient notifications in the top-right corner
///
/// Newest toast at the top. Each severity has its own colour; a toast in
/// its exit phase is drawn dimmed.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::state::{Toast, ToastLevel};
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct ToastStack<'a> {
    pub toasts: &'a [Toast],
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast]) -> Self {
        Self { toasts }
    }

    fn icon(level: ToastLevel, config: &DisplayConfig) -> &'static str {
        match (level, config.use_unicode) {
            (ToastLevel::Success, true) => "✓",
            (ToastLevel::Error, true) => "✗",
            (ToastLevel::Info, true) => "ℹ",
            (ToastLevel::Success, false) => "+",
            (ToastLevel::Error, false) => "x",
            (ToastLevel::Info, false) => "i",
        }
    }

    fn style(toast: &Toast, config: &DisplayConfig) -> Style {
        let bg = match toast.level {
            ToastLevel::Success => config.success_fg,
            ToastLevel::Error => config.error_fg,
            ToastLevel::Info => config.info_fg,
        };
        let style = Style::default().fg(Color::Black).bg(bg);
        if toast.leaving {
            style.add_modifier(Modifier::DIM)
        } else {
            style.add_modifier(Modifier::BOLD)
        }
    }

    /// Text of one toast, padded with a space on each side
    fn text(toast: &Toast, config: &DisplayConfig) -> String {
        format!(" {} {} ", Self::icon(toast.level, config), toast.message)
    }
}

impl RenderableWidget for ToastStack<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 {
            return;
        }

        for (row, toast) in self.toasts.iter().rev().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            let text = Self::text(toast, config);
            let width = (text.width() as u16).min(area.width);
            let x = area.right() - width;
            buf.set_stringn(x, y, &text, width as usize, Self::style(toast, config));
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.toasts.len() as u16)
    }
}
