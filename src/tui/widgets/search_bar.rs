/// SearchBar widget - one-line search input
///
/// Shows the typed query with a cursor while editing, the active filter when
/// one is applied, and a hint otherwise.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

const PROMPT: &str = "Search: ";
const CURSOR: &str = "_";
const HINT: &str = "press / to filter teams and games";

#[derive(Debug)]
pub struct SearchBar<'a> {
    pub query: &'a str,
    pub editing: bool,
    pub active_filter: Option<&'a str>,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, editing: bool, active_filter: Option<&'a str>) -> Self {
        Self { query, editing, active_filter }
    }
}

impl RenderableWidget for SearchBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let prompt_style = if self.editing {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        let (x, _) = buf.set_stringn(area.x, area.y, PROMPT, width, prompt_style);
        let remaining = area.right().saturating_sub(x) as usize;

        if self.editing {
            let text = format!("{}{}", self.query, CURSOR);
            buf.set_stringn(x, area.y, &text, remaining, Style::default());
        } else if let Some(filter) = self.active_filter {
            let text = format!("{}  (Esc to clear)", filter);
            buf.set_stringn(x, area.y, &text, remaining, Style::default().fg(config.info_fg));
        } else {
            buf.set_stringn(
                x,
                area.y,
                HINT,
                remaining,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
