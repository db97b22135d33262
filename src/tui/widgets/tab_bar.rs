/// LeagueTabBar widget - the league selector
///
/// Renders one tab per league with box-drawing separators and a rule
/// underneath. The selected league is highlighted; while a load is in flight
/// the highlight uses the unfocused colour.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::league::League;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct LeagueTabBar {
    pub current: League,
    /// Dims the highlight while data is loading
    pub busy: bool,
}

impl LeagueTabBar {
    pub fn new(current: League, busy: bool) -> Self {
        Self { current, busy }
    }

    fn label(league: League) -> String {
        format!("{} {}", league.index() + 1, league.name())
    }

    fn tab_style(&self, league: League, config: &DisplayConfig) -> Style {
        if league != self.current {
            Style::default()
        } else if self.busy {
            Style::default().fg(config.unfocused_selection_fg())
        } else {
            Style::default().fg(config.selection_fg)
        }
    }

    /// Build the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, league) in League::all().into_iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), Style::default()));
            }
            segments.push((Self::label(league), self.tab_style(league, config)));
        }

        segments
    }

    /// Build the rule under the tabs, with connectors under each separator
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let mut line = String::new();
        let mut pos = 0;

        for (i, league) in League::all().into_iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(&config.box_chars.tee_up);
                line.push_str(horizontal);
                pos += 3;
            }
            let width = Self::label(league).width();
            line.push_str(&horizontal.repeat(width));
            pos += width;
        }

        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }
        line
    }
}

impl RenderableWidget for LeagueTabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= area.right() {
                break;
            }
            buf.set_stringn(x, area.y, &text, (area.right() - x) as usize, style);
            x += text.width() as u16; // Display width, not byte length
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(
            area.x,
            area.y + 1,
            &separator,
            area.width as usize,
            Style::default().fg(Color::DarkGray),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Tab line + separator line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_tab_bar_basic_rendering() {
        let widget = LeagueTabBar::new(League::Nba, false);
        let buf = render_widget(&widget, 60, 2);

        assert_buffer(&buf, &[
            "1 NBA │ 2 NFL │ 3 MLB │ 4 NHL │ 5 Premier League",
            "──────┴───────┴───────┴───────┴─────────────────────────────",
        ]);
    }

    #[test]
    fn test_tab_bar_ascii() {
        let widget = LeagueTabBar::new(League::Nba, false);
        let buf = render_widget_with_config(&widget, 60, 2, &test_config_ascii());

        assert_buffer(&buf, &[
            "1 NBA | 2 NFL | 3 MLB | 4 NHL | 5 Premier League",
            "------+-------+-------+-------+-----------------------------",
        ]);
    }

    #[test]
    fn test_selected_league_highlighted() {
        let widget = LeagueTabBar::new(League::Nhl, false);
        let buf = render_widget(&widget, 60, 2);

        let x = find_in_line(&buf, 0, "4 NHL").expect("Should contain NHL");
        let config = test_config();
        assert_eq!(buf[(x, 0)].fg, config.selection_fg);
        assert_eq!(buf[(0, 0)].fg, Color::Reset);
    }

    #[test]
    fn test_busy_uses_unfocused_colour() {
        let widget = LeagueTabBar::new(League::Nba, true);
        let buf = render_widget(&widget, 60, 2);
        assert_eq!(buf[(0, 0)].fg, test_config().unfocused_selection_fg());
    }

    #[test]
    fn test_tab_bar_small_area() {
        let widget = LeagueTabBar::new(League::Nba, false);
        let buf = render_widget(&widget, 10, 2);
        assert_eq!(buffer_line(&buf, 0), "1 NBA │ 2 ");
    }

    #[test]
    fn test_tab_bar_zero_height() {
        let widget = LeagueTabBar::new(League::Nba, false);
        let buf = render_widget(&widget, 80, 0);
        assert_eq!(buf.area.height, 0);
    }
}
