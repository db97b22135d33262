/// StatsSummary widget - the four headline numbers
///
/// Renders four equal-width slots (teams, games today, top scorer, average
/// score), each a dim label above a bold value.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;
use crate::types::DashboardStats;

const SLOT_COUNT: u16 = 4;

#[derive(Debug)]
pub struct StatsSummary<'a> {
    pub stats: &'a DashboardStats,
}

impl<'a> StatsSummary<'a> {
    pub fn new(stats: &'a DashboardStats) -> Self {
        Self { stats }
    }

    fn slots(&self) -> [(&'static str, String); SLOT_COUNT as usize] {
        [
            ("Teams", self.stats.total_teams.to_string()),
            ("Games Today", self.stats.games_today.to_string()),
            ("Top Scorer", self.stats.top_scorer.clone()),
            ("Avg Score", format!("{:.1}", self.stats.average_score)),
        ]
    }
}

impl RenderableWidget for StatsSummary<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < SLOT_COUNT || area.height < 2 {
            return;
        }

        let slot_width = area.width / SLOT_COUNT;
        let label_style = Style::default().fg(Color::DarkGray);
        let value_style = Style::default().fg(config.header_fg).add_modifier(Modifier::BOLD);

        for (i, (label, value)) in self.slots().iter().enumerate() {
            let x = area.x + slot_width * i as u16;
            // Leave one column between slots
            let width = slot_width.saturating_sub(1) as usize;
            buf.set_stringn(x, area.y, label, width, label_style);
            buf.set_stringn(x, area.y + 1, value, width, value_style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::sample_stats;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_four_slots() {
        let stats = sample_stats();
        let buf = render_widget(&StatsSummary::new(&stats), 60, 2);
        assert_buffer(&buf, &[
            "Teams          Games Today    Top Scorer     Avg Score",
            "12             7              LeBron James   104.5",
        ]);
    }

    #[test]
    fn test_values_are_bold() {
        let stats = sample_stats();
        let buf = render_widget(&StatsSummary::new(&stats), 60, 2);
        assert!(buf[(0, 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(0, 1)].fg, test_config().header_fg);
    }

    #[test]
    fn test_long_values_truncated_to_slot() {
        let stats = DashboardStats {
            top_scorer: "Giannis Antetokounmpo".to_string(),
            ..sample_stats()
        };
        let buf = render_widget(&StatsSummary::new(&stats), 40, 2);
        // 10-column slots, 9 usable
        assert_eq!(&buffer_line(&buf, 1)[20..29], "Giannis A");
    }

    #[test]
    fn test_default_stats() {
        let stats = DashboardStats::default();
        let buf = render_widget(&StatsSummary::new(&stats), 40, 2);
        assert!(buffer_line(&buf, 1).starts_with("0 "));
        assert!(buffer_line(&buf, 1).contains("0.0"));
    }
}
