/// Chart widgets for the two dashboard visualizations
///
/// - `WinLossChart`: grouped bars (wins, losses) for the top teams by win percentage
/// - `PointsChart`: a line of total points for the top teams by points
///
/// Both render from the `ChartSet` owned by the current `DashboardView`, so a
/// new view replaces the chart data wholesale.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, Widget},
};
use crate::config::DisplayConfig;
use crate::tui::presenter::{PointsSample, WinLossBar};
use crate::tui::widgets::{short_team_name, RenderableWidget};

const BAR_WIDTH: u16 = 3;
const GROUP_GAP: u16 = 2;

fn chart_block(title: &str, config: &DisplayConfig) -> Block<'static> {
    let block = Block::default().title(format!(" {} ", title));
    if config.use_unicode {
        block.borders(Borders::ALL).border_type(BorderType::Rounded)
    } else {
        block.borders(Borders::TOP)
    }
}

fn render_empty(title: &str, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let block = chart_block(title, config);
    let inner = block.inner(area);
    Widget::render(block, area, buf);
    if inner.height > 0 {
        buf.set_stringn(inner.x, inner.y, "No data", inner.width as usize, Style::default().fg(Color::DarkGray));
    }
}

#[derive(Debug)]
pub struct WinLossChart<'a> {
    pub bars: &'a [WinLossBar],
}

impl<'a> WinLossChart<'a> {
    pub const TITLE: &'static str = "Wins / Losses";

    pub fn new(bars: &'a [WinLossBar]) -> Self {
        Self { bars }
    }
}

impl RenderableWidget for WinLossChart<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.bars.is_empty() {
            render_empty(Self::TITLE, area, buf, config);
            return;
        }

        let mut chart = BarChart::default()
            .block(chart_block(Self::TITLE, config))
            .bar_width(BAR_WIDTH)
            .bar_gap(0)
            .group_gap(GROUP_GAP)
            .value_style(Style::default().fg(Color::Black));

        for entry in self.bars {
            let wins = Bar::default()
                .value(entry.wins as u64)
                .style(Style::default().fg(config.success_fg));
            let losses = Bar::default()
                .value(entry.losses as u64)
                .style(Style::default().fg(config.error_fg));
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(short_team_name(&entry.team).to_string()))
                    .bars(&[wins, losses]),
            );
        }

        Widget::render(chart, area, buf);
    }

    fn preferred_width(&self) -> Option<u16> {
        let groups = self.bars.len() as u16;
        // Two bars per group, gaps between groups, plus the border
        Some(groups * BAR_WIDTH * 2 + groups.saturating_sub(1) * GROUP_GAP + 2)
    }
}

#[derive(Debug)]
pub struct PointsChart<'a> {
    pub samples: &'a [PointsSample],
}

impl<'a> PointsChart<'a> {
    pub const TITLE: &'static str = "Total Points";

    pub fn new(samples: &'a [PointsSample]) -> Self {
        Self { samples }
    }

    /// (index, points) pairs in display order
    fn series(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.points as f64))
            .collect()
    }

    /// Y range padded 5% so the line never sits on the border
    fn y_bounds(&self) -> [f64; 2] {
        let max = self.samples.iter().map(|s| s.points).max().unwrap_or(0) as f64;
        let min = self.samples.iter().map(|s| s.points).min().unwrap_or(0) as f64;
        let lo = (min * 0.95).floor();
        let hi = (max * 1.05).ceil().max(lo + 1.0);
        [lo, hi]
    }
}

impl RenderableWidget for PointsChart<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.samples.is_empty() {
            render_empty(Self::TITLE, area, buf, config);
            return;
        }

        let data = self.series();
        let [lo, hi] = self.y_bounds();
        let max_x = (self.samples.len().saturating_sub(1) as f64).max(1.0);

        let first = short_team_name(&self.samples[0].team).to_string();
        let last = self
            .samples
            .last()
            .map(|s| short_team_name(&s.team).to_string())
            .unwrap_or_default();

        let marker = if config.use_unicode { Marker::Braille } else { Marker::Dot };
        let dataset = Dataset::default()
            .name("Points")
            .marker(marker)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(config.info_fg))
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(chart_block(Self::TITLE, config))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, max_x])
                    .labels(vec![Span::raw(first), Span::raw(last)]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([lo, hi])
                    .labels(vec![
                        Span::raw(format!("{:.0}", lo)),
                        Span::raw(format!("{:.0}", hi)),
                    ]),
            );

        Widget::render(chart, area, buf);
    }
}
