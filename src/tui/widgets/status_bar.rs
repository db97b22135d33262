/// StatusBar widget - status information and keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: status message (or key hints) │ data source, last refresh, countdown
///
/// Error messages are displayed with the error color.

use chrono::{DateTime, Local};
use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use std::time::{Duration, SystemTime};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;
use crate::types::DataSource;

const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// A keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "/", "r")
    pub key: String,
    /// The action description (e.g., "Search")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug)]
pub struct StatusBar {
    /// Last successful refresh
    pub last_refresh: Option<SystemTime>,
    /// Auto-refresh interval, None when auto-refresh is off
    pub refresh_interval: Option<Duration>,
    /// Where the displayed data came from
    pub source: Option<DataSource>,
    /// Message shown instead of the hints
    pub message: Option<String>,
    pub is_error: bool,
    pub hints: Vec<KeyHint>,
    /// strftime pattern for the last refresh time
    pub time_format: String,
}

impl StatusBar {
    /// Create a new StatusBar with the dashboard's default hints
    pub fn new() -> Self {
        Self {
            last_refresh: None,
            refresh_interval: None,
            source: None,
            message: None,
            is_error: false,
            hints: vec![
                KeyHint::new("←→", "League"),
                KeyHint::new("/", "Search"),
                KeyHint::new("r", "Refresh"),
                KeyHint::new("q", "Quit"),
            ],
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<SystemTime>) -> Self {
        self.last_refresh = last_refresh;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Option<Duration>) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn with_source(mut self, source: Option<DataSource>) -> Self {
        self.source = source;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>, is_error: bool) -> Self {
        self.message = Some(message.into());
        self.is_error = is_error;
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Build the left side: message if any, otherwise the hints
    fn build_left_text(&self) -> String {
        if let Some(msg) = &self.message {
            if self.is_error {
                return format!("ERROR: {}", msg);
            }
            return msg.clone();
        }
        self.hints
            .iter()
            .map(|h| format!("{} {}", h.key, h.action))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Seconds until the next auto-refresh, fixed 3-char width
    fn countdown_text(&self) -> String {
        let (Some(refresh_time), Some(interval)) = (self.last_refresh, self.refresh_interval) else {
            return "---".to_string();
        };
        match SystemTime::now().duration_since(refresh_time) {
            Ok(elapsed) => {
                let remaining = interval.saturating_sub(elapsed).as_secs();
                if remaining > 0 {
                    format!("{:>3}", remaining.min(999))
                } else {
                    "...".to_string()
                }
            }
            Err(_) => "  ?".to_string(),
        }
    }

    /// Build the right side: source tag, last refresh time, countdown
    fn build_right_text(&self) -> String {
        let source = self.source.map(|s| s.tag()).unwrap_or("-");
        let updated = self
            .last_refresh
            .map(|t| DateTime::<Local>::from(t).format(&self.time_format).to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        format!("{} {} {}", source, updated, self.countdown_text())
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: usize, config: &DisplayConfig) -> String {
        let left_part = config.box_chars.horizontal.repeat(bar_position);
        let right_part = config.box_chars.horizontal.repeat(area_width.saturating_sub(bar_position + 1));
        format!("{}{}{}", left_part, config.box_chars.tee_down, right_part)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let right_text = self.build_right_text();
        // Layout: [margin][left][padding]│[space][right][space]
        let bar_position = (area.width as usize).saturating_sub(right_text.width() + 3);

        let separator = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator, area.width as usize, Style::default().fg(Color::DarkGray));

        let y = area.y + 1;
        let left_style = if self.is_error && self.message.is_some() {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        };
        let left_text = self.build_left_text();
        buf.set_stringn(area.x + 1, y, &left_text, bar_position.saturating_sub(2), left_style);

        let bar_x = area.x + bar_position as u16;
        if bar_x < area.right() {
            buf.set_string(bar_x, y, &config.box_chars.vertical, Style::default().fg(Color::DarkGray));
            let remaining = (area.right() - bar_x).saturating_sub(2) as usize;
            buf.set_stringn(bar_x + 2, y, &right_text, remaining, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
