use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use ratatui::style::Color;

use crate::formatting::BoxChars;
use crate::league::League;

/// Environment variable that overrides `api.api_key`
pub const API_KEY_ENV: &str = "SPORTSDASH_API_KEY";

/// Value shipped in sample configs; treated the same as no key at all
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub refresh_interval: u32,
    #[serde(deserialize_with = "deserialize_league")]
    pub default_league: League,
    pub search_debounce_ms: u64,
    pub toast_duration_ms: u64,
    pub time_format: String,
    pub theme: ThemeConfig,
    pub api: ApiConfig,
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfocused_selection_fg: Option<Color>,
    pub use_unicode: bool,
}

/// Settings for the optional external data feed
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub season: String,
    pub timeout_secs: u64,
    /// Accepted for compatibility; failed requests are not retried
    pub retry_count: u32,
    pub format: String,
}

/// Shape of generated mock data
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MockConfig {
    /// Probability (0.0..=1.0) that a mock request fails with a transient error
    pub error_rate: f64,
    pub latency_ms: u64,
    pub game_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 60,
            default_league: League::Nba,
            search_debounce_ms: 300,
            toast_duration_ms: 3000,
            time_format: "%H:%M:%S".to_string(),
            theme: ThemeConfig::default(),
            api: ApiConfig::default(),
            mock: MockConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            unfocused_selection_fg: None,
            use_unicode: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://api.mysportsfeeds.com/v2.1/pull".to_string(),
            api_key: String::new(),
            season: "current".to_string(),
            timeout_secs: 10,
            retry_count: 3,
            format: "json".to_string(),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        MockConfig {
            error_rate: 0.05,
            latency_ms: 300,
            game_count: 6,
        }
    }
}

impl ApiConfig {
    /// A key is usable when it is set and not the sample placeholder
    pub fn has_usable_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

/// Resolved colours and glyphs handed to every widget
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub unfocused_selection_fg: Option<Color>,
    pub header_fg: Color,
    pub error_fg: Color,
    pub success_fg: Color,
    pub info_fg: Color,
    pub box_chars: BoxChars,
}

impl DisplayConfig {
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        ThemeConfig::default().display()
    }
}

impl ThemeConfig {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            selection_fg: self.selection_fg,
            unfocused_selection_fg: self.unfocused_selection_fg,
            header_fg: Color::Rgb(159, 226, 191), // Seafoam
            error_fg: Color::Red,
            success_fg: Color::Green,
            info_fg: Color::Cyan,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        self.theme.display()
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval.max(1) as u64)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Apply environment overrides on top of the file values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api.api_key = key;
            }
        }
        self
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

fn deserialize_league<'de, D>(deserializer: D) -> Result<League, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    League::from_code(&s).ok_or_else(|| serde::de::Error::custom(format!("Unknown league: {}", s)))
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Load the config file, falling back to defaults when it is missing or invalid
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default().with_env_overrides(),
    };

    if !config_path.exists() {
        return Config::default().with_env_overrides();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default().with_env_overrides(),
    };

    toml::from_str::<Config>(&content)
        .unwrap_or_else(|_| Config::default())
        .with_env_overrides()
}
