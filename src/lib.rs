pub mod api;
pub mod background;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod debounce;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod league;
pub mod types;
pub mod utils;
pub mod tui;
