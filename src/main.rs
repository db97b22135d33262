use clap::{Parser, Subcommand};
use sportsdash::config;
use sportsdash::commands;
use sportsdash::data_provider::LeagueDataSource;
use sportsdash::league::League;
use sportsdash::tui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "sportsdash")]
#[command(about = "Multi-league sports dashboard", long_about = "Multi-league sports dashboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// League code: nba, nfl, mlb, nhl, epl (default: from config)
    #[arg(short = 'l', long, global = true, value_parser = parse_league)]
    league: Option<League>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display league standings
    Standings,
    /// Display recently played games
    Games,
    /// Display the league summary numbers
    Stats,
    /// Search teams and players by name
    Search {
        /// Text to look for
        query: String,
    },
    /// Display current configuration
    Config,
}

fn parse_league(s: &str) -> Result<League, String> {
    League::from_code(s).ok_or_else(|| {
        let codes: Vec<&str> = League::all().iter().map(|l| l.code()).collect();
        format!("unknown league '{}' (expected one of: {})", s, codes.join(", ").to_lowercase())
    })
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("default_league: {}", cfg.default_league.code());
    println!("search_debounce_ms: {}", cfg.search_debounce_ms);
    println!("toast_duration_ms: {}", cfg.toast_duration_ms);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("use_unicode: {}", cfg.theme.use_unicode);
    println!();
    print!("{}", format_api_section(&cfg.api));
    println!();
    println!("[mock]");
    println!("error_rate: {}", cfg.mock.error_rate);
    println!("latency_ms: {}", cfg.mock.latency_ms);
    println!("game_count: {}", cfg.mock.game_count);
}

/// `[api]` block of the config dump; settings read but unused are marked
fn format_api_section(api: &config::ApiConfig) -> String {
    let key_state = if api.has_usable_key() { "(set)" } else { "(not set, using mock data)" };
    format!(
        "[api]\nbase_url: {}\napi_key: {}\nseason: {}\ntimeout_secs: {}\nretry_count: {} (not used)\nformat: {} (not used)\n",
        api.base_url, key_state, api.season, api.timeout_secs, api.retry_count, api.format
    )
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(config: &config::Config, league: League, command: Commands) -> anyhow::Result<()> {
    let provider = LeagueDataSource::from_config(config);
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Standings => commands::standings::run(&provider, league, config).await,
        Commands::Games => commands::games::run(&provider, league, config).await,
        Commands::Stats => commands::stats::run(&provider, league, config).await,
        Commands::Search { query } => commands::search::run(&provider, &query, league).await,
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(league) = cli.league {
        config.default_league = league;
    }

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need a data source)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    let league = config.default_league;
    if let Err(e) = execute_command(&config, league, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
