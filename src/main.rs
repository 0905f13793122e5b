use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use ytapi::config::Config;
use ytapi::resource::{get_policy, CommentThreadsApi, VideoApi};
use ytapi::youtube::{Params, ResourceClient, YouTubeHttpClient};

/// Command line client for the YouTube Data API
#[derive(Parser, Debug)]
#[command(name = "ytapi", version, about, long_about = None)]
struct Args {
    /// API key (overrides the saved config)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the raw JSON for a video
    Video {
        id: String,
        /// Parts to request
        #[arg(long = "part", default_value = "snippet")]
        parts: Vec<String>,
    },
    /// Print the comment threads of a video
    Comments {
        video_id: String,
        /// Follow page tokens until every thread is fetched
        #[arg(long)]
        all: bool,
    },
    /// Estimate the quota cost of a request
    Quota {
        /// Resource type, e.g. videos or commentThreads
        resource: String,
        #[arg(long = "part", required = true)]
        parts: Vec<String>,
    },
    /// Manage the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Save the API key
    SetKey { key: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("ytapi started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = Config::config_dir() {
        return config_dir.join("ytapi.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".ytapi").join("ytapi.log");
    }
    PathBuf::from("ytapi.log")
}

fn http_client(config: &Config, args: &Args) -> Result<YouTubeHttpClient> {
    YouTubeHttpClient::builder()
        .timeout(config.effective_timeout(args.timeout))
        .build()
        .context("Failed to create HTTP client")
}

fn api_key(config: &Config, args: &Args) -> Result<String> {
    config
        .effective_api_key(args.api_key.as_deref())
        .context("No API key configured. Use --api-key or `ytapi config set-key <KEY>`")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();

    match &args.command {
        Command::Video { id, parts } => {
            let api = VideoApi::with_transport(&api_key(&config, &args)?, http_client(&config, &args)?);
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            let video = api.get_video_by_id_with(id, &parts, &Params::new()).await?;
            println!("{}", serde_json::to_string_pretty(&video)?);
        }
        Command::Comments { video_id, all } => {
            let api = CommentThreadsApi::with_transport(&api_key(&config, &args)?, http_client(&config, &args)?);
            let list = if *all {
                api.get_all_comments_by_id(video_id).await?
            } else {
                api.get_comments_by_id(video_id).await?
            };
            tracing::info!("Fetched {} comment threads for {}", list.comments.len(), video_id);
            println!("{}", list);
        }
        Command::Quota { resource, parts } => {
            let policy = get_policy(resource)
                .with_context(|| format!("Unknown resource: {}", resource))?
                .clone();
            // No request is sent, so the key is irrelevant here
            let client = ResourceClient::with_transport("", policy, http_client(&config, &args)?);
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            println!("{}", client.calculate_quota(&parts)?);
        }
        Command::Config { action } => match action {
            ConfigAction::SetKey { key } => {
                config.set_api_key(key)?;
                println!("API key saved");
            }
        },
    }

    Ok(())
}
