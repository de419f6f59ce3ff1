//! Entry point for the zine viewer.
//!
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Pick the content source and launch the GUI.

mod app;
mod assets;
mod cache;
mod config;
mod theme;

use crate::app::{ContentSource, run_app};
use crate::config::{AppConfig, load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: zine-viewer [--print-config] [path-to-zine.toml|json]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    content: Option<PathBuf>,
    print_config: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if args.print_config {
        let rendered = serialize_config(&config).context("Failed to serialize configuration")?;
        print!("{rendered}");
        return Ok(());
    }

    let source = content_source(args.content, &config)?;
    info!(
        source = %source,
        level = %config.log_level,
        theme = %config.theme,
        "Starting zine viewer"
    );
    run_app(source, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--print-config" => parsed.print_config = true,
            "-h" | "--help" => return Err(anyhow!(USAGE)),
            flag if flag.starts_with("--") => {
                return Err(anyhow!("Unknown option {flag}\n{USAGE}"));
            }
            _ if parsed.content.is_some() => return Err(anyhow!(USAGE)),
            path => parsed.content = Some(PathBuf::from(path)),
        }
    }
    Ok(parsed)
}

/// CLI path first, then `content.spreads_path`, then the built-in zine.
fn content_source(cli_path: Option<PathBuf>, config: &AppConfig) -> Result<ContentSource> {
    let configured = config
        .spreads_path
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);
    match cli_path.or(configured) {
        Some(path) if !path.exists() => Err(anyhow!("File not found: {}", path.display())),
        Some(path) => Ok(ContentSource::File(path)),
        None => Ok(ContentSource::Builtin),
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_path_and_flag() {
        let parsed = parse_args(args(&["--print-config", "zine.toml"])).unwrap();
        assert!(parsed.print_config);
        assert_eq!(parsed.content, Some(PathBuf::from("zine.toml")));
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["a.toml", "b.toml"])).is_err());
    }

    #[test]
    fn falls_back_to_builtin_content() {
        let mut config = AppConfig::default();
        assert_eq!(
            content_source(None, &config).unwrap(),
            ContentSource::Builtin
        );
        config.spreads_path = Some("   ".to_string());
        assert_eq!(
            content_source(None, &config).unwrap(),
            ContentSource::Builtin
        );
    }

    #[test]
    fn missing_content_file_is_an_error() {
        let config = AppConfig::default();
        let missing = PathBuf::from("definitely/not/here.toml");
        assert!(content_source(Some(missing), &config).is_err());
    }

    #[test]
    fn cli_path_wins_over_config() {
        let dir = std::env::temp_dir().join(format!("zine-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("zine.toml");
        std::fs::write(&file, "").unwrap();
        let mut config = AppConfig::default();
        config.spreads_path = Some("other.toml".to_string());
        assert_eq!(
            content_source(Some(file.clone()), &config).unwrap(),
            ContentSource::File(file)
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
