use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mastery_core::Clock;
use services::AppServices;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, UiConfig, build_app_context, parse_route};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --route value: {raw}")]
    InvalidRoute { raw: String },
    #[error("invalid --title value: title must not be empty")]
    EmptyTitle,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    title: String,
    log_filter: Option<String>,
    route: Option<String>,
    show_help: bool,
}

impl Args {
    /// Flags win over the environment; `env` is injected so parsing stays testable.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            title: env("MASTERY_TITLE")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| UiConfig::DEFAULT_TITLE.to_string()),
            log_filter: env("MASTERY_LOG").filter(|value| !value.trim().is_empty()),
            route: None,
            show_help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    parsed.title = value;
                }
                "--log" => parsed.log_filter = Some(require_value(args, "--log")?),
                "--route" => {
                    let value = require_value(args, "--route")?;
                    if !value.starts_with('/') || parse_route(&value).is_err() {
                        return Err(ArgsError::InvalidRoute { raw: value });
                    }
                    parsed.route = Some(value);
                }
                "--help" | "-h" => parsed.show_help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn ui_config(&self) -> UiConfig {
        UiConfig::default()
            .with_title(self.title.clone())
            .with_initial_route(self.route.clone())
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p mastery -- [--title <text>] [--log <filter>] [--route <path>]");
    eprintln!();
    eprintln!("Routes:");
    eprintln!("  /  /practice  /dashboard  /settings  /about  /auth");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MASTERY_TITLE, MASTERY_LOG (falls back to RUST_LOG, then {DEFAULT_LOG_FILTER})");
}

/// Picks the log filter: `requested`, then `RUST_LOG`, then the default.
/// A requested filter that fails to parse is returned as a warning line.
fn resolve_filter(requested: Option<&str>) -> (EnvFilter, Option<String>) {
    let fallback = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    match requested.map(|raw| (raw, EnvFilter::try_new(raw))) {
        Some((_, Ok(filter))) => (filter, None),
        Some((raw, Err(err))) => (
            fallback(),
            Some(format!("ignoring invalid log filter {raw:?}: {err}")),
        ),
        None => (fallback(), None),
    }
}

fn init_tracing(requested: Option<&str>) {
    let (filter, warning) = resolve_filter(requested);

    // The desktop launcher may already have installed a subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    if let Some(warning) = warning {
        eprintln!("{warning}");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).inspect_err(|_| {
        print_usage();
    })?;
    if args.show_help {
        print_usage();
        return Ok(());
    }

    init_tracing(args.log_filter.as_deref());

    let services = AppServices::in_memory(Clock::default_clock())?;
    let app: Arc<dyn UiApp> = Arc::new(services);
    let config = args.ui_config();
    tracing::info!(title = %config.title, route = ?config.initial_route, "launching desktop window");
    let context = build_app_context(&app, config);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title.clone())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
