use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    HttpQuizProvider, ProviderConfig, QuizFlowController, ThreadRngSource, load_game_config,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    flow: QuizFlowController,
}

impl UiApp for DesktopApp {
    fn flow(&self) -> QuizFlowController {
        self.flow.clone()
    }
}

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    api_url: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  mate [--config <path>] [--api <base_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in game settings, API at http://127.0.0.1:8080");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATE_CONFIG, MATE_API_BASE_URL, MATE_API_PATH, MATE_TOKEN_HEADER, RUST_LOG");
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            config_path: std::env::var("MATE_CONFIG").ok().map(PathBuf::from),
            ..Self::default()
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(require_value(&mut args, "--config")?));
                }
                "--api" => {
                    let value = require_value(&mut args, "--api")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.api_url = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let config = load_game_config(parsed.config_path.as_deref())?;
    let mut provider_config = ProviderConfig::from_env();
    if let Some(api_url) = parsed.api_url {
        provider_config.base_url = api_url;
    }
    info!(api = %provider_config.base_url, "quiz data provider configured");

    let title = config.app_title().to_string();
    let flow = QuizFlowController::new(
        Arc::new(HttpQuizProvider::new(provider_config)),
        Arc::new(config),
    )
    .with_index_source(ThreadRngSource);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { flow });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
