use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Dataset;
use services::{Clock, DatasetLoadError, DatasetLoader, DatasetSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Phishing awareness quiz";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    BlankDataset,
    BlankTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::BlankDataset => write!(f, "--dataset must not be blank"),
            ArgsError::BlankTitle => write!(f, "--title must not be blank"),
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
    title: String,
    dataset: Arc<Dataset>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

fn usage() -> String {
    [
        "Usage:".to_string(),
        "  cargo run -p app -- [--dataset <path>] [--title <window title>]".to_string(),
        String::new(),
        "Defaults:".to_string(),
        "  bundled dataset".to_string(),
        format!("  --title \"{DEFAULT_TITLE}\""),
        String::new(),
        "Environment:".to_string(),
        "  QUIZ_DATASET, QUIZ_TITLE, RUST_LOG (default: info)".to_string(),
    ]
    .join("\n")
}

/// Everything that can stop the binary before the window opens.
#[derive(Debug)]
enum RunError {
    Args(ArgsError),
    Dataset(DatasetLoadError),
}

impl RunError {
    fn shows_usage(&self) -> bool {
        matches!(self, RunError::Args(_))
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Args(err) => write!(f, "{err}"),
            RunError::Dataset(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ArgsError> for RunError {
    fn from(err: ArgsError) -> Self {
        RunError::Args(err)
    }
}

impl From<DatasetLoadError> for RunError {
    fn from(err: DatasetLoadError) -> Self {
        RunError::Dataset(err)
    }
}

/// The text `main` writes to stderr for a failed run.
fn failure_report(err: &RunError) -> String {
    if err.shows_usage() {
        format!("{err}\n{}", usage())
    } else {
        err.to_string()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    source: DatasetSource,
    title: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

/// Values read from the environment before flags override them.
#[derive(Debug, Default)]
struct EnvDefaults {
    dataset: Option<String>,
    title: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            dataset: std::env::var("QUIZ_DATASET").ok(),
            title: std::env::var("QUIZ_TITLE").ok(),
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Command, ArgsError> {
        let mut dataset = env
            .dataset
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut title = env
            .title
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dataset" => {
                    let value = require_value(args, "--dataset")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::BlankDataset);
                    }
                    dataset = Some(PathBuf::from(value));
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::BlankTitle);
                    }
                    title = value;
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self {
            source: DatasetSource::from_path(dataset),
            title,
        }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), RunError> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, EnvDefaults::from_env())? {
        Command::Run(args) => args,
        Command::Help => {
            eprintln!("{}", usage());
            return Ok(());
        }
    };

    init_tracing();

    // The dataset is validated once here; the UI never sees a malformed one.
    let dataset = DatasetLoader::load(&parsed.source)?;
    tracing::info!(
        source = %parsed.source,
        items = dataset.len(),
        "launching quiz window"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: parsed.title.clone(),
        dataset: Arc::new(dataset),
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups on macOS.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(parsed.title)
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
        eprintln!("{}", failure_report(&err));
        std::process::exit(2);
    }
}
