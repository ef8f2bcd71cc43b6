use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::settings::UnknownMode;
use services::{Clock, QuizMode, QuizSettings};
use tracing::{info, warn};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidMode(UnknownMode),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidMode(err) => write!(f, "invalid --mode value: {err}"),
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
    settings: QuizSettings,
    questions: Option<PathBuf>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> QuizSettings {
        self.settings.clone()
    }

    fn initial_questions(&self) -> Option<PathBuf> {
        self.questions.clone()
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    questions: Option<PathBuf>,
    settings: QuizSettings,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--questions <file.json>] [--count <n>] [--mode choice|ordering] [--gallery <dir>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --count 0 (all questions)");
    eprintln!("  --mode choice");
    eprintln!("  --gallery assets/images/concepts");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_FILE, QUIZ_COUNT, QUIZ_MODE, QUIZ_GALLERY_DIR, RUST_LOG");
}

impl Args {
    /// Defaults overlaid with whatever the environment sets. Bad values are ignored.
    fn from_env(env: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = QuizSettings::default();

        if let Some(raw) = env("QUIZ_COUNT") {
            match raw.trim().parse::<u32>() {
                Ok(count) => settings = settings.with_requested_count(count),
                Err(_) => warn!(value = %raw, "ignoring invalid QUIZ_COUNT"),
            }
        }
        if let Some(raw) = env("QUIZ_MODE") {
            match raw.parse::<QuizMode>() {
                Ok(mode) => settings = settings.with_mode(mode),
                Err(err) => warn!(error = %err, "ignoring invalid QUIZ_MODE"),
            }
        }
        if let Some(dir) = env("QUIZ_GALLERY_DIR").filter(|dir| !dir.trim().is_empty()) {
            settings = settings.with_gallery_root(dir);
        }

        Self {
            questions: env("QUIZ_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            settings,
        }
    }

    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let Args {
            mut questions,
            mut settings,
        } = Self::from_env(env);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    questions = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    let count: u32 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                    settings = settings.with_requested_count(count);
                }
                "--mode" => {
                    let value = require_value(args, "--mode")?;
                    let mode = value.parse::<QuizMode>().map_err(ArgsError::InvalidMode)?;
                    settings = settings.with_mode(mode);
                }
                "--gallery" => {
                    settings = settings.with_gallery_root(require_value(args, "--gallery")?);
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self {
            questions,
            settings,
        }))
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let command = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match command {
        Command::Run(args) => args,
        Command::Help => {
            print_usage();
            return Ok(());
        }
    };

    info!(
        mode = %args.settings.mode(),
        count = args.settings.requested_count().value(),
        questions = ?args.questions,
        gallery = %args.settings.gallery_root().display(),
        "starting quiz player"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings: args.settings,
        questions: args.questions,
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz App")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
