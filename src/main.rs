use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use log::{LevelFilter, info, warn};

mod batch;
mod config;
mod demo;
mod error;
mod input;
mod render;
mod theme;

use config::{ConfigEngine, Settings};
use demo::{Demo, InterpreterState};
use error::DemoError;
use input::Keymap;
use render::Renderer;

#[derive(Parser, Debug)]
#[command(
    name = "fkthemes-demo",
    version,
    about = "Try the fkthemes.nvim theme commands in a simulated terminal"
)]
struct Cli {
    /// Theme selected at startup (overrides the config file)
    #[arg(long)]
    theme: Option<String>,

    /// Init script to load instead of ~/.config/fkthemes-demo/init.rhai
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Run headless, reading command lines from FILE or stdin
    #[arg(long, value_name = "FILE")]
    batch: Option<Option<PathBuf>>,

    /// With --batch, print the final state as JSON
    #[arg(long, requires = "batch")]
    json: bool,

    /// Print the theme registry as JSON and exit
    #[arg(long, conflicts_with = "batch")]
    list_themes: bool,

    #[arg(long, short, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: LevelFilter = cli
        .log_level
        .parse()
        .with_context(|| format!("invalid log level {:?}", cli.log_level))?;
    let headless = cli.batch.is_some() || cli.list_themes;
    init_logging(level, headless);

    if cli.list_themes {
        serde_json::to_writer_pretty(io::stdout(), theme::all())?;
        println!();
        return Ok(());
    }

    let settings = load_settings(cli.config.as_ref());
    let startup = match &cli.theme {
        Some(key) => theme::find(key).ok_or_else(|| DemoError::UnknownTheme(key.clone()))?,
        None => settings.startup_theme().unwrap_or_else(|e| {
            warn!("{}, using {}", e, theme::DEFAULT_THEME);
            theme::default_theme()
        }),
    };
    let state = if settings.show_welcome {
        InterpreterState::with_theme(startup)
    } else {
        InterpreterState::quiet(startup)
    };

    if let Some(source) = cli.batch {
        return run_batch(state, source, cli.json);
    }

    let mut demo = Demo::new(state);
    demo.transparent_background = settings.transparent_background;
    let keymap = Keymap::from_bindings(&settings.keybinds);
    info!("starting demo on {} with {} keybinds", startup.key, keymap.len());

    Renderer::setup()?;
    let result = run_ui(&mut demo, &keymap).await;
    finish_ui(result, Renderer::teardown())
}

/// The loop's own error wins; a failed terminal restore is only logged.
fn finish_ui(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    if let Err(e) = restored {
        warn!("failed to restore terminal: {}", e);
    }
    result
}

async fn run_ui(demo: &mut Demo, keymap: &Keymap) -> Result<()> {
    let mut renderer = Renderer::new()?;
    renderer.render(demo)?;

    // Event stream for async key reading
    let mut event_stream = EventStream::new();

    while demo.running {
        tokio::select! {
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(event)) => {
                    if let Event::Resize(width, height) = event {
                        renderer.resize(width, height);
                    }
                    input::handle_event(demo, keymap, event, renderer.transcript_height());
                    renderer.render(demo)?;
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            // Raw mode turns Ctrl-C into a key event; this only sees a SIGINT
            // sent from outside, e.g. `kill -INT`
            _ = tokio::signal::ctrl_c() => demo.quit(),
        }
    }

    Ok(())
}

fn run_batch(mut state: InterpreterState, source: Option<PathBuf>, json: bool) -> Result<()> {
    let picker_requests = match source {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            batch::run(&mut state, BufReader::new(file))?
        }
        None => batch::run(&mut state, io::stdin().lock())?,
    };

    let report = batch::Report::from_state(&state, picker_requests);
    let mut stdout = io::stdout().lock();
    if json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }
    Ok(())
}

/// Settings from the init script; a broken script falls back to defaults
fn load_settings(path: Option<&PathBuf>) -> Settings {
    let mut engine = ConfigEngine::new();
    let loaded = match path {
        Some(path) => engine.load_file(path),
        None => engine.load_default(),
    };
    match loaded {
        Ok(()) => engine.settings(),
        Err(e) => {
            warn!("config not applied: {}", e);
            Settings::default()
        }
    }
}

/// The terminal UI owns the screen, so its logs go to a file. Headless
/// runs log to stderr.
fn init_logging(level: LevelFilter, headless: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if !headless {
        match open_log_file() {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    builder.init();
}

fn open_log_file() -> io::Result<File> {
    let dir = dirs::data_local_dir()
        .map(|d| d.join("fkthemes-demo"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory"))?;
    fs::create_dir_all(&dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("demo.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_batch_without_file() {
        let cli = Cli::try_parse_from(["fkthemes-demo", "--batch"]).unwrap();
        assert_eq!(cli.batch, Some(None));
        assert!(!cli.json);
    }

    #[test]
    fn cli_parses_batch_with_file_and_json() {
        let cli =
            Cli::try_parse_from(["fkthemes-demo", "--batch", "cmds.txt", "--json"]).unwrap();
        assert_eq!(cli.batch, Some(Some(PathBuf::from("cmds.txt"))));
        assert!(cli.json);
    }

    #[test]
    fn cli_json_requires_batch() {
        assert!(Cli::try_parse_from(["fkthemes-demo", "--json"]).is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["fkthemes-demo"]).unwrap();
        assert!(cli.theme.is_none());
        assert!(cli.batch.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/fkthemes-demo/init.rhai");
        let settings = load_settings(Some(&path));
        assert_eq!(settings.theme, theme::DEFAULT_THEME);
    }

    #[test]
    fn loop_error_wins_over_restore_error() {
        let restored = Err(io::Error::other("leave alternate screen"));
        let err = finish_ui(Err(anyhow::anyhow!("event stream closed")), restored).unwrap_err();
        assert_eq!(err.to_string(), "event stream closed");
    }

    #[test]
    fn restore_error_alone_does_not_fail_the_run() {
        let restored = Err(io::Error::other("disable raw mode"));
        assert!(finish_ui(Ok(()), restored).is_ok());
    }
}
