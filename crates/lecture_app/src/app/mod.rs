mod args;
mod config;
mod effects;
mod interactive;
mod logging;
mod render;
mod session;

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use lecture_core::{AppState, Msg, Notice, Outcome};
use lecture_engine::{EngineEvent, EngineHandle, SystemClipboard};
use lecture_logging::{lecture_error, lecture_info};

use args::{Cli, Command, InteractiveArgs, ProcessArgs};
use config::AppConfig;
use effects::EffectRunner;
use render::{RenderStyle, Renderer};
use session::Session;

pub fn run_app() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url.clone() {
        config.base_url = base_url;
    }
    if let Some(export_dir) = cli.export_dir.clone() {
        config.export_dir = export_dir;
    }

    let level = lecture_logging::effective_level(&config.log_level, cli.verbose, cli.quiet);
    logging::initialize(config.log_destination, level);
    lecture_info!("Using processing service at {}", config.base_url);

    match cli.command {
        Command::Process(args) => run_process(args, &config),
        Command::Interactive(args) => run_interactive(args, &config),
        Command::Modes => {
            let mut renderer = Renderer::new(io::stdout(), io::stderr(), RenderStyle::Decorated);
            renderer.write_modes()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ping => run_ping(&config),
    }
}

fn run_process(args: ProcessArgs, config: &AppConfig) -> Result<ExitCode> {
    // The process exits right after copying, so the clipboard must outlive it.
    let clipboard = SystemClipboard::holding(config.clipboard_hold());
    let runner = EffectRunner::new(config, Box::new(clipboard))?;
    let mode = args.mode.unwrap_or(config.default_mode);
    let renderer = Renderer::new(io::stdout(), io::stderr(), RenderStyle::Plain);
    let mut session = Session::new(AppState::with_mode(mode), runner, renderer);

    match (args.text, args.file) {
        (Some(text), _) => session.dispatch(Msg::InputChanged(text))?,
        (None, Some(path)) => {
            session.dispatch(Msg::LoadFileRequested { path })?;
            if matches!(session.state().notice(), Some(Notice::Error(_))) {
                return Ok(ExitCode::FAILURE);
            }
        }
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read text from stdin")?;
            session.dispatch(Msg::InputChanged(text))?;
        }
    }

    session.dispatch(Msg::SubmitClicked)?;
    match session.state().outcome() {
        Some(Outcome::Success { .. }) => {}
        Some(Outcome::Failure { .. }) | None => return Ok(ExitCode::FAILURE),
    }

    if args.copy {
        session.dispatch(Msg::CopyClicked)?;
    }
    if args.save || args.output.is_some() {
        session.dispatch(Msg::ExportOutputClicked {
            filename: args.output,
        })?;
    }
    if matches!(session.state().notice(), Some(Notice::Error(_))) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_interactive(args: InteractiveArgs, config: &AppConfig) -> Result<ExitCode> {
    let runner = EffectRunner::new(config, Box::new(SystemClipboard::new()))?;
    let mode = args.mode.unwrap_or(config.default_mode);
    let renderer = Renderer::new(io::stdout(), io::stderr(), RenderStyle::Decorated);
    let mut session = Session::new(AppState::with_mode(mode), runner, renderer);

    interactive::run(&mut session, io::stdin().lock())?;
    Ok(ExitCode::SUCCESS)
}

fn run_ping(config: &AppConfig) -> Result<ExitCode> {
    let engine = EngineHandle::new(config.processor_settings())?;
    engine.health();
    match engine.recv_timeout(config.response_wait()) {
        Some(EngineEvent::Health(Ok(message))) => {
            println!("{}: {message}", config.base_url);
            Ok(ExitCode::SUCCESS)
        }
        Some(EngineEvent::Health(Err(err))) => {
            lecture_error!("Health check failed: {}", err);
            println!("{}: unreachable ({err})", config.base_url);
            Ok(ExitCode::FAILURE)
        }
        Some(other) => bail!("unexpected engine event {other:?}"),
        None => bail!("no answer from {} in time", config.base_url),
    }
}
