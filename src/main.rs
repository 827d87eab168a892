//! Binary entrypoint for Amulet Descent.
//!
//! Without `--script` the game opens a terminal window and reads one key per
//! turn. With `--script <file>` the commands are replayed headless and the
//! final status is printed.
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use amulet_descent::{
    Command, Config, FlowState, Session,
    render::{self, Frame},
    scripted_input::ScriptedInput,
};
use anyhow::{Context, Result, anyhow};
use bracket_terminal::prelude::*;
use clap::Parser;
use log::info;

const LOG_MAX_ENTRIES: usize = 8;
const DEFAULT_LOG_FILE: &str = "amulet-descent.log";

#[derive(Parser)]
#[command(name = "amulet-descent")]
#[command(about = "Find the amulet and carry it out of the dungeon")]
#[command(version)]
struct Cli {
    /// JSON game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replay commands from a file instead of reading the keyboard
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Where interactive play writes its log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct DescentState {
    session: Session,
    message_log: Vec<String>,
}

impl GameState for DescentState {
    fn tick(&mut self, ctx: &mut BTerm) {
        if self.session.state().is_terminal() {
            if ctx.key.is_some() {
                ctx.quit();
            }
            return;
        }

        let input = if self.session.state().needs_input() {
            let Some(command) = ctx.key.and_then(|key| key_to_command(key, ctx.shift)) else {
                return;
            };
            Some(command)
        } else {
            None
        };
        self.session.tick(input);

        let frame = Frame::capture(&mut self.session);
        for entry in &frame.messages {
            self.push_log_entry(entry.clone());
        }
        render::draw_frame(ctx, self.session.map(), &frame, &self.message_log);
    }
}

impl DescentState {
    fn new(session: Session) -> Self {
        Self {
            session,
            message_log: Vec::new(),
        }
    }

    fn push_log_entry<S: Into<String>>(&mut self, entry: S) {
        self.message_log.insert(0, entry.into());
        self.message_log.truncate(LOG_MAX_ENTRIES);
    }
}

/// The keyboard stands in for the character alphabet; shifted letters are
/// not part of it. Modifier keys on their own are not a turn.
fn key_to_command(key: VirtualKeyCode, shift: bool) -> Option<Command> {
    if is_modifier(key) {
        return None;
    }
    if shift {
        return Some(Command::Wait);
    }
    let command = match key {
        VirtualKeyCode::W | VirtualKeyCode::Up => Command::Up,
        VirtualKeyCode::A | VirtualKeyCode::Left => Command::Left,
        VirtualKeyCode::S | VirtualKeyCode::Down => Command::Down,
        VirtualKeyCode::D | VirtualKeyCode::Right => Command::Right,
        VirtualKeyCode::V => Command::Descend,
        VirtualKeyCode::C => Command::Ascend,
        VirtualKeyCode::Q | VirtualKeyCode::Escape => Command::Quit,
        _ => Command::Wait,
    };
    Some(command)
}

fn is_modifier(key: VirtualKeyCode) -> bool {
    matches!(
        key,
        VirtualKeyCode::LShift
            | VirtualKeyCode::RShift
            | VirtualKeyCode::LControl
            | VirtualKeyCode::RControl
            | VirtualKeyCode::LAlt
            | VirtualKeyCode::RAlt
            | VirtualKeyCode::LWin
            | VirtualKeyCode::RWin
    )
}

fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.parse_default_env();
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder
        .try_init()
        .map_err(|e| anyhow!("logger already initialised: {e}"))
}

fn run_headless(session: &mut Session, script: ScriptedInput) -> FlowState {
    let state = session.run_commands(script);
    let frame = Frame::capture(session);
    println!("{}", frame.top_status);
    println!("{}", frame.bottom_status);
    println!("state: {state:?}");
    state
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(script_path) = &cli.script {
        init_logging(cli.verbose, cli.log_file.as_deref())?;
        let script = ScriptedInput::from_file(script_path)
            .with_context(|| format!("loading script {}", script_path.display()))?;
        info!("replaying {} commands", script.len());
        let mut session = Session::new(config);
        run_headless(&mut session, script);
        return Ok(());
    }

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    init_logging(cli.verbose, Some(&log_file))?;
    info!("Starting Amulet Descent v{}", env!("CARGO_PKG_VERSION"));

    let context = BTermBuilder::simple80x50()
        .with_title("Amulet Descent")
        .build()
        .map_err(|e| anyhow!("could not open terminal: {e}"))?;
    let game_state = DescentState::new(Session::new(config));
    main_loop(context, game_state).map_err(|e| anyhow!("main loop failed: {e}"))
}
