use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use veto_connect_four::ai::{Agent, HumanAgent, RandomAgent, SharedInput};
use veto_connect_four::config::{AppConfig, ComputerConfig, GameMode, PlayerKind, PlayersConfig};
use veto_connect_four::game::{Marker, MarkerPool};
use veto_connect_four::session::Session;
use veto_connect_four::ui::App;

/// Play Connect Four with column vetoes.
#[derive(Parser)]
#[command(name = "veto-connect-four", about = "Play Connect Four with column vetoes")]
struct Cli {
    /// Game type: 1 human vs computer, 2 human vs human, 3 computer vs computer
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    mode: Option<u8>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "veto_connect_four.toml")]
    config: PathBuf,

    /// Override the computer's thinking pause, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed the computer players for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Use the full-screen terminal view
    #[arg(long)]
    tui: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

type Input = SharedInput<StdinLock<'static>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(delay_ms) = cli.delay_ms {
        config.computer.think_delay_ms = delay_ms;
    }
    if let Some(seed) = cli.seed {
        config.computer.seed = Some(seed);
    }
    if cli.tui {
        config.display.tui = true;
    }
    config.validate()?;

    let input: Input = Rc::new(RefCell::new(io::stdin().lock()));
    let players = match (cli.mode, config.players) {
        (Some(choice), _) => mode_from_choice(choice)?.seats(),
        (None, Some(players)) => players,
        (None, None) => ask_game_mode(&input)?.seats(),
    };
    info!(?players, "starting game");

    if config.display.tui {
        drop(input);
        run_tui(players, &config.computer)
    } else {
        run_text(players, &config.computer, input)
    }
}

fn mode_from_choice(choice: u8) -> Result<GameMode> {
    match GameMode::from_menu(choice) {
        Some(mode) => Ok(mode),
        None => bail!("unknown game type '{}' (expected 1, 2 or 3)", choice),
    }
}

fn ask_game_mode(input: &Input) -> Result<GameMode> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "What type of game would you like?")?;
    writeln!(stdout, "1: Human vs. Computer")?;
    writeln!(stdout, "2: Human vs. Human")?;
    writeln!(stdout, "3: Computer vs. Computer")?;
    write!(stdout, "Please enter the game type (1/2/3): ")?;
    stdout.flush()?;

    let mut line = String::new();
    input
        .borrow_mut()
        .read_line(&mut line)
        .context("reading the game type")?;
    let choice: u8 = line
        .trim()
        .parse()
        .with_context(|| format!("game type '{}' is not a number", line.trim()))?;
    mode_from_choice(choice)
}

fn make_agent(
    kind: PlayerKind,
    marker: Marker,
    seed_offset: u64,
    computer: &ComputerConfig,
    input: &Input,
) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(HumanAgent::new(marker, Rc::clone(input))),
        PlayerKind::Computer => {
            let agent = match computer.seed {
                Some(seed) => RandomAgent::with_seed(marker, seed.wrapping_add(seed_offset)),
                None => RandomAgent::new(marker),
            };
            Box::new(agent.with_think_delay(Duration::from_millis(computer.think_delay_ms)))
        }
    }
}

/// Markers for the two seats, in play order.
fn seat_markers() -> Result<[Marker; 2]> {
    let mut pool = MarkerPool::new();
    let first = pool.next_marker().context("no marker left for seat 1")?;
    let second = pool.next_marker().context("no marker left for seat 2")?;
    Ok([first, second])
}

fn run_text(players: PlayersConfig, computer: &ComputerConfig, input: Input) -> Result<()> {
    let [first, second] = players.kinds();
    let [first_marker, second_marker] = seat_markers()?;

    let seats = [
        make_agent(first, first_marker, 0, computer, &input),
        make_agent(second, second_marker, 1, computer, &input),
    ];

    let mut session = Session::new(seats, io::stdout().lock());
    session.run().context("game aborted")?;
    Ok(())
}

fn run_tui(players: PlayersConfig, computer: &ComputerConfig) -> Result<()> {
    let markers = seat_markers()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(players, markers, computer);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
