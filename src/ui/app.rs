use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use tracing::warn;

use crate::ai::{Agent, RandomAgent};
use crate::config::{ComputerConfig, PlayerKind, PlayersConfig};
use crate::game::{Action, GameOutcome, GameState, Marker, Move, COLS};

/// One seat at the table. Computer seats move on their own once their
/// thinking delay has passed.
enum Seat {
    Human(Marker),
    Computer(RandomAgent),
}

impl Seat {
    fn marker(&self) -> Marker {
        match self {
            Seat::Human(marker) => *marker,
            Seat::Computer(agent) => agent.marker(),
        }
    }
}

pub struct App {
    game_state: GameState,
    seats: [Seat; 2],
    turn: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    think_delay: Duration,
    computer_due: Option<Instant>,
}

impl App {
    /// `markers` are the seat markers in play order, as handed out by a
    /// [`MarkerPool`](crate::game::MarkerPool).
    pub fn new(players: PlayersConfig, markers: [Marker; 2], computer: &ComputerConfig) -> Self {
        let [first, second] = players.kinds();
        let [first_marker, second_marker] = markers;
        let seats = [
            Self::seat(first, first_marker, computer.seed),
            Self::seat(second, second_marker, computer.seed.map(|s| s.wrapping_add(1))),
        ];

        App {
            game_state: GameState::new(),
            seats,
            turn: 0,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            think_delay: Duration::from_millis(computer.think_delay_ms),
            computer_due: None,
        }
    }

    fn seat(kind: PlayerKind, marker: Marker, seed: Option<u64>) -> Seat {
        match kind {
            PlayerKind::Human => Seat::Human(marker),
            PlayerKind::Computer => Seat::Computer(match seed {
                Some(seed) => RandomAgent::with_seed(marker, seed),
                None => RandomAgent::new(marker),
            }),
        }
    }

    fn current_marker(&self) -> Marker {
        self.seats[self.turn % 2].marker()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            if self.computer_to_move() {
                self.step_computer();
            }
            self.handle_events()?;
        }
        Ok(())
    }

    fn computer_to_move(&self) -> bool {
        !self.game_state.is_over() && matches!(self.seats[self.turn % 2], Seat::Computer(_))
    }

    /// Let a computer seat move once its delay has elapsed.
    fn step_computer(&mut self) {
        let now = Instant::now();
        let due = *self.computer_due.get_or_insert(now + self.think_delay);
        if now < due {
            return;
        }
        self.computer_due = None;

        let Seat::Computer(agent) = &mut self.seats[self.turn % 2] else {
            return;
        };
        match agent.generate_move(&self.game_state) {
            Ok(token) => self.commit(&token),
            Err(err) => {
                warn!(%err, "computer could not move");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::new();
                self.turn = 0;
                self.selected_column = COLS / 2;
                self.computer_due = None;
                self.message = Some("New game started!".to_string());
            }
            _ if self.computer_to_move() => {}
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('d') => {
                self.play_selected(Action::Drop);
            }
            KeyCode::Char('v') => {
                self.play_selected(Action::Veto);
            }
            _ => {}
        }
    }

    fn play_selected(&mut self, action: Action) {
        if self.game_state.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if let Some(mv) = Move::new(action, self.selected_column + 1) {
            self.commit(&mv.to_string());
        }
    }

    fn commit(&mut self, token: &str) {
        let marker = self.current_marker();
        match self.game_state.commit_move(token, marker) {
            Ok(mv) => {
                self.turn += 1;
                self.message = Some(match self.game_state.outcome() {
                    Some(GameOutcome::Winner(winner)) => format!("{winner} wins!"),
                    Some(GameOutcome::Draw) => "It's a draw!".to_string(),
                    None => format!("{marker} played {mv}"),
                });
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let current = self.current_marker();
        super::game_view::render(
            frame,
            &self.game_state,
            current,
            self.selected_column,
            &self.message,
        );
    }
}
