use tracing::{debug, info, instrument};

use super::action::{legal_moves, Action, LegalMoves, Move};
use super::board::{Board, COLS, ROWS};
use super::player::Marker;
use super::rules;
use super::scanner::is_winning_cell;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Marker),
    Draw,
}

/// The single pending veto, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VetoState {
    column: Option<usize>,
    moves_since_veto: u32,
}

impl VetoState {
    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// 1-based column currently vetoed.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn moves_since_veto(&self) -> u32 {
        self.moves_since_veto
    }

    fn arm(&mut self, column: usize) {
        self.column = Some(column);
        self.moves_since_veto = 0;
    }

    /// Count one accepted move. Returns the column to reopen once a full move
    /// has passed since the veto went down.
    fn advance(&mut self) -> Option<usize> {
        let column = self.column?;
        if self.moves_since_veto >= 1 {
            *self = VetoState::default();
            Some(column)
        } else {
            self.moves_since_veto += 1;
            None
        }
    }
}

/// Accepted moves in play order, tagged with the actor who made them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<(Marker, Move)>,
}

impl MoveHistory {
    fn push(&mut self, actor: Marker, mv: Move) {
        self.entries.push((actor, mv));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves made by one actor, oldest first.
    pub fn by(&self, actor: Marker) -> impl Iterator<Item = &Move> {
        self.entries
            .iter()
            .filter(move |(who, _)| *who == actor)
            .map(|(_, mv)| mv)
    }

    /// The actor's most recent move.
    pub fn last_by(&self, actor: Marker) -> Option<&Move> {
        self.entries
            .iter()
            .rev()
            .find(|(who, _)| *who == actor)
            .map(|(_, mv)| mv)
    }
}

/// Board, veto lifecycle, history and outcome for one game. Turn order is
/// the caller's business: any actor may commit, and only legality is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    veto: VetoState,
    history: MoveHistory,
    drops: usize,
    vetoes: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Fresh empty grid, no vetoes, game ongoing.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            veto: VetoState::default(),
            history: MoveHistory::default(),
            drops: 0,
            vetoes: 0,
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn veto(&self) -> &VetoState {
        &self.veto
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn drop_count(&self) -> usize {
        self.drops
    }

    pub fn veto_count(&self) -> usize {
        self.vetoes
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Marker> {
        match self.outcome {
            Some(GameOutcome::Winner(marker)) => Some(marker),
            _ => None,
        }
    }

    /// Whether `actor` may veto on this turn.
    pub fn can_veto(&self, actor: Marker) -> bool {
        rules::can_veto(&self.board, self.history.last_by(actor))
    }

    /// Moves `actor` could commit right now. Empty once the game is over.
    pub fn legal_moves(&self, actor: Marker) -> LegalMoves {
        if self.is_over() {
            return LegalMoves::new();
        }
        legal_moves(&self.board, self.can_veto(actor))
    }

    /// Validate and apply one move token for `actor`.
    ///
    /// Nothing changes when the token is rejected. On success the accepted
    /// move is returned.
    #[instrument(skip(self, actor), fields(actor = %actor.symbol()))]
    pub fn commit_move(&mut self, token: &str, actor: Marker) -> Result<Move, MoveError> {
        let mv: Move = token.parse()?;
        if !self.legal_moves(actor).contains(&mv) {
            return Err(MoveError::IllegalMove(token.to_string()));
        }

        let landed = match mv.action() {
            Action::Drop => {
                let row = self
                    .board
                    .drop_piece(mv.index(), actor)
                    .map_err(|_| MoveError::IllegalMove(token.to_string()))?;
                self.drops += 1;
                debug!(column = mv.column(), row, "piece dropped");
                Some(row)
            }
            Action::Veto => {
                let cells = self.board.apply_veto(mv.index());
                self.vetoes += 1;
                self.veto.arm(mv.column());
                debug!(column = mv.column(), cells, "column vetoed");
                None
            }
        };

        self.history.push(actor, mv);

        if self.drops == ROWS * COLS {
            self.outcome = Some(GameOutcome::Draw);
            info!(drops = self.drops, "board full, game drawn");
        } else if landed.is_some_and(|row| is_winning_cell(&self.board, row, mv.index())) {
            self.outcome = Some(GameOutcome::Winner(actor));
            info!(winner = %actor, "four in a row");
        }

        if let Some(column) = self.veto.advance() {
            let cells = self.board.clear_vetoes(column - 1);
            debug!(column, cells, "veto expired");
        }

        Ok(mv)
    }

    /// Text rendering of the board for display.
    pub fn render(&self) -> String {
        self.board.to_string()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
