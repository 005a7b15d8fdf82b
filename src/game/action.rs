use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::board::{Board, COLS};
use crate::error::MoveError;

/// Set of moves currently playable, ordered drops first then by column.
pub type LegalMoves = BTreeSet<Move>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Drop,
    Veto,
}

impl Action {
    pub fn letter(self) -> char {
        match self {
            Action::Drop => 'd',
            Action::Veto => 'v',
        }
    }

    fn from_letter(letter: char) -> Option<Action> {
        match letter {
            'd' => Some(Action::Drop),
            'v' => Some(Action::Veto),
            _ => None,
        }
    }
}

/// An action on a 1-based column, written as a two-character token such as
/// `d4` or `v3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    action: Action,
    column: usize,
}

impl Move {
    /// Build a move; `None` if `column` is outside `1..=COLS`.
    pub fn new(action: Action, column: usize) -> Option<Move> {
        (1..=COLS)
            .contains(&column)
            .then_some(Move { action, column })
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// 1-based column as written in the token.
    pub fn column(&self) -> usize {
        self.column
    }

    /// 0-based column index into the board.
    pub fn index(&self) -> usize {
        self.column - 1
    }

    pub fn is_veto(&self) -> bool {
        self.action == Action::Veto
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.action.letter(), self.column)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    /// Accepts exactly `d` or `v` followed by one column digit.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveError::InvalidMove(token.to_string());

        let mut chars = token.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let action = Action::from_letter(letter).ok_or_else(invalid)?;
        let column = digit
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .ok_or_else(invalid)?;

        Move::new(action, column).ok_or_else(invalid)
    }
}

/// Moves playable on `board`: a drop on every open column, plus a veto on
/// the same columns when the actor may veto. Vetoed and full columns never
/// appear.
pub fn legal_moves(board: &Board, can_veto: bool) -> LegalMoves {
    let mut moves = LegalMoves::new();
    for col in (0..COLS).filter(|&col| board.is_column_open(col)) {
        let column = col + 1;
        moves.insert(Move { action: Action::Drop, column });
        if can_veto {
            moves.insert(Move { action: Action::Veto, column });
        }
    }
    moves
}
