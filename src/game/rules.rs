use super::action::Move;
use super::board::Board;

/// Whether an actor may veto this turn.
///
/// All three must hold:
/// - no column is currently vetoed,
/// - the actor's own previous move was not a veto,
/// - more than one column is still available, so the opponent keeps at least
///   one playable column.
pub fn can_veto(board: &Board, last_own_move: Option<&Move>) -> bool {
    !board.contains_veto()
        && !last_own_move.is_some_and(Move::is_veto)
        && board.available_column_count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, Marker, COLS, ROWS};

    fn fill_column(board: &mut Board, col: usize) {
        let marker = Marker::new('A').unwrap();
        for _ in 0..ROWS {
            board.drop_piece(col, marker).unwrap();
        }
    }

    #[test]
    fn test_fresh_actor_may_veto() {
        assert!(can_veto(&Board::new(), None));
    }

    #[test]
    fn test_pending_veto_blocks_another() {
        let mut board = Board::new();
        board.apply_veto(2);
        assert!(!can_veto(&board, None));
    }

    #[test]
    fn test_consecutive_vetoes_are_refused() {
        let board = Board::new();
        let veto = Move::new(Action::Veto, 5).unwrap();
        let drop = Move::new(Action::Drop, 5).unwrap();

        assert!(!can_veto(&board, Some(&veto)));
        assert!(can_veto(&board, Some(&drop)));
    }

    #[test]
    fn test_last_open_column_cannot_be_vetoed() {
        let mut board = Board::new();
        for col in 0..COLS - 2 {
            fill_column(&mut board, col);
        }
        assert!(can_veto(&board, None));

        fill_column(&mut board, COLS - 2);
        assert_eq!(board.available_column_count(), 1);
        assert!(!can_veto(&board, None));
    }
}
