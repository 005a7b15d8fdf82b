use std::fmt;

use super::board::Cell;

/// Letters available as player markers, in assignment order.
pub const MARKER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The symbol identifying one actor's pieces. Always an uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Marker(char);

impl Marker {
    /// Marker of the first seat.
    pub const FIRST: Marker = Marker('A');
    /// Marker of the second seat.
    pub const SECOND: Marker = Marker('B');

    /// Create a marker from an uppercase letter.
    pub fn new(symbol: char) -> Option<Marker> {
        symbol.is_ascii_uppercase().then_some(Marker(symbol))
    }

    /// The `index`-th marker (0 is `A`).
    pub fn nth(index: usize) -> Option<Marker> {
        MARKER_LETTERS.chars().nth(index).map(Marker)
    }

    pub fn symbol(self) -> char {
        self.0
    }

    /// Convert marker to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Marker(self)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player ({})", self.0)
    }
}

/// Hands out markers for one game. A marker is never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct MarkerPool {
    issued: usize,
}

impl MarkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused marker, or `None` once all 26 letters are taken.
    pub fn next_marker(&mut self) -> Option<Marker> {
        let marker = Marker::nth(self.issued)?;
        self.issued += 1;
        Some(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_accepts_uppercase_only() {
        assert_eq!(Marker::new('A').map(Marker::symbol), Some('A'));
        assert_eq!(Marker::new('a'), None);
        assert_eq!(Marker::new('_'), None);
        assert_eq!(Marker::new('7'), None);
    }

    #[test]
    fn test_seat_markers_match_pool_order() {
        let mut pool = MarkerPool::new();
        assert_eq!(pool.next_marker(), Some(Marker::FIRST));
        assert_eq!(pool.next_marker(), Some(Marker::SECOND));
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::new('Q').unwrap().to_string(), "Player (Q)");
    }

    #[test]
    fn test_pool_issues_unique_markers_in_order() {
        let mut pool = MarkerPool::new();
        let issued: Vec<char> = std::iter::from_fn(|| pool.next_marker())
            .map(Marker::symbol)
            .collect();

        assert_eq!(issued.len(), 26);
        assert_eq!(issued.iter().collect::<String>(), MARKER_LETTERS);
        assert_eq!(pool.next_marker(), None);
    }

    #[test]
    fn test_marker_cell_is_distinct_from_sentinels() {
        let x = Marker::new('X').unwrap().to_cell();
        assert_ne!(x, Cell::Vetoed);
        assert_ne!(x, Cell::Empty);
    }
}
