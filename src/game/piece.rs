#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Red,
    Yellow,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Red => Piece::Yellow,
            Piece::Yellow => Piece::Red,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Red => "Red",
            Piece::Yellow => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::Red.other(), Piece::Yellow);
        assert_eq!(Piece::Yellow.other(), Piece::Red);
    }

    #[test]
    fn test_piece_name() {
        assert_eq!(Piece::Red.name(), "Red");
        assert_eq!(Piece::Yellow.name(), "Yellow");
    }
}
