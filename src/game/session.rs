use super::{check_win, Board, Piece};

/// Where the game stands after the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Piece),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// The cell a successfully played piece landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

/// One round of Connect Four: a board, the piece to move, and the status.
///
/// Red always moves first. Sessions are independent of each other; start a
/// new round by constructing a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current: Piece,
    status: GameStatus,
}

impl GameSession {
    /// Create a session with an empty board of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameSession {
            board: Board::new(rows, cols),
            current: Piece::Red,
            status: GameStatus::InProgress,
        }
    }

    /// Get reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece that moves next; after a win, the winning piece.
    pub fn current_piece(&self) -> Piece {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Drop the current piece into `column`.
    ///
    /// A rejected move leaves the board, the status, and the turn untouched;
    /// the caller is expected to ask for another column. After a successful
    /// placement the status is re-evaluated, and the turn passes to the
    /// other piece only while the game continues.
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.cols() {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.board.landing_row(column).ok_or(MoveError::ColumnFull)?;

        let placed = self.board.place(row, column, self.current);
        debug_assert!(placed, "landing row must be an empty cell");

        if check_win(&self.board, self.current) {
            self.status = GameStatus::Won(self.current);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current = self.current.other();
        }

        Ok(Placement { row, column })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_session() {
        let session = GameSession::new(6, 7);
        assert_eq!(session.current_piece(), Piece::Red);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.is_terminal());
    }

    #[test]
    fn test_play_lands_at_bottom_and_switches_turn() {
        let mut session = GameSession::new(6, 7);
        let placement = session.play(3).unwrap();
        assert_eq!(placement, Placement { row: 5, column: 3 });
        assert_eq!(session.board().get(5, 3).unwrap(), Some(Piece::Red));
        assert_eq!(session.current_piece(), Piece::Yellow);
    }

    #[test]
    fn test_rejected_move_keeps_turn_and_board() {
        let mut session = GameSession::new(6, 7);
        // Fill column 0
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(0).unwrap();
        }
        let before = session.clone();

        assert_eq!(session.play(0), Err(MoveError::ColumnFull));
        assert_eq!(session.play(9), Err(MoveError::InvalidColumn));
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_column_always_rejected() {
        let mut session = GameSession::new(6, 7);
        assert_eq!(session.play(10), Err(MoveError::InvalidColumn));
        session.play(3).unwrap();
        assert_eq!(session.play(10), Err(MoveError::InvalidColumn));
        assert_eq!(session.play(7), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let mut session = GameSession::new(6, 7);
        // Red stacks column 0, Yellow answers in column 1
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(1).unwrap();
        }
        session.play(0).unwrap();

        assert_eq!(session.status(), GameStatus::Won(Piece::Red));
        assert!(session.is_terminal());
        // The winner stays current for reporting
        assert_eq!(session.current_piece(), Piece::Red);
        assert_eq!(session.play(2), Err(MoveError::GameOver));
    }

    #[test]
    fn test_horizontal_win_ends_game() {
        let mut session = GameSession::new(6, 7);
        for col in 0..3 {
            session.play(col).unwrap(); // Red, bottom row
            session.play(col).unwrap(); // Yellow, on top
        }
        session.play(3).unwrap();

        assert_eq!(session.status(), GameStatus::Won(Piece::Red));
        assert_eq!(session.current_piece(), Piece::Red);
    }

    #[test]
    fn test_yellow_can_win() {
        let mut session = GameSession::new(6, 7);
        // Red wastes moves in columns 5 and 6 while Yellow stacks column 2
        session.play(5).unwrap();
        session.play(2).unwrap();
        session.play(6).unwrap();
        session.play(2).unwrap();
        session.play(5).unwrap();
        session.play(2).unwrap();
        session.play(6).unwrap();
        session.play(2).unwrap();

        assert_eq!(session.status(), GameStatus::Won(Piece::Yellow));
        assert_eq!(session.current_piece(), Piece::Yellow);
    }

    /// Fills a 6x7 board without ever making four in a row: columns 0 and 2
    /// (then 1 and 5) are interleaved so their stacks alternate in opposite
    /// phase, and the remaining columns are filled straight up, which leaves
    /// no run longer than three anywhere.
    const DRAW_SEQUENCE: [usize; 42] = [
        0, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 0, // columns 0 and 2
        1, 5, 5, 1, 1, 5, 5, 1, 1, 5, 5, 1, // columns 1 and 5
        3, 3, 3, 3, 3, 3, // column 3
        4, 4, 4, 4, 4, 4, // column 4
        6, 6, 6, 6, 6, 6, // column 6
    ];

    #[test]
    fn test_full_board_without_a_line_is_a_draw() {
        let mut session = GameSession::new(6, 7);
        for (i, &col) in DRAW_SEQUENCE.iter().enumerate() {
            session.play(col).unwrap();
            if i < DRAW_SEQUENCE.len() - 1 {
                assert_eq!(session.status(), GameStatus::InProgress, "move {}", i);
            }
        }
        assert_eq!(session.status(), GameStatus::Draw);
        assert!(session.board().is_full());
        assert_eq!(session.play(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = GameSession::new(6, 7);
        let b = GameSession::new(6, 7);
        a.play(0).unwrap();
        assert_eq!(b.board().get(5, 0).unwrap(), None);
    }
}
