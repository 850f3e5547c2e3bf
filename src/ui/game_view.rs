use crate::game::{Board, GameSession, Piece};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, session: &GameSession, cursor: usize, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session.board(), cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_style(piece: Piece) -> Style {
    let color = match piece {
        Piece::Red => Color::Red,
        Piece::Yellow => Color::Yellow,
    };
    Style::default().fg(color)
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let current = session.current_piece();
    let status = if session.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", current.name())
    };

    let header = Paragraph::new(status)
        .style(piece_style(current).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, cursor: usize, area: Rect) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator. Every line is padded to the
    // bordered row width so center alignment keeps them flush.
    let mut col_line = vec![Span::raw(" ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == cursor {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw(" "));
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!("╔{}╗", "═".repeat(3 * cols))));

    // Board rows
    for row_cells in board.iter_rows() {
        let mut row_spans = vec![Span::raw("║")];
        for &cell in row_cells {
            match cell {
                None => row_spans.push(Span::styled(" . ", Style::default().fg(Color::DarkGray))),
                Some(piece) => row_spans.push(Span::styled(" ● ", piece_style(piece))),
            }
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("╚{}╝", "═".repeat(3 * cols))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw(" ")];
    for col in 0..cols {
        if col == cursor {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw(" "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  N: New Game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
