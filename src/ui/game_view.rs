use crate::game::{Board, Cell, GameOutcome, GameState, Marker, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    current: Marker,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, current, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn marker_color(marker: Marker) -> Color {
    match marker.symbol() {
        'A' => Color::Red,
        'B' => Color::Yellow,
        _ => Color::Cyan,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    current: Marker,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(winner)) => {
            (format!("Game Over  |  {winner} wins"), marker_color(winner))
        }
        Some(GameOutcome::Draw) => ("Game Over  |  Draw".to_string(), Color::White),
        None => {
            let veto = if game_state.can_veto(current) {
                "veto available"
            } else {
                "no veto"
            };
            (format!("To move: {current}  |  {veto}"), marker_color(current))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Veto Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();
    let separator = format!("{}+", "+---".repeat(COLS));

    for row in 0..ROWS {
        lines.push(Line::from(separator.clone()));

        let mut row_spans = Vec::new();
        for col in 0..COLS {
            let cell = board.get(row, col);
            let style = match cell {
                Cell::Empty => Style::default().fg(Color::DarkGray),
                Cell::Vetoed => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                Cell::Marker(marker) => Style::default().fg(marker_color(marker)),
            };
            row_spans.push(Span::raw("| "));
            row_spans.push(Span::styled(cell.symbol().to_string(), style));
            row_spans.push(Span::raw(" "));
        }
        row_spans.push(Span::raw("|"));
        lines.push(Line::from(row_spans));
    }
    lines.push(Line::from(separator));

    // Column numbers with selection indicator
    let mut col_line = Vec::new();
    for col in 0..COLS {
        let label = format!("  {} ", col + 1);
        if col == selected_column {
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

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←/→: Select  |  Enter/D: Drop  |  V: Veto  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
