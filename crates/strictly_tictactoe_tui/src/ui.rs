//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Board, GameEngine, Player, Position, Square};

use super::app::App;
use super::config::TuiConfig;

const HELP: &str = "arrows move | enter/1-9 play | r restart | q quit";

/// Renders the title, board, status bar and key help.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(config.title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, *config.show_cell_numbers());

    let mut status_lines = vec![Line::from(Span::styled(
        app.engine().current_status_message(),
        Style::default().fg(Color::Yellow),
    ))];
    if let Some(notice) = app.notice() {
        status_lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(status_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, show_numbers: bool) {
    let board_area = center_rect(area, 38, 11);
    let playable = app.engine().valid_moves();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, &playable, show_numbers, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    playable: &[Position],
    show_numbers: bool,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, chunk, app, playable.contains(&pos), show_numbers, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    playable: bool,
    show_numbers: bool,
    pos: Position,
) {
    let engine = app.engine();
    let symbol = cell_symbol(engine.board(), pos, playable && show_numbers);

    let base_style = match engine.board().get(pos) {
        Square::Empty if playable => Style::default().fg(Color::DarkGray),
        Square::Empty => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if on_winning_line(engine, pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !engine.status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark within the 3-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Text shown inside a cell. `hint` adds the 1-9 key number to empty cells.
fn cell_symbol(board: &Board, pos: Position, hint: bool) -> String {
    match board.get(pos) {
        Square::Occupied(player) => format!(" {} ", player),
        Square::Empty if hint => format!(" {} ", pos.to_index() + 1),
        Square::Empty => "   ".to_string(),
    }
}

fn on_winning_line(engine: &GameEngine, pos: Position) -> bool {
    engine
        .winning_line()
        .is_some_and(|line| line.contains(&pos))
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
