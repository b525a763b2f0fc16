use crate::game::{Cell, Coordinate, Game, GameResult, PlayerId, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game: &Game, selected_column: usize, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => Color::Red,
        PlayerId::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let current = game.current_player();
    let mark = game.player(current).mark();

    let status = match game.result() {
        GameResult::InProgress => format!("{} ({mark}) to move", current.name()),
        GameResult::Win(winner) => format!("Game Over  |  {} ({mark}) wins", winner.name()),
        GameResult::Draw => "Game Over  |  Draw".to_string(),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) {
    let empty_mark = game.config().empty_mark;
    let winning: Vec<Coordinate> = game
        .winning_run()
        .map(|run| run.to_vec())
        .unwrap_or_default();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
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
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let inner_width = COLS * 3 + 1;
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    // Highest row first so pieces appear to fall
    for (row, cells) in game.board().rows().enumerate().rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let span = match cell {
                Cell::Empty => {
                    Span::styled(format!(" {empty_mark} "), Style::default().fg(Color::DarkGray))
                }
                Cell::Occupied(mark) => {
                    let owner = if mark == game.player(PlayerId::One).mark() {
                        PlayerId::One
                    } else {
                        PlayerId::Two
                    };
                    let mut style = Style::default()
                        .fg(player_color(owner))
                        .add_modifier(Modifier::BOLD);
                    if winning.contains(&Coordinate::new(col, row)) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {mark} "), style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
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
    let line = Line::from("←/→: Move  |  Enter or 1-7: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
