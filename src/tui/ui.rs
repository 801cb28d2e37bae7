//! UI rendering for the board, prompts and status bars.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use crate::board::{BoardModel, Coord, Square, heat_color};
use crate::machine::{BoardStatus, ClientState, Phase, StatusLine};

const CELL_WIDTH: usize = 5;
const LABEL_WIDTH: usize = 3;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Broadside · game {}", app.game_id()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let state = app.state();
    match state.board() {
        BoardStatus::Ready(model) => draw_board(frame, chunks[1], state, model, app.cursor()),
        BoardStatus::Loading => draw_placeholder(frame, chunks[1], "Loading board…", Color::Gray),
        BoardStatus::Unavailable(reason) => draw_placeholder(
            frame,
            chunks[1],
            &format!("Board unavailable: {reason}\n\nPress R to reload."),
            Color::Red,
        ),
    }

    frame.render_widget(status_bar(state), chunks[2]);
    frame.render_widget(help_bar(state), chunks[3]);

    if let Some(prompt) = state.prompt() {
        draw_dialog(
            frame,
            &prompt.to_string(),
            "[y] Yes    [n] No",
            Color::Cyan,
        );
    } else if let Some((pending, error)) = state.failure() {
        draw_dialog(
            frame,
            &format!("Could not complete {pending}:\n{error}"),
            "[r] Retry    [Esc] Dismiss",
            Color::Red,
        );
    }
}

fn draw_board(frame: &mut Frame, area: Rect, state: &ClientState, model: &BoardModel, cursor: Coord) {
    let size = model.size();
    let mut lines = Vec::with_capacity(size + 1);

    // Highest row on top.
    for row in (0..size).rev() {
        let mut spans = vec![Span::styled(
            format!("{row:>2} "),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend((0..size).map(|col| cell_span(state, model, Coord::new(row, col), cursor)));
        lines.push(Line::from(spans));
    }

    let mut labels = " ".repeat(LABEL_WIDTH);
    for col in 0..size {
        labels.push_str(&format!("{col:^width$}", width = CELL_WIDTH));
    }
    lines.push(Line::from(Span::styled(
        labels,
        Style::default().fg(Color::DarkGray),
    )));

    let width = (LABEL_WIDTH + CELL_WIDTH * size + 2) as u16;
    let height = (size + 3) as u16;
    let board = Paragraph::new(lines).block(Block::default().title("Board").borders(Borders::ALL));
    frame.render_widget(board, center_rect(area, width, height));
}

fn cell_span(state: &ClientState, model: &BoardModel, coord: Coord, cursor: Coord) -> Span<'static> {
    let square = model.square(coord).unwrap_or_default();
    let pending = square == Square::Open && state.pending_hit() == Some(coord);

    let (text, mut style) = match square {
        Square::Open if pending => (
            "?".to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Open => {
            let score = model.score(coord).unwrap_or(0.0);
            let (r, g, b) = heat_color(score);
            (
                format_score(score),
                Style::default().fg(Color::White).bg(Color::Rgb(r, g, b)),
            )
        }
        Square::Miss => ("○".to_string(), Style::default().fg(Color::Gray)),
        Square::Hit => (
            "●".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Sunk => (
            "X".to_string(),
            Style::default()
                .fg(Color::LightRed)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if state.phase().selection() == Some(coord) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if state.sunk_members().contains(&coord) {
        style = style.bg(Color::Magenta);
    }
    if coord == cursor {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    Span::styled(format!("{text:^width$}", width = CELL_WIDTH), style)
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let panel = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, center_rect(area, 50, 7));
}

fn draw_dialog(frame: &mut Frame, message: &str, choices: &str, color: Color) {
    let area = center_rect(frame.area(), 46, 7);
    let text = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            choices.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn status_bar(state: &ClientState) -> Paragraph<'static> {
    let (text, color) = if state.is_busy() {
        ("Syncing with server…".to_string(), Color::Yellow)
    } else if let Some(line) = state.status() {
        let color = match line {
            StatusLine::Info(_) => Color::Green,
            StatusLine::Warning(_) => Color::Yellow,
            StatusLine::Error(_) => Color::Red,
        };
        (line.to_string(), color)
    } else {
        (phase_hint(state.phase()), Color::White)
    };

    Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().title("Status").borders(Borders::ALL))
}

fn phase_hint(phase: &Phase) -> String {
    match phase {
        Phase::Idle => "Select a square to shoot".to_string(),
        Phase::SquareSelected { target } => format!("Selected {target}. Press s to shoot"),
        Phase::AwaitingHitConfirm { target } => format!("Shot at {target}"),
        Phase::AwaitingSunkConfirm { target } => format!("Hit at {target}"),
        Phase::SelectingSunkSquares { sunk, .. } => format!(
            "Mark the sunken ship's squares ({} selected), then press f",
            sunk.len()
        ),
    }
}

fn help_bar(state: &ClientState) -> Paragraph<'static> {
    Paragraph::new(help_keys(state).join("  |  "))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Keys that do something in `state`.
fn help_keys(state: &ClientState) -> Vec<&'static str> {
    let mut keys = vec!["←↓↑→/hjkl Move"];
    if state.failure().is_some() {
        keys.push("r Retry");
        keys.push("Esc Dismiss");
    } else if state.prompt().is_some() {
        keys.push("y Yes");
        keys.push("n No");
    } else if !state.is_busy() {
        match state.phase() {
            Phase::Idle => keys.push("Enter Select"),
            Phase::SquareSelected { .. } => {
                keys.push("Enter Select");
                keys.push("s Shoot");
                keys.push("Esc Clear");
            }
            Phase::SelectingSunkSquares { .. } => {
                keys.push("Enter Toggle");
                keys.push("f Submit");
            }
            _ => {}
        }
        if state.can_undo() {
            keys.push("u Undo");
        }
    }
    if state.model().is_none() || (!state.is_busy() && *state.phase() == Phase::Idle) {
        keys.push("R Reload");
    }
    keys.push("q Quit");
    keys
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
