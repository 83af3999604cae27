//! Stateless UI rendering for Tri-Pawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tripawn_core::{Cell, GameState, Mode, Occupant, Player, Snapshot};

use super::app::App;

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tri-Pawn Challenge")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let snapshot = app.session().snapshot();

    match snapshot.state {
        GameState::Menu => {
            let menu_area = draw_menu(frame, chunks[1], app.menu_choice());
            app.set_menu_area(menu_area);
        }
        GameState::Playing | GameState::GameOver { .. } => {
            let highlights = app.session().highlighted_cells(app.hovered_cell());
            let cursor = app.session().accepts_input().then(|| app.cursor());
            let board_area = draw_board(frame, chunks[1], &snapshot, &highlights, cursor);
            app.set_board_area(board_area);
        }
    }

    draw_status(frame, chunks[2], &snapshot, app.session().is_computer_turn());

    let help = match snapshot.state {
        GameState::Menu => "↑↓: Choose | Enter, 1/2 or Click: Start | q: Quit",
        GameState::Playing => "Arrows: Move cursor | Enter/Space/Click: Select and move | q: Quit",
        GameState::GameOver { .. } => "Any key or click: Back to menu | q: Quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Draws the mode menu and returns the area covered by its entries.
fn draw_menu(frame: &mut Frame, area: Rect, choice: Mode) -> Rect {
    let menu_area = center_rect(area, 30, 6);
    let block = Block::default().borders(Borders::ALL).title("Main Menu");
    let inner = block.inner(menu_area);

    let items: Vec<ListItem> = Mode::iter()
        .map(|mode| ListItem::new(mode.to_string()))
        .collect();
    let selected = Mode::iter().position(|mode| mode == choice);

    let menu = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(menu, menu_area, &mut state);

    inner
}

/// Draws the board and returns the area covered by its cells.
fn draw_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    highlights: &[Cell],
    cursor: Option<Cell>,
) -> Rect {
    let board_rect = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(board_rect);
    frame.render_widget(block, board_rect);

    for cell in Cell::all() {
        let (Ok(x), Ok(y)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            continue;
        };
        let cell_rect = Rect::new(
            inner.x + x * CELL_WIDTH,
            inner.y + y * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner);

        draw_cell(frame, cell_rect, cell, snapshot, highlights, cursor);
    }

    inner
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Cell,
    snapshot: &Snapshot,
    highlights: &[Cell],
    cursor: Option<Cell>,
) {
    let mut occupant = snapshot.board.get(cell).unwrap_or_default();
    let mut background = if (cell.x + cell.y) % 2 == 0 {
        Color::Black
    } else {
        Color::DarkGray
    };

    // The computer's pawn slides over halfway through the think delay.
    if let Some(flight) = snapshot.in_flight {
        let mover = snapshot.board.get(flight.source).unwrap_or_default();
        let arrived = flight.progress >= 0.5;
        if cell == flight.source && arrived {
            occupant = Occupant::Empty;
        }
        if cell == flight.destination {
            background = Color::Magenta;
            if arrived {
                occupant = mover;
            }
        }
    }

    if highlights.contains(&cell) {
        background = Color::Green;
    }
    if snapshot.selected == Some(cell) {
        background = Color::Yellow;
    }

    let (symbol, mut style) = match occupant {
        Occupant::Empty => ("", Style::default()),
        Occupant::Pawn(Player::White) => (
            "W",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Occupant::Pawn(Player::Black) => (
            "B",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    style = style.bg(background);
    if cursor == Some(cell) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![Line::from(""), Line::from(symbol)];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &Snapshot, computer_turn: bool) {
    if let Some(flight) = snapshot.in_flight {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(f64::from(flight.progress))
            .label(format!("Computer moves {} -> {}", flight.source, flight.destination));
        frame.render_widget(gauge, area);
        return;
    }

    let text = match snapshot.state {
        GameState::Menu => format!("Choose a mode: {}", mode_list()),
        GameState::Playing if computer_turn => "Computer is thinking...".to_string(),
        GameState::Playing => match snapshot.selected {
            Some(cell) => format!(
                "{} to move - pawn on {} selected",
                snapshot.current_player, cell
            ),
            None => format!("{} to move", snapshot.current_player),
        },
        GameState::GameOver { winner: Some(winner) } => format!("Game Over! {} wins!", winner),
        GameState::GameOver { winner: None } => {
            "Game Over! Stalemate - nobody can move".to_string()
        }
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn mode_list() -> String {
    Mode::iter()
        .map(|mode| mode.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
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
