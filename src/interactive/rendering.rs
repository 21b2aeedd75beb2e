//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{BoardRow, Game, KeyColor, KeyTile, MAX_ATTEMPTS, Tile};
use crate::session::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD DUEL 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    match app.state() {
        GameState::InProgress(game) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    // Board rows plus borders
                    Constraint::Length(u16::try_from(MAX_ATTEMPTS).unwrap_or(6) + 2),
                    Constraint::Min(5),
                ])
                .split(area);

            render_board(f, game, chunks[0]);
            render_keyboard(f, game, chunks[1]);
        }
        GameState::Init | GameState::Loading => {
            render_notice(f, area, "Loading word list...", Color::Yellow);
        }
        GameState::Error(cause) => {
            let text = format!("{cause}\n\nPress Ctrl-R to retry or Esc to quit.");
            render_notice(f, area, &text, Color::Red);
        }
    }
}

fn render_notice(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Hit(_) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tile::Misplaced(_) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tile::Miss(_) => Style::default().fg(Color::White).bg(Color::DarkGray),
        Tile::Active(_) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Tile::Inactive => Style::default().fg(Color::DarkGray),
    }
}

fn row_line(row: &BoardRow) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.tiles().len() * 2);
    for &tile in row.tiles() {
        let cell = match tile.letter() {
            Some(letter) => format!(" {letter} "),
            None if tile.is_active() => " _ ".to_string(),
            None => " · ".to_string(),
        };
        spans.push(Span::styled(cell, tile_style(tile)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let lines: Vec<Line> = game.board.rows().iter().map(row_line).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(key: &KeyTile) -> Style {
    match key.color {
        KeyColor::Hit => Style::default().fg(Color::Black).bg(Color::Green),
        KeyColor::Misplaced => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyColor::Miss => Style::default().fg(Color::DarkGray),
        KeyColor::Unset => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines = Vec::new();
    for row in game.key_tiles.rows() {
        let mut spans = Vec::new();
        for key in row {
            spans.push(Span::styled(format!(" {} ", key.key), key_style(key)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if game.non_word_entered {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Not in word list",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Length(u16::try_from(MAX_ATTEMPTS).unwrap_or(6) + 2),
            Constraint::Min(3), // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=100
fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let rate = app.stats.win_rate();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(rate.clamp(0.0, 100.0) as u16)
        .label(format!(
            "{rate:.0}% | {}/{} games",
            app.stats.games_won, app.stats.total_games
        ));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let max = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let lines: Vec<Line> = (1..=MAX_ATTEMPTS)
        .map(|attempts| {
            let count = app.stats.guess_distribution[attempts];
            let bar = "█".repeat(count * 16 / max);
            Line::from(vec![
                Span::raw(format!("{attempts}: ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(distribution, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = Paragraph::new(format!("State: {}", app.state().name()))
        .alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let attempt_text = match app.state().game() {
        Some(game) => {
            let used = game.board.evaluated_rows().count();
            format!("Guess: {used}/{MAX_ATTEMPTS}")
        }
        None => String::new(),
    };
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.state() {
        GameState::InProgress(game) if game.is_ended() => "n: New Game | q: Quit",
        GameState::InProgress(_) if app.store.config().auto_submit => {
            "Type letters | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
        }
        GameState::InProgress(_) => {
            "Type letters | Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
        }
        GameState::Error(_) => "Ctrl-R: Retry | Esc: Quit",
        GameState::Init | GameState::Loading => "Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_line_marks_empty_active_cells() {
        let line = row_line(&BoardRow::active_from_letters(&['W', 'O']));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " W   O   _   _   _  ");
    }

    #[test]
    fn hit_tiles_are_green() {
        assert_eq!(tile_style(Tile::Hit('A')).bg, Some(Color::Green));
        assert_eq!(tile_style(Tile::Misplaced('A')).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Tile::Inactive).bg, None);
    }
}
