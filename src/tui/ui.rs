//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Highlight, Player, Position};

use super::app::{App, CellView};
use crate::config::Theme;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Area the board is centered in.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Scoreboard and key help.
    pub footer: Rect,
}

/// Splits the terminal area into regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [title, board, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CELL_HEIGHT * 3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    ScreenLayout {
        title,
        board,
        status,
        footer,
    }
}

/// Rectangles of the nine cells inside `board_area`, indexed 0-8.
///
/// Cells are clipped to the area when the terminal is too small.
pub fn cell_rects(board_area: Rect) -> [Rect; 9] {
    let grid = center_rect(board_area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    Position::ALL.map(|pos| {
        Rect::new(
            grid.x + pos.column() as u16 * CELL_WIDTH,
            grid.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board_area)
    })
}

/// The cell under a terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let rects = cell_rects(screen_layout(area).board);
    Position::ALL.into_iter().find(|pos| {
        let r = rects[pos.index()];
        column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
    })
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let rects = cell_rects(layout.board);
    for pos in Position::ALL {
        draw_cell(
            frame,
            rects[pos.index()],
            app.cells()[pos.index()],
            pos == app.cursor(),
            app.theme(),
        );
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let footer = Paragraph::new(Line::from(format!(
        "{}  |  Click or 1-9: play  N: new game  Q: quit",
        app.scoreboard()
    )))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, layout.footer);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView, is_cursor: bool, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let mut style = Style::default();
    if let Some((_, player)) = cell.mark {
        let fg = match player {
            Player::X => *theme.x_color(),
            Player::O => *theme.o_color(),
        };
        style = style.fg(fg).add_modifier(Modifier::BOLD);
    }
    match cell.highlight {
        Some(Highlight::Win) => style = style.bg(*theme.win_highlight()),
        Some(Highlight::Draw) => style = style.bg(*theme.draw_highlight()),
        None => {}
    }

    let border_style = if is_cursor {
        Style::default().fg(*theme.cursor_color())
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = cell.mark.map(|(text, _)| text).unwrap_or("");
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_tile_a_centered_grid() {
        let rects = cell_rects(Rect::new(0, 3, 60, 15));
        // grid is 27x9 centered in 60x15 starting at row 3
        assert_eq!(rects[0], Rect::new(16, 6, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(rects[4], Rect::new(25, 9, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(rects[8], Rect::new(34, 12, CELL_WIDTH, CELL_HEIGHT));
    }

    #[test]
    fn test_cell_at_hits_every_cell() {
        let area = Rect::new(0, 0, 60, 24);
        let board = screen_layout(area).board;
        let rects = cell_rects(board);

        for pos in Position::ALL {
            let r = rects[pos.index()];
            assert_eq!(cell_at(area, r.x + 1, r.y + 1), Some(pos));
        }
        assert_eq!(cell_at(area, 0, 0), None);
    }

    #[test]
    fn test_tiny_area_clips_cells() {
        let board = Rect::new(0, 0, 10, 4);
        for r in cell_rects(board).into_iter().filter(|r| !r.is_empty()) {
            assert!(r.right() <= board.right());
            assert!(r.bottom() <= board.bottom());
        }
    }
}
