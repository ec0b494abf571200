//! Layout calculations for the portfolio TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate the main layout areas
pub struct AppLayout {
    pub nav_area: Rect,
    pub content_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Page tabs
                Constraint::Min(8),    // Page content
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        Self {
            nav_area: chunks[0],
            content_area: chunks[1],
            status_bar: chunks[2],
            hotkey_bar: chunks[3],
        }
    }
}

/// Gallery page: filter bar above cards, summary on the right
pub struct GalleryLayout {
    pub filter_area: Rect,
    pub cards_area: Rect,
    pub sidebar_area: Rect,
}

impl GalleryLayout {
    pub fn calculate(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(columns[0]);

        Self {
            filter_area: rows[0],
            cards_area: rows[1],
            sidebar_area: columns[1],
        }
    }
}

/// Home page: headline above the dialogue box
pub struct HomeLayout {
    pub headline_area: Rect,
    pub dialogue_area: Rect,
}

impl HomeLayout {
    pub fn calculate(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            headline_area: rows[0],
            dialogue_area: rows[1],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Area of the gallery detail popup for a given screen.
///
/// Shared by rendering and mouse hit-testing so clicks outside it dismiss.
pub fn detail_popup_area(screen: Rect) -> Rect {
    centered_rect_fixed(64, 22, screen)
}

/// Row of the close control inside the detail popup.
pub fn detail_close_area(screen: Rect) -> Rect {
    let popup = detail_popup_area(screen);
    Rect::new(
        popup.x + popup.width.saturating_sub(6),
        popup.y,
        popup.width.min(5),
        popup.height.min(1),
    )
}
