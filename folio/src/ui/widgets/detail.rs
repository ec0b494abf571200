//! Detail popup for an inspected gallery item

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::ui::theme::FolioTheme;
use crate::ui::widgets::gallery::CardView;

/// Popup with the full item description and a `[x]` close control.
///
/// Render it into `layout::detail_popup_area` so the close control lines up
/// with `layout::detail_close_area`.
pub struct DetailWidget<'a, T> {
    item: &'a T,
    theme: &'a FolioTheme,
}

impl<'a, T: CardView> DetailWidget<'a, T> {
    pub fn new(item: &'a T, theme: &'a FolioTheme) -> Self {
        Self { item, theme }
    }
}

impl<T: CardView> Widget for DetailWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title_style = self
            .item
            .accent(self.theme)
            .unwrap_or_else(|| self.theme.accent_style());
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.item.card_title()), title_style))
            .title(Line::from(Span::styled("[x] ", self.theme.error_style())).right_aligned())
            .title_bottom(Line::from(" Esc / x / click outside to close ").centered())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        Paragraph::new(self.item.detail_lines(self.theme))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
