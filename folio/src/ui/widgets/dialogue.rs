//! Dialogue box widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_core::Sequencer;

use crate::ui::theme::FolioTheme;

/// Visual-novel style dialogue box showing the revealed text so far.
pub struct DialogueWidget<'a> {
    sequencer: &'a Sequencer,
    theme: &'a FolioTheme,
    cursor_visible: bool,
}

impl<'a> DialogueWidget<'a> {
    pub fn new(sequencer: &'a Sequencer, theme: &'a FolioTheme) -> Self {
        Self {
            sequencer,
            theme,
            cursor_visible: true,
        }
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }
}

impl Widget for DialogueWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.sequencer.current_line();
        let progress = format!(
            " {}/{} ",
            self.sequencer.cursor() + 1,
            self.sequencer.script().len()
        );

        let block = Block::default()
            .title(Span::styled(format!(" {} ", line.speaker), self.theme.nametag_style()))
            .title_bottom(Line::from(progress).right_aligned())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(
            self.sequencer.revealed_text(),
            self.theme.text_style().fg(self.theme.dialogue_text),
        )];
        if self.cursor_visible {
            spans.push(Span::styled("|", self.theme.accent_style()));
        }

        let hint = if self.sequencer.is_complete() {
            Span::styled("NEXT ▶", self.theme.accent_style())
        } else {
            Span::styled("...", self.theme.muted_style())
        };

        let lines = vec![
            Line::from(spans),
            Line::from(""),
            Line::from(hint).right_aligned(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
