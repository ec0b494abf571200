//! Contact form widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_core::{ContactForm, Field, SubmitStatus};

use crate::ui::theme::FolioTheme;

/// The four fields with their errors, plus the delivery banner.
pub struct ContactFormWidget<'a> {
    form: &'a ContactForm,
    theme: &'a FolioTheme,
    focused: Field,
    editing: bool,
    cursor_visible: bool,
}

impl<'a> ContactFormWidget<'a> {
    pub fn new(form: &'a ContactForm, theme: &'a FolioTheme) -> Self {
        Self {
            form,
            theme,
            focused: Field::Name,
            editing: false,
            cursor_visible: true,
        }
    }

    pub fn focused(mut self, field: Field) -> Self {
        self.focused = field;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    fn render_field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let focused = field == self.focused;
        let error = self.form.errors().get(field);

        let mut title = vec![Span::styled(format!(" {} ", field.label()), self.theme.text_style())];
        if let Some(message) = error {
            title.push(Span::styled(format!("{message} "), self.theme.error_style()));
        }

        let border_style = if error.is_some() {
            self.theme.error_style()
        } else {
            self.theme.border_style(focused)
        };

        let mut spans = vec![Span::raw(self.form.fields().get(field))];
        if focused && self.editing && self.cursor_visible {
            spans.push(Span::styled("|", self.theme.accent_style()));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(Line::from(title))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }

    fn banner(&self) -> Option<Line<'a>> {
        match self.form.status() {
            SubmitStatus::Idle => None,
            SubmitStatus::Sending => Some(Line::from(Span::styled(
                "Sending...",
                self.theme.accent_style(),
            ))),
            SubmitStatus::Sent => Some(Line::from(vec![
                Span::styled("Message sent! ", self.theme.success_style()),
                Span::styled("I'll get back to you soon. [n] new message", self.theme.muted_style()),
            ])),
            SubmitStatus::Failed(message) => Some(Line::from(vec![
                Span::styled(message.as_str(), self.theme.error_style()),
                Span::styled("  [r] retry  [Esc] dismiss", self.theme.muted_style()),
            ])),
        }
    }
}

impl Widget for ContactFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = if self.editing {
            " Contact [EDIT: Tab next, Esc done, Ctrl+S send] "
        } else {
            " Contact [i edit, j/k field, Ctrl+S send] "
        };
        let block = Block::default()
            .title(mode)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.editing));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(inner);

        for (field, row) in Field::ALL.into_iter().zip(rows.iter()) {
            self.render_field(field, *row, buf);
        }

        if let Some(banner) = self.banner() {
            Paragraph::new(banner).render(rows[4], buf);
        }
    }
}
