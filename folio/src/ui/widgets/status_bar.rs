//! Navigation tabs, status bar and hotkey bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_core::Page;

use crate::app::InputMode;
use crate::ui::theme::FolioTheme;

/// Page tabs across the top of the screen
pub struct NavTabsWidget<'a> {
    owner: &'a str,
    current: Page,
    theme: &'a FolioTheme,
}

impl<'a> NavTabsWidget<'a> {
    pub fn new(owner: &'a str, current: Page, theme: &'a FolioTheme) -> Self {
        Self {
            owner,
            current,
            theme,
        }
    }
}

impl Widget for NavTabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(format!(" {} ", self.owner), self.theme.accent_style()),
            Span::raw(" "),
        ];
        for (index, page) in Page::ALL.iter().enumerate() {
            spans.push(Span::styled(
                format!(" {}:{} ", index + 1, page.title()),
                self.theme.tab_style(*page == self.current),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Status bar widget showing the mode and the latest message
pub struct StatusBarWidget<'a> {
    page: Page,
    input_mode: InputMode,
    theme: &'a FolioTheme,
    message: Option<&'a str>,
    relay_ready: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(page: Page, input_mode: InputMode, theme: &'a FolioTheme) -> Self {
        Self {
            page,
            input_mode,
            theme,
            message: None,
            relay_ready: true,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn relay_ready(mut self, ready: bool) -> Self {
        self.relay_ready = ready;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mode_text, mode_style) = match self.input_mode {
            InputMode::Normal => (
                "NORMAL",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            InputMode::Edit => (
                "EDIT",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        };

        let mut spans = vec![
            Span::styled(format!("-- {mode_text} --"), mode_style),
            Span::raw(" | "),
            Span::styled(self.page.title(), self.theme.text_style()),
        ];

        if self.page == Page::Contact && !self.relay_ready {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("mail relay not configured", self.theme.error_style()));
        }

        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget<'a> {
    page: Page,
    input_mode: InputMode,
    inspecting: bool,
    theme: &'a FolioTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(page: Page, input_mode: InputMode, theme: &'a FolioTheme) -> Self {
        Self {
            page,
            input_mode,
            inspecting: false,
            theme,
        }
    }

    pub fn inspecting(mut self, inspecting: bool) -> Self {
        self.inspecting = inspecting;
        self
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hotkeys: &[(&str, bool)] = match (self.input_mode, self.page) {
            (InputMode::Edit, _) => &[
                ("Tab:next field", true),
                ("Ctrl+S:send", true),
                ("Esc:done", false),
            ],
            (InputMode::Normal, _) if self.inspecting => &[
                ("Esc/x:close", true),
                ("click outside:close", false),
            ],
            (InputMode::Normal, Page::Home) => &[
                ("Space:next", true),
                ("Tab:page", false),
                ("?:help", false),
                ("q:quit", false),
            ],
            (InputMode::Normal, Page::Projects | Page::Skills) => &[
                ("h/l:filter", true),
                ("j/k:move", true),
                ("Enter:details", true),
                ("Tab:page", false),
                ("q:quit", false),
            ],
            (InputMode::Normal, Page::Contact) => &[
                ("i:edit", true),
                ("Ctrl+S:send", true),
                ("r:retry", false),
                ("Tab:page", false),
                ("q:quit", false),
            ],
            (InputMode::Normal, Page::About) => &[
                ("Tab:page", false),
                ("?:help", false),
                ("q:quit", false),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, primary)) in hotkeys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if *primary {
                self.theme.accent_style()
            } else {
                self.theme.muted_style()
            };
            spans.push(Span::styled(*key, style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
