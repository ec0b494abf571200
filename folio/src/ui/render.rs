//! Render orchestration for the portfolio TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use folio_core::content::skill_summary;
use folio_core::{Gallery, Portfolio, View};

use crate::app::{App, InputMode};
use crate::ui::layout::{
    centered_rect_fixed, detail_popup_area, AppLayout, GalleryLayout, HomeLayout,
};
use crate::ui::theme::FolioTheme;
use crate::ui::widgets::{
    CardListWidget, CardView, ContactFormWidget, DetailWidget, DialogueWidget, FilterBarWidget,
    HotkeyBarWidget, NavTabsWidget, StatusBarWidget,
};

/// Overlay types
#[derive(Debug, Clone)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);
    let portfolio = app.site.portfolio();

    frame.render_widget(
        NavTabsWidget::new(&portfolio.owner, app.page(), &app.theme),
        layout.nav_area,
    );

    match app.site.view() {
        View::Home(typewriter) => {
            let home = HomeLayout::calculate(layout.content_area);
            render_headline(frame, portfolio, &app.theme, home.headline_area);
            frame.render_widget(
                DialogueWidget::new(typewriter.sequencer(), &app.theme)
                    .cursor_visible(app.cursor_visible()),
                home.dialogue_area,
            );
        }
        View::Projects(gallery) => {
            render_gallery(frame, app, gallery, "Projects", layout.content_area);
            render_project_summary(frame, gallery, &app.theme, layout.content_area);
        }
        View::Skills(gallery) => {
            render_gallery(frame, app, gallery, "Skills", layout.content_area);
            render_skill_summary(frame, gallery, &app.theme, layout.content_area);
        }
        View::About => render_about(frame, portfolio, &app.theme, layout.content_area),
        View::Contact(form) => frame.render_widget(
            ContactFormWidget::new(form, &app.theme)
                .focused(app.focused_field)
                .editing(app.input_mode == InputMode::Edit)
                .cursor_visible(app.cursor_visible()),
            layout.content_area,
        ),
    }

    frame.render_widget(
        StatusBarWidget::new(app.page(), app.input_mode, &app.theme)
            .message(app.status())
            .relay_ready(app.has_relay()),
        layout.status_bar,
    );
    frame.render_widget(
        HotkeyBarWidget::new(app.page(), app.input_mode, &app.theme)
            .inspecting(app.is_inspecting()),
        layout.hotkey_bar,
    );

    // Detail popup sits above the page, help above everything
    match app.site.view() {
        View::Projects(gallery) => render_detail(frame, gallery, &app.theme, area),
        View::Skills(gallery) => render_detail(frame, gallery, &app.theme, area),
        _ => {}
    }

    if let Some(Overlay::Help) = app.overlay() {
        render_help_overlay(frame, app, area);
    }
}

fn render_headline(frame: &mut Frame, portfolio: &Portfolio, theme: &FolioTheme, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            portfolio.owner.as_str(),
            theme.accent_style().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(portfolio.headline.as_str(), theme.muted_style())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_gallery<T: CardView>(
    frame: &mut Frame,
    app: &App,
    gallery: &Gallery<T>,
    title: &str,
    area: Rect,
) {
    let layout = GalleryLayout::calculate(area);
    frame.render_widget(FilterBarWidget::new(gallery, &app.theme), layout.filter_area);
    frame.render_widget(
        CardListWidget::new(gallery, &app.theme)
            .highlighted(app.highlighted)
            .title(title),
        layout.cards_area,
    );
}

fn render_project_summary(
    frame: &mut Frame,
    gallery: &Gallery<folio_core::Project>,
    theme: &FolioTheme,
    area: Rect,
) {
    let layout = GalleryLayout::calculate(area);
    let featured: Vec<Line> = gallery
        .items()
        .iter()
        .filter(|project| project.featured)
        .map(|project| Line::from(Span::styled(format!("★ {}", project.title), theme.text_style())))
        .collect();

    let mut lines = vec![
        Line::from(Span::styled("Featured", theme.accent_style())),
        Line::from(""),
    ];
    lines.extend(featured);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Highlights ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        ),
        layout.sidebar_area,
    );
}

fn render_skill_summary(
    frame: &mut Frame,
    gallery: &Gallery<folio_core::Skill>,
    theme: &FolioTheme,
    area: Rect,
) {
    let layout = GalleryLayout::calculate(area);
    let summary = skill_summary(gallery.items());
    let lines = vec![
        Line::from(Span::styled("At a glance", theme.accent_style())),
        Line::from(""),
        Line::from(format!("Skills    {:>4}", summary.count)),
        Line::from(format!("Avg %     {:>4}", summary.average)),
        Line::from(format!("Advanced  {:>4}", summary.advanced)),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        ),
        layout.sidebar_area,
    );
}

fn render_detail<T: CardView>(
    frame: &mut Frame,
    gallery: &Gallery<T>,
    theme: &FolioTheme,
    area: Rect,
) {
    if let Some(item) = gallery.inspected_item() {
        frame.render_widget(DetailWidget::new(item, theme), detail_popup_area(area));
    }
}

fn render_about(frame: &mut Frame, portfolio: &Portfolio, theme: &FolioTheme, area: Rect) {
    let about = &portfolio.about;
    let mut lines: Vec<Line> = Vec::new();

    for paragraph in &about.paragraphs {
        lines.push(Line::from(Span::styled(paragraph.as_str(), theme.text_style())));
        lines.push(Line::from(""));
    }

    if !about.languages.is_empty() {
        lines.push(Line::from(Span::styled("Languages", theme.accent_style())));
        lines.push(Line::from(about.languages.join(" · ")));
        lines.push(Line::from(""));
    }

    if !about.courses.is_empty() {
        lines.push(Line::from(Span::styled("Coursework", theme.accent_style())));
        for course in &about.courses {
            lines.push(Line::from(format!("  - {course}")));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(format!(" About {} ", portfolio.owner))
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        ),
        area,
    );
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect_fixed(56, 26, area);
    frame.render_widget(Clear, popup);

    let key = |k: &'static str| Span::styled(format!("{k:<14}"), app.theme.accent_style());
    let help_text = vec![
        Line::from(Span::styled("Pages", app.theme.accent_style().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![key("1-5"), Span::raw("Jump to a page")]),
        Line::from(vec![key("Tab/S-Tab"), Span::raw("Next / previous page")]),
        Line::from(""),
        Line::from(Span::styled("Home", app.theme.accent_style().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![key("Space/Enter"), Span::raw("Finish line, then next line")]),
        Line::from(vec![key("Click"), Span::raw("Same as Space")]),
        Line::from(""),
        Line::from(Span::styled("Work & Skills", app.theme.accent_style().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![key("h/l"), Span::raw("Previous / next category")]),
        Line::from(vec![key("a"), Span::raw("Show all categories")]),
        Line::from(vec![key("j/k"), Span::raw("Move between cards")]),
        Line::from(vec![key("Enter"), Span::raw("Open details")]),
        Line::from(vec![key("Esc/x/click"), Span::raw("Close details")]),
        Line::from(""),
        Line::from(Span::styled("Contact", app.theme.accent_style().add_modifier(Modifier::UNDERLINED))),
        Line::from(vec![key("i"), Span::raw("Edit fields (Tab to move, Esc to stop)")]),
        Line::from(vec![key("Ctrl+S"), Span::raw("Send")]),
        Line::from(vec![key("r / Esc"), Span::raw("Retry / dismiss a failed send")]),
        Line::from(vec![key("n"), Span::raw("New message after sending")]),
        Line::from(""),
        Line::from(vec![key("q / Ctrl+C"), Span::raw("Quit")]),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help [Esc to close] ")
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(true)),
    );
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Page, Site, DEFAULT_REVEAL_INTERVAL};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let site = Site::new(Portfolio::default(), DEFAULT_REVEAL_INTERVAL).unwrap();
        App::new(site, None)
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_page_renders() {
        let mut app = app();
        for page in Page::ALL {
            app.navigate(page);
            let text = screen_text(&app);
            assert!(text.contains(page.title()), "{page} missing its tab");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_popup_rendered_when_inspecting() {
        let mut app = app();
        app.navigate(Page::Skills);
        app.open_highlighted();
        let text = screen_text(&app);
        assert!(text.contains("[x]"));
        assert!(text.contains("Experience"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_skill_summary_panel() {
        let mut app = app();
        app.navigate(Page::Skills);
        let text = screen_text(&app);
        assert!(text.contains("Skills      15"));
        assert!(text.contains("Avg %       77"));
        assert!(text.contains("Advanced     6"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_help_overlay() {
        let mut app = app();
        app.toggle_help();
        assert!(screen_text(&app).contains("Help [Esc to close]"));
    }
}
