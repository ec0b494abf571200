//! Gallery widgets: category filter bar and card list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_core::{Gallery, GalleryItem, Project, Skill};

use crate::ui::theme::{hex_color, FolioTheme};

/// How an item is drawn as a card and in the detail popup.
pub trait CardView: GalleryItem {
    /// One-line card title.
    fn card_title(&self) -> &str;

    /// Lines under the title on the card.
    fn card_body(&self, theme: &FolioTheme) -> Vec<Line<'_>>;

    /// Full description for the detail popup.
    fn detail_lines(&self, theme: &FolioTheme) -> Vec<Line<'_>>;

    /// Accent color of the card, if it has one.
    fn accent(&self, _theme: &FolioTheme) -> Option<Style> {
        None
    }
}

impl CardView for Project {
    fn card_title(&self) -> &str {
        &self.title
    }

    fn card_body(&self, theme: &FolioTheme) -> Vec<Line<'_>> {
        let (shown, hidden) = self.card_technologies();
        let mut tags: Vec<Span> = shown
            .into_iter()
            .flat_map(|tech| [Span::styled(format!("[{tech}]"), theme.tag_style()), Span::raw(" ")])
            .collect();
        if let Some(hidden) = hidden {
            tags.push(Span::styled(format!("+{hidden}"), theme.muted_style()));
        }
        vec![
            Line::from(Span::styled(self.category.as_str(), theme.muted_style())),
            Line::from(tags),
        ]
    }

    fn detail_lines(&self, theme: &FolioTheme) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(self.category.as_str(), theme.muted_style())),
            Line::from(""),
            Line::from(Span::styled(self.description.as_str(), theme.text_style())),
            Line::from(""),
            Line::from(Span::styled("Technologies", theme.accent_style())),
            Line::from(
                self.technologies
                    .iter()
                    .map(|tech| Span::styled(format!("[{tech}] "), theme.tag_style()))
                    .collect::<Vec<_>>(),
            ),
        ];
        if self.live_url.is_some() || self.github_url.is_some() {
            lines.push(Line::from(""));
        }
        if let Some(url) = &self.live_url {
            lines.push(Line::from(vec![
                Span::styled("Live Demo  ", theme.accent_style()),
                Span::styled(url.as_str(), theme.text_style()),
            ]));
        }
        if let Some(url) = &self.github_url {
            lines.push(Line::from(vec![
                Span::styled("GitHub     ", theme.accent_style()),
                Span::styled(url.as_str(), theme.text_style()),
            ]));
        }
        lines
    }

    fn accent(&self, theme: &FolioTheme) -> Option<Style> {
        self.featured.then(|| Style::default().fg(theme.featured))
    }
}

impl CardView for Skill {
    fn card_title(&self) -> &str {
        &self.name
    }

    fn card_body(&self, theme: &FolioTheme) -> Vec<Line<'_>> {
        vec![Line::from(vec![
            Span::styled(format!("{:<10}", self.category), theme.muted_style()),
            Span::styled(level_bar(self.level, 20), skill_style(self, theme)),
            Span::styled(format!(" {}%", self.level), theme.text_style()),
        ])]
    }

    fn detail_lines(&self, theme: &FolioTheme) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(self.category.as_str(), theme.muted_style())),
            Line::from(""),
            Line::from(Span::styled(self.description.as_str(), theme.text_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Level      ", theme.accent_style()),
                Span::styled(level_bar(self.level, 30), skill_style(self, theme)),
                Span::raw(format!(" {}%", self.level)),
            ]),
            Line::from(vec![
                Span::styled("Tier       ", theme.accent_style()),
                Span::raw(self.tier().name()),
            ]),
        ];
        if let Some(experience) = &self.experience {
            lines.push(Line::from(vec![
                Span::styled("Experience ", theme.accent_style()),
                Span::raw(experience.as_str()),
            ]));
        }
        lines
    }

    fn accent(&self, theme: &FolioTheme) -> Option<Style> {
        Some(skill_style(self, theme))
    }
}

fn skill_style(skill: &Skill, theme: &FolioTheme) -> Style {
    Style::default().fg(hex_color(&skill.color).unwrap_or(theme.accent))
}

/// A fixed-width bar for a 0-100 level.
pub fn level_bar(level: u8, width: usize) -> String {
    let filled = (usize::from(level.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Category buttons, active one highlighted, with item counts.
pub struct FilterBarWidget<'a, T> {
    gallery: &'a Gallery<T>,
    theme: &'a FolioTheme,
}

impl<'a, T: GalleryItem> FilterBarWidget<'a, T> {
    pub fn new(gallery: &'a Gallery<T>, theme: &'a FolioTheme) -> Self {
        Self { gallery, theme }
    }
}

impl<T: GalleryItem> Widget for FilterBarWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.gallery.active_category().label();
        let mut spans = Vec::new();
        for name in self.gallery.categories() {
            let label = format!(" {} ({}) ", name, self.gallery.count_in(name));
            spans.push(Span::styled(label, self.theme.tab_style(name == active)));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(false))
                    .title(" Filter [h/l] "),
            )
            .render(area, buf);
    }
}

/// The visible cards, or an empty-state message.
pub struct CardListWidget<'a, T> {
    gallery: &'a Gallery<T>,
    theme: &'a FolioTheme,
    highlighted: usize,
    title: &'a str,
}

impl<'a, T: CardView> CardListWidget<'a, T> {
    pub fn new(gallery: &'a Gallery<T>, theme: &'a FolioTheme) -> Self {
        Self {
            gallery,
            theme,
            highlighted: 0,
            title: "",
        }
    }

    pub fn highlighted(mut self, index: usize) -> Self {
        self.highlighted = index;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl<T: CardView> Widget for CardListWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.gallery.visible_items();
        let block = Block::default()
            .title(format!(
                " {} ({}/{}) [j/k, Enter] ",
                self.title,
                visible.len(),
                self.gallery.items().len()
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        if visible.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                format!(
                    "Nothing in \"{}\" yet.",
                    self.gallery.active_category().label()
                ),
                self.theme.muted_style(),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        let mut highlighted_row = 0;
        for (index, item) in visible.iter().enumerate() {
            let selected = index == self.highlighted;
            if selected {
                highlighted_row = lines.len();
            }
            let marker = if selected { "▸ " } else { "  " };
            let title_style = match item.accent(self.theme) {
                Some(style) if !selected => style,
                _ => self.theme.card_style(selected),
            };
            lines.push(Line::from(vec![
                Span::styled(marker, self.theme.accent_style()),
                Span::styled(item.card_title(), title_style),
            ]));
            for body in item.card_body(self.theme) {
                let mut spans = vec![Span::raw("    ")];
                spans.extend(body.spans);
                lines.push(Line::from(spans));
            }
            lines.push(Line::from(""));
        }

        // Keep the highlighted card on screen
        let height = usize::from(inner.height);
        let scroll = highlighted_row.saturating_sub(height.saturating_sub(3));

        Paragraph::new(lines)
            .scroll((scroll.min(u16::MAX as usize) as u16, 0))
            .render(inner, buf);
    }
}
