//! Main application state and logic

use std::sync::Arc;

use folio_core::{
    Advance, ContactFields, ContactRelay, Field, Gallery, GalleryItem, Page, RelayError, Site,
    SubmitStatus, View,
};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::theme::FolioTheme;
use crate::ui::Overlay;

/// Input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and hotkeys (default)
    #[default]
    Normal,
    /// Typing into a contact form field
    Edit,
}

/// Category and card navigation shared by both galleries.
pub trait Browse {
    fn category_names(&self) -> &[String];
    fn active_label(&self) -> &str;
    fn choose_category(&mut self, name: &str);
    fn shown(&self) -> usize;
    fn open(&mut self, index: usize) -> bool;
    fn close(&mut self);
    fn inspecting(&self) -> bool;
}

impl<T: GalleryItem> Browse for Gallery<T> {
    fn category_names(&self) -> &[String] {
        self.categories()
    }

    fn active_label(&self) -> &str {
        self.active_category().label()
    }

    fn choose_category(&mut self, name: &str) {
        self.set_category(name);
    }

    fn shown(&self) -> usize {
        self.visible_count()
    }

    fn open(&mut self, index: usize) -> bool {
        self.select_visible(index).is_some()
    }

    fn close(&mut self) {
        self.dismiss();
    }

    fn inspecting(&self) -> bool {
        self.is_inspecting()
    }
}

/// Main application state
pub struct App {
    pub site: Site,
    relay: Option<Arc<dyn ContactRelay>>,

    // UI state
    pub theme: FolioTheme,
    overlay: Option<Overlay>,
    pub highlighted: usize,
    pub input_mode: InputMode,
    pub focused_field: Field,
    /// Last full-screen area, for mouse hit-testing
    pub screen: Rect,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    /// Fields waiting to be delivered by the main loop
    pub pending_submit: Option<ContactFields>,

    // Animation
    pub animation_frame: u8,
}

impl App {
    pub fn new(site: Site, relay: Option<Arc<dyn ContactRelay>>) -> Self {
        Self {
            site,
            relay,
            theme: FolioTheme::default(),
            overlay: None,
            highlighted: 0,
            input_mode: InputMode::Normal,
            focused_field: Field::Name,
            screen: Rect::default(),
            status_message: None,
            should_quit: false,
            pending_submit: None,
            animation_frame: 0,
        }
    }

    pub fn page(&self) -> Page {
        self.site.page()
    }

    /// Switch pages. The new page always starts from fresh state.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page() {
            return;
        }
        self.site.navigate(page);
        self.highlighted = 0;
        self.input_mode = InputMode::Normal;
        self.focused_field = Field::Name;
        self.pending_submit = None;
        self.clear_status();
    }

    pub fn next_page(&mut self) {
        self.navigate(self.page().next());
    }

    pub fn prev_page(&mut self) {
        self.navigate(self.page().prev());
    }

    // Dialogue

    pub fn advance_dialogue(&mut self) -> Option<Advance> {
        let outcome = self.site.dialogue_mut().map(|typewriter| typewriter.advance());
        if let Some(outcome) = outcome {
            debug!(?outcome, "dialogue advanced");
        }
        outcome
    }

    // Galleries

    pub fn gallery(&self) -> Option<&dyn Browse> {
        match self.site.view() {
            View::Projects(gallery) => Some(gallery as &dyn Browse),
            View::Skills(gallery) => Some(gallery as &dyn Browse),
            _ => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut dyn Browse> {
        match self.site.view_mut() {
            View::Projects(gallery) => Some(gallery as &mut dyn Browse),
            View::Skills(gallery) => Some(gallery as &mut dyn Browse),
            _ => None,
        }
    }

    pub fn is_inspecting(&self) -> bool {
        self.gallery().is_some_and(|gallery| gallery.inspecting())
    }

    /// Move the category filter by `step` positions, wrapping.
    pub fn shift_category(&mut self, step: isize) {
        let Some(gallery) = self.gallery_mut() else {
            return;
        };
        let names = gallery.category_names();
        if names.is_empty() {
            return;
        }
        let current = names
            .iter()
            .position(|name| name == gallery.active_label())
            .unwrap_or(0);
        let len = names.len() as isize;
        let target = (current as isize + step).rem_euclid(len) as usize;
        let name = names[target].clone();
        gallery.choose_category(&name);
        self.highlighted = 0;
    }

    /// Jump straight to a category by its position in the filter bar.
    pub fn choose_category_at(&mut self, index: usize) {
        let Some(gallery) = self.gallery_mut() else {
            return;
        };
        let Some(name) = gallery.category_names().get(index).cloned() else {
            return;
        };
        gallery.choose_category(&name);
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        let shown = self.gallery().map(|g| g.shown()).unwrap_or(0);
        if shown > 0 {
            self.highlighted = (self.highlighted + 1).min(shown - 1);
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Open the detail overlay for the highlighted card.
    pub fn open_highlighted(&mut self) -> bool {
        let index = self.highlighted;
        self.gallery_mut().is_some_and(|gallery| gallery.open(index))
    }

    /// Close the detail overlay. Esc, the close control and a click
    /// outside the overlay all end up here.
    pub fn dismiss_detail(&mut self) {
        if let Some(gallery) = self.gallery_mut() {
            gallery.close();
        }
    }

    // Contact form

    pub fn enter_edit_mode(&mut self) {
        if self.site.contact().is_some() {
            self.input_mode = InputMode::Edit;
        }
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn type_char(&mut self, c: char) {
        let field = self.focused_field;
        if let Some(form) = self.site.contact_mut() {
            form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field;
        if let Some(form) = self.site.contact_mut() {
            form.pop_char(field);
        }
    }

    /// Validate the form and queue it for delivery.
    pub fn submit_contact(&mut self) {
        let Some(form) = self.site.contact_mut() else {
            return;
        };
        match form.begin_submit() {
            Some(fields) => {
                self.pending_submit = Some(fields);
                self.input_mode = InputMode::Normal;
                self.set_status("Sending...");
            }
            None if form.status() == &SubmitStatus::Sending => {}
            None => {
                let count = form.errors().len();
                self.set_status(format!("Please fix {count} field(s)"));
            }
        }
    }

    /// Deliver the queued submission, if any.
    pub async fn process_pending_submit(&mut self) {
        let Some(fields) = self.pending_submit.take() else {
            return;
        };
        let result = match &self.relay {
            Some(relay) => relay.submit(&fields).await,
            None => Err(RelayError::NotConfigured(
                "set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY".to_string(),
            )),
        };
        self.finish_contact(result);
    }

    /// Record the relay's answer.
    pub fn finish_contact(&mut self, result: Result<(), RelayError>) {
        let Some(form) = self.site.contact_mut() else {
            return;
        };
        form.finish_submit(result);
        let status = form.status().clone();
        match status {
            SubmitStatus::Sent => self.set_status("Message sent. Thank you!"),
            SubmitStatus::Failed(_) => self.set_status("Message failed. Press r to retry"),
            _ => {}
        }
    }

    /// Retry after a failure. Fields are still filled in.
    pub fn retry_contact(&mut self) {
        if matches!(
            self.site.contact().map(|f| f.status()),
            Some(SubmitStatus::Failed(_))
        ) {
            self.dismiss_contact_error();
            self.submit_contact();
        }
    }

    pub fn dismiss_contact_error(&mut self) {
        if let Some(form) = self.site.contact_mut() {
            form.dismiss_error();
        }
        self.clear_status();
    }

    /// Clear the form after a successful send.
    pub fn new_message(&mut self) {
        if let Some(form) = self.site.contact_mut() {
            if form.status() == &SubmitStatus::Sent {
                form.reset();
                self.focused_field = Field::Name;
                self.clear_status();
            }
        }
    }

    pub fn has_relay(&self) -> bool {
        self.relay.is_some()
    }

    // Overlay & status

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Some(Overlay::Help) => None,
            None => Some(Overlay::Help),
        };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Advance animation and apply due dialogue ticks.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.site.pump();
    }

    /// Whether the blinking cursor is in its visible phase.
    pub fn cursor_visible(&self) -> bool {
        (self.animation_frame / 12) % 2 == 0
    }
}
