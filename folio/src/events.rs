//! Event handling for the portfolio TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use folio_core::Page;

use crate::app::{App, InputMode};
use crate::ui::layout::{detail_close_area, detail_popup_area};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return EventResult::Continue;
    }
    // Clicks never reach the page under the help overlay
    if app.has_overlay() {
        return EventResult::Continue;
    }
    let position = Position::new(mouse.column, mouse.row);

    if app.is_inspecting() {
        let on_close = detail_close_area(app.screen).contains(position);
        let outside = !detail_popup_area(app.screen).contains(position);
        if on_close || outside {
            app.dismiss_detail();
            return EventResult::NeedsRedraw;
        }
        return EventResult::Continue;
    }

    match app.page() {
        Page::Home => {
            app.advance_dialogue();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Edit => handle_edit_mode(app, key),
    }
}

/// Any of the usual close keys closes the help overlay
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys in NORMAL mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    // The detail overlay is modal
    if app.is_inspecting() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('x') => {
                app.dismiss_detail();
                EventResult::NeedsRedraw
            }
            KeyCode::Char('q') => EventResult::Quit,
            _ => EventResult::Continue,
        };
    }

    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Tab => {
            app.next_page();
            return EventResult::NeedsRedraw;
        }
        KeyCode::BackTab => {
            app.prev_page();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.navigate(Page::ALL[index]);
            return EventResult::NeedsRedraw;
        }
        _ => {}
    }

    match app.page() {
        Page::Home => handle_home_key(app, key),
        Page::Projects | Page::Skills => handle_gallery_key(app, key),
        Page::Contact => handle_contact_key(app, key),
        Page::About => EventResult::Continue,
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.advance_dialogue();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.shift_category(-1),
        KeyCode::Char('l') | KeyCode::Right => app.shift_category(1),
        KeyCode::Char('a') => app.choose_category_at(0),
        KeyCode::Char('j') | KeyCode::Down => app.highlight_next(),
        KeyCode::Char('k') | KeyCode::Up => app.highlight_prev(),
        KeyCode::Enter => {
            app.open_highlighted();
        }
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

fn handle_contact_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_contact()
        }
        KeyCode::Char('i') | KeyCode::Enter => app.enter_edit_mode(),
        KeyCode::Char('j') | KeyCode::Down => app.next_field(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_field(),
        KeyCode::Char('r') => app.retry_contact(),
        KeyCode::Char('n') => app.new_message(),
        KeyCode::Esc => app.dismiss_contact_error(),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}

/// Handle keys in EDIT mode (typing into the contact form)
fn handle_edit_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_contact()
        }
        KeyCode::Esc => app.enter_normal_mode(),
        KeyCode::Tab | KeyCode::Enter => app.next_field(),
        KeyCode::BackTab => app.prev_field(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.type_char(c),
        _ => return EventResult::Continue,
    }
    EventResult::NeedsRedraw
}
