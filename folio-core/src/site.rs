//! Site - the primary public API for browsing the portfolio.
//!
//! A [`Site`] owns the content and the state of the page currently on
//! screen. Page state lives exactly as long as the page is mounted:
//! navigating away drops it (cancelling the dialogue timer) and
//! navigating back builds it fresh.

use std::fmt;
use std::time::Duration;

use tracing::info;

use crate::contact::ContactForm;
use crate::content::{ContentError, Portfolio, Project, Skill};
use crate::gallery::Gallery;
use crate::timer::Typewriter;
use crate::typewriter::Script;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Projects,
    Skills,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Projects,
        Page::Skills,
        Page::About,
        Page::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Work",
            Page::Skills => "Skills",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Parse a page name as typed in headless mode.
    pub fn parse(name: &str) -> Option<Page> {
        match name.to_ascii_lowercase().as_str() {
            "home" | "main" => Some(Page::Home),
            "projects" | "project" | "work" => Some(Page::Projects),
            "skills" | "skill" => Some(Page::Skills),
            "about" => Some(Page::About),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// State of the mounted page.
#[derive(Debug)]
pub enum View {
    Home(Typewriter),
    Projects(Gallery<Project>),
    Skills(Gallery<Skill>),
    About,
    Contact(ContactForm),
}

impl View {
    pub fn page(&self) -> Page {
        match self {
            View::Home(_) => Page::Home,
            View::Projects(_) => Page::Projects,
            View::Skills(_) => Page::Skills,
            View::About => Page::About,
            View::Contact(_) => Page::Contact,
        }
    }
}

/// A browsing session over one portfolio.
#[derive(Debug)]
pub struct Site {
    portfolio: Portfolio,
    script: Script,
    reveal_interval: Duration,
    view: View,
}

impl Site {
    /// Validate the content and mount the home page.
    ///
    /// Must be called from within a tokio runtime (the dialogue timer).
    pub fn new(portfolio: Portfolio, reveal_interval: Duration) -> Result<Self, ContentError> {
        portfolio.validate()?;
        let script = portfolio.script()?;
        Ok(Self {
            view: View::Home(Typewriter::start(script.clone(), reveal_interval)),
            portfolio,
            script,
            reveal_interval,
        })
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn page(&self) -> Page {
        self.view.page()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Unmount the current page and mount `page` with fresh state.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page() {
            return;
        }
        info!(from = %self.page(), to = %page, "navigating");

        // Drop the old view first so its timer is gone before a new one starts.
        self.view = View::About;
        self.view = match page {
            Page::Home => View::Home(Typewriter::start(
                self.script.clone(),
                self.reveal_interval,
            )),
            Page::Projects => View::Projects(Gallery::new(self.portfolio.projects.clone())),
            Page::Skills => View::Skills(Gallery::new(self.portfolio.skills.clone())),
            Page::About => View::About,
            Page::Contact => View::Contact(ContactForm::new()),
        };
    }

    pub fn dialogue(&self) -> Option<&Typewriter> {
        match &self.view {
            View::Home(typewriter) => Some(typewriter),
            _ => None,
        }
    }

    pub fn dialogue_mut(&mut self) -> Option<&mut Typewriter> {
        match &mut self.view {
            View::Home(typewriter) => Some(typewriter),
            _ => None,
        }
    }

    pub fn projects(&self) -> Option<&Gallery<Project>> {
        match &self.view {
            View::Projects(gallery) => Some(gallery),
            _ => None,
        }
    }

    pub fn projects_mut(&mut self) -> Option<&mut Gallery<Project>> {
        match &mut self.view {
            View::Projects(gallery) => Some(gallery),
            _ => None,
        }
    }

    pub fn skills(&self) -> Option<&Gallery<Skill>> {
        match &self.view {
            View::Skills(gallery) => Some(gallery),
            _ => None,
        }
    }

    pub fn skills_mut(&mut self) -> Option<&mut Gallery<Skill>> {
        match &mut self.view {
            View::Skills(gallery) => Some(gallery),
            _ => None,
        }
    }

    pub fn contact(&self) -> Option<&ContactForm> {
        match &self.view {
            View::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn contact_mut(&mut self) -> Option<&mut ContactForm> {
        match &mut self.view {
            View::Contact(form) => Some(form),
            _ => None,
        }
    }

    /// Apply due dialogue ticks, if the home page is mounted.
    pub fn pump(&mut self) -> usize {
        self.dialogue_mut().map(Typewriter::pump).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::DEFAULT_REVEAL_INTERVAL;

    #[test]
    fn test_page_cycle_and_parse() {
        assert_eq!(Page::Contact.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Contact);
        assert_eq!(Page::parse("Work"), Some(Page::Projects));
        assert_eq!(Page::parse("nowhere"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_home_drops_dialogue() {
        let mut site = Site::new(Portfolio::default(), DEFAULT_REVEAL_INTERVAL).unwrap();
        assert!(site.dialogue().is_some_and(Typewriter::has_timer));

        site.navigate(Page::Projects);
        assert!(site.dialogue().is_none());
        assert_eq!(site.pump(), 0);

        site.navigate(Page::Home);
        let dialogue = site.dialogue().unwrap();
        assert_eq!(dialogue.sequencer().cursor(), 0);
        assert_eq!(dialogue.sequencer().revealed_len(), 0);
        assert_eq!(dialogue.sequencer().script().lines(), &site.portfolio().dialogue[..]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_state_is_fresh_per_mount() {
        let mut site = Site::new(Portfolio::default(), DEFAULT_REVEAL_INTERVAL).unwrap();
        site.navigate(Page::Projects);
        let gallery = site.projects_mut().unwrap();
        gallery.set_category("Web Development");
        gallery.select(&5);

        site.navigate(Page::About);
        site.navigate(Page::Projects);
        let gallery = site.projects().unwrap();
        assert_eq!(gallery.active_category().label(), "All");
        assert!(gallery.inspected_item().is_none());
    }
}
