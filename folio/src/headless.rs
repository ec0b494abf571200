//! Headless mode for the portfolio.
//!
//! A line-oriented interface for scripting and automated testing. Every
//! command prints the observable state it changed. The dialogue only
//! reveals on `#tick`, so transcripts are deterministic.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use folio_core::{
    ContactRelay, Field, Gallery, GalleryItem, Page, RelayError, Site, SubmitStatus, View,
};

const HELP: &[&str] = &[
    "  #next                 - Finish the current line, or go to the next one",
    "  #tick [n]             - Reveal up to n characters (default 1)",
    "  #page <name>          - home, work, skills, about, contact",
    "  #filter <category>    - Filter the gallery (\"All\" shows everything)",
    "  #open <id>            - Inspect a project (number) or skill (name)",
    "  #close                - Close the detail view",
    "  #list                 - Show the visible gallery items",
    "  #field <name> <value> - Set a contact field (name, email, subject, message)",
    "  #send                 - Submit the contact form",
    "  #status               - Show the current page state",
    "  #help                 - Show this help",
    "  #quit                 - Exit",
];

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(Vec<String>),
    Quit,
}

/// A scripted browsing session.
pub struct HeadlessSession {
    site: Site,
    relay: Option<Arc<dyn ContactRelay>>,
}

impl HeadlessSession {
    pub fn new(site: Site, relay: Option<Arc<dyn ContactRelay>>) -> Self {
        Self { site, relay }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Run one command line.
    pub async fn execute(&mut self, line: &str) -> Step {
        let line = line.trim();
        let Some(command) = line.strip_prefix('#') else {
            return Step::Output(vec![
                "[ERROR] Commands start with '#'. Type #help for help.".to_string(),
            ]);
        };
        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        let lines = match name {
            "quit" | "exit" => return Step::Quit,
            "help" => {
                let mut lines = vec!["[HELP]".to_string()];
                lines.extend(HELP.iter().map(|s| s.to_string()));
                lines
            }
            "status" => self.status(),
            "next" => self.next(),
            "tick" => self.tick(rest).await,
            "page" => self.page(rest),
            "filter" => self.filter(rest),
            "open" => self.open(rest),
            "close" => self.close(),
            "list" => self.list(),
            "field" => self.field(rest),
            "send" => self.send().await,
            _ => vec!["[ERROR] Unknown command. Type #help for help.".to_string()],
        };
        Step::Output(lines)
    }

    fn status(&self) -> Vec<String> {
        let mut lines = vec![format!("[PAGE] {}", self.site.page())];
        match self.site.view() {
            View::Home(_) => lines.extend(self.dialogue_state()),
            View::Projects(gallery) => lines.extend(gallery_state(gallery, |p| {
                format!("#{} {} ({})", p.id, p.title, p.category)
            })),
            View::Skills(gallery) => lines.extend(gallery_state(gallery, |s| {
                format!("{} ({}, {}%)", s.name, s.category, s.level)
            })),
            View::About => {
                let about = &self.site.portfolio().about;
                lines.extend(about.paragraphs.iter().map(|p| format!("  {p}")));
            }
            View::Contact(form) => {
                for field in Field::ALL {
                    let mut line = format!("  {}: {}", field.label(), form.fields().get(field));
                    if let Some(error) = form.errors().get(field) {
                        line.push_str(&format!("  <- {error}"));
                    }
                    lines.push(line);
                }
                lines.push(format!("[SUBMIT] {}", describe_status(form.status())));
            }
        }
        lines
    }

    fn dialogue_state(&self) -> Vec<String> {
        let Some(typewriter) = self.site.dialogue() else {
            return vec!["[ERROR] No dialogue on this page. Try #page home.".to_string()];
        };
        let sequencer = typewriter.sequencer();
        let state = if sequencer.is_complete() {
            "complete"
        } else {
            "revealing"
        };
        vec![format!(
            "[DIALOGUE {}/{}] {}: {} ({state})",
            sequencer.cursor() + 1,
            sequencer.script().len(),
            sequencer.current_line().speaker,
            sequencer.revealed_text(),
        )]
    }

    fn next(&mut self) -> Vec<String> {
        if let Some(typewriter) = self.site.dialogue_mut() {
            typewriter.advance();
        }
        self.dialogue_state()
    }

    async fn tick(&mut self, arg: &str) -> Vec<String> {
        let count = if arg.is_empty() {
            1
        } else {
            match arg.parse::<usize>() {
                Ok(n) => n,
                Err(_) => return vec![format!("[ERROR] Not a count: {arg}")],
            }
        };
        if let Some(typewriter) = self.site.dialogue_mut() {
            for _ in 0..count {
                if !typewriter.next_tick().await {
                    break;
                }
            }
        }
        self.dialogue_state()
    }

    fn page(&mut self, arg: &str) -> Vec<String> {
        match Page::parse(arg) {
            Some(page) => {
                self.site.navigate(page);
                self.status()
            }
            None => vec![format!("[ERROR] Unknown page: {arg}")],
        }
    }

    fn filter(&mut self, arg: &str) -> Vec<String> {
        if arg.is_empty() {
            return vec!["[ERROR] Usage: #filter <category>".to_string()];
        }
        match self.site.view_mut() {
            View::Projects(gallery) => gallery.set_category(arg),
            View::Skills(gallery) => gallery.set_category(arg),
            _ => return not_a_gallery(),
        }
        self.list()
    }

    fn open(&mut self, arg: &str) -> Vec<String> {
        let found = match self.site.view_mut() {
            View::Projects(gallery) => match arg.parse::<u32>() {
                Ok(id) => gallery.select(&id).is_some(),
                Err(_) => return vec![format!("[ERROR] Project ids are numbers: {arg}")],
            },
            View::Skills(gallery) => gallery.select(&arg.to_string()).is_some(),
            _ => return not_a_gallery(),
        };
        if !found {
            return vec![format!("[IGNORED] No item with id {arg}")];
        }
        self.detail()
    }

    fn detail(&self) -> Vec<String> {
        match self.site.view() {
            View::Projects(gallery) => match gallery.inspected_item() {
                Some(p) => {
                    let mut lines = vec![
                        format!("[DETAIL] #{} {}", p.id, p.title),
                        format!("  {}", p.category),
                        format!("  {}", p.description),
                        format!("  Technologies: {}", p.technologies.join(", ")),
                    ];
                    if let Some(url) = &p.live_url {
                        lines.push(format!("  Live Demo: {url}"));
                    }
                    if let Some(url) = &p.github_url {
                        lines.push(format!("  GitHub: {url}"));
                    }
                    lines
                }
                None => vec!["[DETAIL] none".to_string()],
            },
            View::Skills(gallery) => match gallery.inspected_item() {
                Some(s) => {
                    let mut lines = vec![
                        format!("[DETAIL] {}", s.name),
                        format!("  {} - {}% ({})", s.category, s.level, s.tier().name()),
                        format!("  {}", s.description),
                    ];
                    if let Some(experience) = &s.experience {
                        lines.push(format!("  Experience: {experience}"));
                    }
                    lines
                }
                None => vec!["[DETAIL] none".to_string()],
            },
            _ => not_a_gallery(),
        }
    }

    fn close(&mut self) -> Vec<String> {
        match self.site.view_mut() {
            View::Projects(gallery) => gallery.dismiss(),
            View::Skills(gallery) => gallery.dismiss(),
            _ => return not_a_gallery(),
        }
        self.detail()
    }

    fn list(&self) -> Vec<String> {
        match self.site.view() {
            View::Projects(gallery) => gallery_state(gallery, |p| {
                format!("#{} {} ({})", p.id, p.title, p.category)
            }),
            View::Skills(gallery) => gallery_state(gallery, |s| {
                format!("{} ({}, {}%)", s.name, s.category, s.level)
            }),
            _ => not_a_gallery(),
        }
    }

    fn field(&mut self, arg: &str) -> Vec<String> {
        let (name, value) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
        let field = match name.to_ascii_lowercase().as_str() {
            "name" => Field::Name,
            "email" => Field::Email,
            "subject" => Field::Subject,
            "message" => Field::Message,
            _ => return vec![format!("[ERROR] Unknown field: {name}")],
        };
        match self.site.contact_mut() {
            Some(form) => {
                form.set_field(field, value.trim());
                vec![format!("[FIELD] {}: {}", field.label(), form.fields().get(field))]
            }
            None => vec!["[ERROR] The contact form is on #page contact.".to_string()],
        }
    }

    async fn send(&mut self) -> Vec<String> {
        let relay = self.relay.clone();
        let Some(form) = self.site.contact_mut() else {
            return vec!["[ERROR] The contact form is on #page contact.".to_string()];
        };

        form.dismiss_error();
        if let Some(fields) = form.begin_submit() {
            let result = match relay {
                Some(relay) => relay.submit(&fields).await,
                None => Err(RelayError::NotConfigured(
                    "EMAILJS_* variables are not set".to_string(),
                )),
            };
            form.finish_submit(result);
        }

        let mut lines = Vec::new();
        for field in Field::ALL {
            if let Some(error) = form.errors().get(field) {
                lines.push(format!("[INVALID] {}: {error}", field.label()));
            }
        }
        lines.push(format!("[SUBMIT] {}", describe_status(form.status())));
        lines
    }
}

fn gallery_state<T: GalleryItem>(
    gallery: &Gallery<T>,
    describe: impl Fn(&T) -> String,
) -> Vec<String> {
    let visible = gallery.visible_items();
    let mut lines = vec![format!(
        "[FILTER] {} ({} of {}) | categories: {}",
        gallery.active_category(),
        visible.len(),
        gallery.items().len(),
        gallery.categories().join(", ")
    )];
    if visible.is_empty() {
        lines.push("  (nothing in this category)".to_string());
    }
    lines.extend(visible.into_iter().map(|item| format!("  {}", describe(item))));
    lines
}

fn not_a_gallery() -> Vec<String> {
    vec!["[ERROR] No gallery on this page. Try #page work or #page skills.".to_string()]
}

fn describe_status(status: &SubmitStatus) -> String {
    match status {
        SubmitStatus::Idle => "idle".to_string(),
        SubmitStatus::Sending => "sending".to_string(),
        SubmitStatus::Sent => "sent".to_string(),
        SubmitStatus::Failed(message) => format!("failed: {message}"),
    }
}

/// Run the portfolio in headless mode, reading commands from stdin.
pub async fn run_headless(mut session: HeadlessSession) -> io::Result<()> {
    let portfolio = session.site().portfolio();
    println!("=== {} | Headless Mode ===", portfolio.owner);
    println!("{}", portfolio.headline);
    println!();
    println!("Commands:");
    for line in HELP {
        println!("{line}");
    }
    println!();
    for line in session.status() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.execute(&line).await {
            Step::Quit => {
                println!("Goodbye!");
                break;
            }
            Step::Output(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::testing::MockRelay;
    use folio_core::{Portfolio, DEFAULT_REVEAL_INTERVAL};

    fn session() -> HeadlessSession {
        let site = Site::new(Portfolio::default(), DEFAULT_REVEAL_INTERVAL).unwrap();
        HeadlessSession::new(site, None)
    }

    async fn run(session: &mut HeadlessSession, line: &str) -> Vec<String> {
        match session.execute(line).await {
            Step::Output(lines) => lines,
            Step::Quit => panic!("unexpected quit on {line}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_then_next_cycle() {
        let mut session = session();
        let out = run(&mut session, "#tick 5").await;
        assert_eq!(out, vec!["[DIALOGUE 1/4] JOSAIAH: Hello (revealing)"]);

        let out = run(&mut session, "#next").await;
        assert_eq!(
            out,
            vec!["[DIALOGUE 1/4] JOSAIAH: Hello there! I'm Josaiah. (complete)"]
        );

        let out = run(&mut session, "#next").await;
        assert_eq!(out, vec!["[DIALOGUE 2/4] JOSAIAH:  (revealing)"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_open_close() {
        let mut session = session();
        run(&mut session, "#page work").await;

        let out = run(&mut session, "#filter Web Development").await;
        assert!(out[0].starts_with("[FILTER] Web Development (2 of 7)"));
        assert_eq!(out[1], "  #5 Balay Balayan (Web Development)");
        assert_eq!(out[2], "  #7 Coastline 5023 (Web Development)");

        let out = run(&mut session, "#open 7").await;
        assert_eq!(out[0], "[DETAIL] #7 Coastline 5023");

        let out = run(&mut session, "#open 99").await;
        assert_eq!(out, vec!["[IGNORED] No item with id 99"]);

        let out = run(&mut session, "#close").await;
        assert_eq!(out, vec!["[DETAIL] none"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_filter_shows_empty_state() {
        let mut session = session();
        run(&mut session, "#page skills").await;
        let out = run(&mut session, "#filter Cooking").await;
        assert_eq!(out[1], "  (nothing in this category)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_skill_opened_by_name() {
        let mut session = session();
        run(&mut session, "#page skills").await;
        let out = run(&mut session, "#open React Native").await;
        assert_eq!(out[0], "[DETAIL] React Native");
        assert_eq!(out[1], "  Mobile - 75% (Intermediate)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_send_flow() {
        let site = Site::new(Portfolio::default(), DEFAULT_REVEAL_INTERVAL).unwrap();
        let relay = Arc::new(MockRelay::failing_once("offline"));
        let shared: Arc<dyn ContactRelay> = relay.clone();
        let mut session = HeadlessSession::new(site, Some(shared));

        run(&mut session, "#page contact").await;
        let out = run(&mut session, "#send").await;
        assert!(out.contains(&"[INVALID] Name: Name is required".to_string()));
        assert_eq!(out.last().map(String::as_str), Some("[SUBMIT] idle"));

        run(&mut session, "#field name Ada Lovelace").await;
        run(&mut session, "#field email ada@example.com").await;
        run(&mut session, "#field subject Hello").await;
        run(&mut session, "#field message Loved the helmet detector!").await;

        let out = run(&mut session, "#send").await;
        assert_eq!(
            out,
            vec!["[SUBMIT] failed: Could not reach the mail service: offline"]
        );

        let out = run(&mut session, "#send").await;
        assert_eq!(out, vec!["[SUBMIT] sent"]);
        assert_eq!(relay.sent()[1].name, "Ada Lovelace");
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_without_relay() {
        let mut session = session();
        run(&mut session, "#page contact").await;
        for line in [
            "#field name Ada",
            "#field email ada@example.com",
            "#field subject Hi",
            "#field message Long enough message",
        ] {
            run(&mut session, line).await;
        }
        let out = run(&mut session, "#send").await;
        assert!(out[0].starts_with("[SUBMIT] failed: Contact form is not configured"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_and_errors() {
        let mut session = session();
        assert_eq!(session.execute("#quit").await, Step::Quit);
        assert_eq!(
            run(&mut session, "#bogus").await,
            vec!["[ERROR] Unknown command. Type #help for help."]
        );
        assert_eq!(
            run(&mut session, "#list").await,
            vec!["[ERROR] No gallery on this page. Try #page work or #page skills."]
        );
    }
}
