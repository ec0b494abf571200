//! Portfolio engine: typed dialogue, filterable galleries, contact form.
//!
//! This crate provides:
//! - A character-by-character dialogue sequencer with click-to-skip,
//!   click-to-advance semantics and an owned, cancellable reveal timer
//! - A category filter and detail selection over static item collections
//! - Contact form validation and delivery through a mail relay
//! - Portfolio content with built-in defaults and JSON loading
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_core::{Page, Portfolio, Site, DEFAULT_REVEAL_INTERVAL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut site = Site::new(Portfolio::default(), DEFAULT_REVEAL_INTERVAL)?;
//!
//!     if let Some(dialogue) = site.dialogue_mut() {
//!         while dialogue.next_tick().await {}
//!         println!("{}", dialogue.sequencer().revealed_text());
//!     }
//!
//!     site.navigate(Page::Projects);
//!     if let Some(projects) = site.projects_mut() {
//!         projects.set_category("Web Development");
//!         println!("{} projects", projects.visible_count());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod site;
pub mod testing;
pub mod timer;
pub mod typewriter;

// Primary public API
pub use config::FolioConfig;
pub use contact::{ContactFields, ContactForm, ContactRelay, Field, RelayError, SubmitStatus};
pub use content::{ContentError, Portfolio, Project, Skill, SkillSummary, SkillTier};
pub use gallery::{CategoryFilter, Gallery, GalleryItem, ALL_CATEGORIES};
pub use site::{Page, Site, View};
pub use timer::{RevealTimer, Typewriter, DEFAULT_REVEAL_INTERVAL};
pub use typewriter::{Advance, Line, RevealState, Script, Sequencer, SequencerError};
