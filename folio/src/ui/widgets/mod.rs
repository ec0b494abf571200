//! TUI widgets for the portfolio

pub mod contact_form;
pub mod detail;
pub mod dialogue;
pub mod gallery;
pub mod status_bar;

pub use contact_form::ContactFormWidget;
pub use detail::DetailWidget;
pub use dialogue::DialogueWidget;
pub use gallery::{CardListWidget, CardView, FilterBarWidget};
pub use status_bar::{HotkeyBarWidget, NavTabsWidget, StatusBarWidget};
