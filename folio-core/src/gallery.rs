//! Category filter and detail selection over a fixed item collection.
//!
//! The [`Gallery`] never reorders or mutates its items. The inspected item
//! is stored as an index into the collection, so it is always a member.

use std::fmt;

use tracing::{debug, warn};

/// Label of the filter that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// Anything the gallery can filter and inspect.
pub trait GalleryItem {
    type Id: PartialEq + fmt::Debug;

    /// Stable, unique identifier.
    fn id(&self) -> Self::Id;

    /// Category tag the filter matches against.
    fn category(&self) -> &str;
}

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"All"` becomes [`CategoryFilter::All`]; anything else is an exact match.
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter and inspection state over a static collection.
#[derive(Debug, Clone)]
pub struct Gallery<T> {
    items: Vec<T>,
    categories: Vec<String>,
    active: CategoryFilter,
    inspected: Option<usize>,
}

impl<T: GalleryItem> Gallery<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &items {
            if !categories.iter().any(|c| c == item.category()) {
                categories.push(item.category().to_string());
            }
        }

        Self {
            items,
            categories,
            active: CategoryFilter::All,
            inspected: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// `"All"` followed by each distinct category in first-appearance order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active
    }

    /// Switch the filter. Unknown names are kept and simply match nothing.
    pub fn set_category(&mut self, name: &str) {
        let filter = CategoryFilter::parse(name);
        if !self.categories.iter().any(|c| c == name) {
            warn!(category = name, "filter does not match any known category");
        }
        debug!(category = %filter, "gallery filter changed");
        self.active = filter;
    }

    /// Items matching the active filter, in their original order.
    pub fn visible_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.active.matches(item.category()))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.active.matches(item.category()))
            .count()
    }

    /// Number of items tagged with `category` (`"All"` counts everything).
    pub fn count_in(&self, category: &str) -> usize {
        let filter = CategoryFilter::parse(category);
        self.items
            .iter()
            .filter(|item| filter.matches(item.category()))
            .count()
    }

    /// Open the detail view for the item with this id.
    pub fn select(&mut self, id: &T::Id) -> Option<&T> {
        match self.items.iter().position(|item| &item.id() == id) {
            Some(index) => {
                debug!(?id, "gallery item inspected");
                self.inspected = Some(index);
                self.items.get(index)
            }
            None => {
                warn!(?id, "ignoring selection of unknown gallery item");
                None
            }
        }
    }

    /// Open the detail view for the `index`-th visible item.
    pub fn select_visible(&mut self, index: usize) -> Option<&T> {
        let id = self.visible_items().get(index).map(|item| item.id())?;
        self.select(&id)
    }

    /// Close the detail view.
    pub fn dismiss(&mut self) {
        if self.inspected.take().is_some() {
            debug!("gallery detail dismissed");
        }
    }

    pub fn inspected_item(&self) -> Option<&T> {
        self.inspected.and_then(|index| self.items.get(index))
    }

    pub fn is_inspecting(&self) -> bool {
        self.inspected.is_some()
    }
}
