//! Category filter

use super::ViewSync;
use crate::model::Category;
use crate::surface::Surface;
use crate::transport::Transport;

/// Filter selection: every section, or the one whose key matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Key(String),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    pub fn parse(key: &str) -> Self {
        if key == Self::ALL_KEY {
            CategoryFilter::All
        } else {
            CategoryFilter::Key(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Key(key) => key,
        }
    }

    pub fn shows(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Key(key) => key == category.key(),
        }
    }

    pub fn visible(&self) -> Vec<Category> {
        Category::ALL.into_iter().filter(|c| self.shows(*c)).collect()
    }
}

impl<T: Transport, S: Surface> ViewSync<T, S> {
    /// Toggle section visibility. `control` is the key of the button that
    /// triggered the change; it becomes the only active control.
    pub fn show_category(&self, filter: &CategoryFilter, control: &str) {
        self.surface.show_sections(&filter.visible());
        self.surface.set_active_filter(control);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.visible(), Category::ALL.to_vec());
    }

    #[test]
    fn test_single_section() {
        let filter = CategoryFilter::parse("dessert");
        assert_eq!(filter.visible(), vec![Category::Dessert]);
        assert_eq!(filter.key(), "dessert");
    }

    #[test]
    fn test_unknown_key_hides_everything() {
        assert!(CategoryFilter::parse("drinks").visible().is_empty());
        assert!(CategoryFilter::parse("ALL").visible().is_empty());
    }
}
