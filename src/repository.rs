use super::constants;
use super::models::{Catalog, Category, MenuItem, Offer, Restaurant, Review};

/// Read-only access to the compiled-in catalog. Copyable handle so
/// controllers can share it freely.
#[derive(Clone, Copy)]
pub struct Repository {
    catalog: &'static Catalog,
}

impl Repository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: &constants::APP_CATALOG,
        }
    }

    #[must_use]
    pub fn info(&self) -> &'static Restaurant {
        &self.catalog.info
    }

    #[must_use]
    pub fn categories(&self) -> &'static [Category] {
        self.catalog.categories
    }

    #[must_use]
    pub fn items(&self) -> &'static [MenuItem] {
        self.catalog.items
    }

    #[must_use]
    pub fn reviews(&self) -> &'static [Review] {
        self.catalog.reviews
    }

    #[must_use]
    pub fn offers(&self) -> &'static [Offer] {
        self.catalog.offers
    }

    #[must_use]
    pub fn category_by_index(&self, index: usize) -> Option<&'static Category> {
        self.catalog.categories.get(index)
    }

    #[must_use]
    pub fn item_by_index(&self, index: usize) -> Option<&'static MenuItem> {
        self.catalog.items.get(index)
    }

    #[must_use]
    pub fn category_index(&self, slug: &str) -> Option<usize> {
        self.catalog.categories_map.get(slug).copied()
    }

    #[must_use]
    pub fn item_index(&self, id: &str) -> Option<usize> {
        self.catalog.items_map.get(id).copied()
    }

    /// Item indices owned by a category, in display order.
    #[must_use]
    pub fn category_items(&self, category_index: usize) -> &'static [usize] {
        self.catalog
            .category_items
            .get(category_index)
            .copied()
            .unwrap_or(&[])
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
