use super::models::{Category, MenuItem};

/// Dietary/popularity filter applied on top of the category selection.
/// Unrecognized tags fall back to `All`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterTag {
    #[default]
    All,
    Veg,
    NonVeg,
    Popular,
}

impl FilterTag {
    pub const COUNT: usize = 4;

    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "veg" => Self::Veg,
            "non-veg" => Self::NonVeg,
            "popular" => Self::Popular,
            _ => Self::All,
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
            Self::Popular => "popular",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Items",
            Self::Veg => "Vegetarian",
            Self::NonVeg => "Non-Veg",
            Self::Popular => "Popular",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "🍽️",
            Self::Veg => "🥬",
            Self::NonVeg => "🍖",
            Self::Popular => "⭐",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &[Self::All, Self::Veg, Self::NonVeg, Self::Popular]
    }

    #[must_use]
    pub const fn matches(self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Veg => item.is_veg,
            Self::NonVeg => !item.is_veg,
            Self::Popular => item.popular,
        }
    }
}

/// Category restriction with toggle semantics: selecting the active
/// category again clears the restriction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategorySelection(Option<usize>);

impl CategorySelection {
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    pub fn toggle(&mut self, category_index: usize) {
        self.0 = if self.0 == Some(category_index) {
            None
        } else {
            Some(category_index)
        };
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub const fn active(self) -> Option<usize> {
        self.0
    }

    #[must_use]
    pub fn is_active(self, category_index: usize) -> bool {
        self.0 == Some(category_index)
    }
}

/// Derives the visible menu view: items flattened in catalog order,
/// restricted to the selected category (if any) and the filter tag.
/// Returns `(item_index, item)` pairs so callers can address rows.
pub fn filter_menu(
    items: &[MenuItem],
    selection: Option<usize>,
    tag: FilterTag,
) -> Vec<(usize, &MenuItem)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| selection.is_none_or(|category| item.category == category))
        .filter(|(_, item)| tag.matches(item))
        .collect()
}

/// Slug-addressed variant. An unknown slug yields an empty view rather
/// than an error; `None` means unrestricted.
pub fn filter_menu_by_slug<'a>(
    categories: &[Category],
    items: &'a [MenuItem],
    selected_slug: Option<&str>,
    tag: FilterTag,
) -> Vec<(usize, &'a MenuItem)> {
    match selected_slug {
        None => filter_menu(items, None, tag),
        Some(slug) => categories
            .iter()
            .position(|category| category.slug == slug)
            .map_or_else(Vec::new, |index| filter_menu(items, Some(index), tag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        id: &'static str,
        category: usize,
        is_veg: bool,
        is_spicy: bool,
        popular: bool,
    ) -> MenuItem {
        MenuItem {
            id,
            name: id,
            description: "",
            price: 100,
            image: "",
            is_veg,
            is_spicy,
            popular,
            category,
        }
    }

    fn sample_items() -> Vec<MenuItem> {
        vec![
            item("assamese-thali", 0, false, false, true),
            item("veg-thali", 0, true, false, true),
            item("masor-tenga", 1, false, true, true),
            item("aloo-pitika", 1, true, false, false),
            item("laal-sah", 2, true, false, true),
        ]
    }

    fn sample_categories() -> Vec<Category> {
        vec![
            Category {
                slug: "thali",
                name: "Traditional Thali",
                icon: "🍛",
            },
            Category {
                slug: "mains",
                name: "Main Dishes",
                icon: "🍲",
            },
            Category {
                slug: "beverages",
                name: "Beverages",
                icon: "🍵",
            },
        ]
    }

    #[test]
    fn unrestricted_view_preserves_catalog_order() {
        let items = sample_items();
        let view = filter_menu(&items, None, FilterTag::All);

        let ids: Vec<_> = view.iter().map(|(_, item)| item.id).collect();
        assert_eq!(
            ids,
            [
                "assamese-thali",
                "veg-thali",
                "masor-tenga",
                "aloo-pitika",
                "laal-sah"
            ]
        );
    }

    #[test]
    fn view_is_a_subset_of_the_catalog() {
        let items = sample_items();

        for &tag in FilterTag::all() {
            for selection in [None, Some(0), Some(1), Some(2), Some(99)] {
                let view = filter_menu(&items, selection, tag);
                assert!(view.len() <= items.len());
                for (index, item) in view {
                    assert_eq!(items[index].id, item.id);
                }
            }
        }
    }

    #[test]
    fn category_restriction_only_yields_owned_items() {
        let items = sample_items();
        let view = filter_menu(&items, Some(1), FilterTag::All);

        assert_eq!(view.len(), 2);
        for (_, item) in view {
            assert_eq!(item.category, 1);
        }
    }

    #[test]
    fn veg_filter_only_yields_vegetarian_items() {
        let items = sample_items();

        for (_, item) in filter_menu(&items, None, FilterTag::Veg) {
            assert!(item.is_veg);
        }
        for (_, item) in filter_menu(&items, None, FilterTag::NonVeg) {
            assert!(!item.is_veg);
        }
        for (_, item) in filter_menu(&items, None, FilterTag::Popular) {
            assert!(item.popular);
        }
    }

    #[test]
    fn category_and_tag_compose() {
        let items = sample_items();
        let view = filter_menu(&items, Some(1), FilterTag::Veg);

        let ids: Vec<_> = view.iter().map(|(_, item)| item.id).collect();
        assert_eq!(ids, ["aloo-pitika"]);
    }

    #[test]
    fn unknown_slug_yields_empty_view() {
        let categories = sample_categories();
        let items = sample_items();

        let view = filter_menu_by_slug(&categories, &items, Some("desserts"), FilterTag::All);
        assert!(view.is_empty());
    }

    #[test]
    fn known_slug_matches_index_restriction() {
        let categories = sample_categories();
        let items = sample_items();

        let by_slug = filter_menu_by_slug(&categories, &items, Some("beverages"), FilterTag::All);
        let by_index = filter_menu(&items, Some(2), FilterTag::All);

        assert_eq!(by_slug.len(), by_index.len());
        assert_eq!(by_slug[0].0, by_index[0].0);
    }

    #[test]
    fn unrecognized_tag_falls_back_to_all() {
        assert_eq!(FilterTag::parse("jain"), FilterTag::All);
        assert_eq!(FilterTag::parse(""), FilterTag::All);
        assert_eq!(FilterTag::parse("non-veg"), FilterTag::NonVeg);
    }

    #[test]
    fn double_toggle_returns_to_unrestricted() {
        let mut selection = CategorySelection::new();
        assert_eq!(selection.active(), None);

        selection.toggle(1);
        assert_eq!(selection.active(), Some(1));

        selection.toggle(1);
        assert_eq!(selection.active(), None);
    }

    #[test]
    fn toggling_another_category_switches_the_selection() {
        let mut selection = CategorySelection::new();
        selection.toggle(0);
        selection.toggle(2);
        assert_eq!(selection.active(), Some(2));

        selection.clear();
        assert_eq!(selection.active(), None);
    }
}
