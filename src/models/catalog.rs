use super::category::Category;
use super::item::MenuItem;
use super::offer::Offer;
use super::restaurant::Restaurant;
use super::review::Review;

/// The complete static dataset, generated into `OUT_DIR/catalog.rs` by the
/// build script and never mutated afterwards. Items are stored flattened in
/// display order: categories in catalog order, items in-category order.
#[derive(Debug)]
pub struct Catalog {
    pub info: Restaurant,
    pub categories: &'static [Category],
    pub items: &'static [MenuItem],
    pub reviews: &'static [Review],
    pub offers: &'static [Offer],
    pub categories_map: phf::Map<&'static str, usize>,
    pub items_map: phf::Map<&'static str, usize>,
    pub category_items: &'static [&'static [usize]],
}
