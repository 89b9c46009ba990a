use super::{CategoryKey, String};

/// A single dish. `category` is the owning category: its slug while the
/// dataset is being assembled, its catalog index at runtime.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image: String,
    pub is_veg: bool,
    pub is_spicy: bool,
    pub popular: bool,
    pub category: CategoryKey,
}
