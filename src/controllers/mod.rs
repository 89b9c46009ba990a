mod actions;
mod menu_filter;
mod offers_rotation;
mod ordering;
mod recommendations;
mod section_scroll;

pub use self::actions::Actions as ActionsController;
pub use self::menu_filter::MenuFilter as MenuFilterController;
pub use self::offers_rotation::OffersRotation as OffersRotationController;
pub use self::ordering::Ordering as OrderingController;
pub use self::recommendations::Recommendations as RecommendationsController;
pub use self::section_scroll::SectionScroll as SectionScrollController;
