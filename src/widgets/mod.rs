mod channel_card;
mod dish_row;
mod hero_section;
mod location_section;
mod menu_group;
mod menu_section;
mod offer_card;
mod offers_section;
mod ordering_section;
mod page_content;
mod recommendation_row;
mod recommendations_panel;
mod review_card;
mod reviews_section;
mod showcase_page;
mod sidebar;
mod sidebar_row;
mod stat_tile;
mod window;

pub use self::channel_card::ChannelCard;
pub use self::dish_row::DishRow;
pub use self::hero_section::HeroSection;
pub use self::location_section::LocationSection;
pub use self::menu_group::MenuGroup;
pub use self::menu_section::MenuSection;
pub use self::offer_card::OfferCard;
pub use self::offers_section::OffersSection;
pub use self::ordering_section::OrderingSection;
pub use self::page_content::PageContent;
pub use self::recommendation_row::RecommendationRow;
pub use self::recommendations_panel::RecommendationsPanel;
pub use self::review_card::ReviewCard;
pub use self::reviews_section::ReviewsSection;
pub use self::showcase_page::{ShowcasePage, ShowcaseSection};
pub use self::sidebar::Sidebar;
pub use self::sidebar_row::SidebarRow;
pub use self::stat_tile::StatTile;
pub use self::window::Window;
