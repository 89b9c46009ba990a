use super::menu_filter::FilterTag;
use super::repository::Repository;
use super::review_stats::ReviewStats;
use super::ui::Ui;
use super::widgets::{DishRow, MenuGroup, OfferCard, ReviewCard, ShowcaseSection, SidebarRow};

/// Fills the widget tree from the static catalog, once, right after the
/// window is built.
pub struct Populator {}

impl Populator {
    pub fn populate(ui: &Ui, repository: Repository) {
        Self::populate_sidebar(ui, repository);
        Self::populate_hero(ui, repository);
        Self::populate_menu(ui, repository);
        Self::populate_offers(ui, repository);
        Self::populate_ordering(ui, repository);
        Self::populate_reviews(ui, repository);
        Self::populate_location(ui, repository);
    }

    fn populate_sidebar(ui: &Ui, repository: Repository) {
        let sidebar = ui.sidebar();
        for &section in ShowcaseSection::all() {
            sidebar.append_row(SidebarRow::from_section(section));
        }
        sidebar.set_info(repository.info());
    }

    fn populate_hero(ui: &Ui, repository: Repository) {
        ui.hero_section().set_info(repository.info());
    }

    fn populate_menu(ui: &Ui, repository: Repository) {
        let menu_section = ui.menu_section();

        for (index, category) in repository.categories().iter().enumerate() {
            menu_section.add_category_chip(category, index);
        }

        for &tag in FilterTag::all() {
            menu_section.add_filter_chip(tag);
        }

        for (category_index, category) in repository.categories().iter().enumerate() {
            let group = MenuGroup::from_category(category, category_index);

            for &item_index in repository.category_items(category_index) {
                if let Some(item) = repository.item_by_index(item_index) {
                    group.append_row(DishRow::new(item, item_index));
                }
            }

            menu_section.add_group(group);
        }
    }

    fn populate_offers(ui: &Ui, repository: Repository) {
        let offers_section = ui.offers_section();
        for (index, offer) in repository.offers().iter().enumerate() {
            offers_section.append_card(OfferCard::new(offer, index));
        }
    }

    fn populate_ordering(ui: &Ui, repository: Repository) {
        ui.ordering_section().set_info(repository.info());
    }

    fn populate_reviews(ui: &Ui, repository: Repository) {
        let reviews_section = ui.reviews_section();

        for (index, review) in repository.reviews().iter().enumerate() {
            reviews_section.append_card(ReviewCard::new(review, index));
        }

        reviews_section.set_stats(&ReviewStats::from_reviews(repository.reviews()));
    }

    fn populate_location(ui: &Ui, repository: Repository) {
        let info = repository.info();
        let open_now = glib::DateTime::now_local()
            .is_ok_and(|now| info.is_open(now.hour().clamp(0, 23) as u32));

        ui.location_section().set_info(info, open_now);
    }
}
