use super::super::prelude::*;
use super::super::review_stats::ReviewStats;
use super::review_card::ReviewCard;
use super::stat_tile::StatTile;

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/reviews_section.ui")]
    pub struct ReviewsSection {
        #[template_child(id = "reviews-section-satisfaction-tile")]
        pub satisfaction_tile: TemplateChild<StatTile>,
        #[template_child(id = "reviews-section-average-tile")]
        pub average_tile: TemplateChild<StatTile>,
        #[template_child(id = "reviews-section-sentiment-tile")]
        pub sentiment_tile: TemplateChild<StatTile>,
        #[template_child(id = "reviews-section-carousel")]
        pub carousel: TemplateChild<adw::Carousel>,
        #[template_child(id = "reviews-section-previous-button")]
        pub previous_button: TemplateChild<gtk::Button>,
        #[template_child(id = "reviews-section-next-button")]
        pub next_button: TemplateChild<gtk::Button>,

        pub cards: RefCell<HashMap<usize, ReviewCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ReviewsSection {
        const NAME: &'static str = "ReviewsSection";
        type Type = super::ReviewsSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            StatTile::ensure_type();
            ReviewCard::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ReviewsSection {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_stepping();
        }
    }

    impl WidgetImpl for ReviewsSection {}
    impl BoxImpl for ReviewsSection {}
}

glib::wrapper! {
    pub struct ReviewsSection(ObjectSubclass<imp::ReviewsSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ReviewsSection {
    fn setup_stepping(&self) {
        let this_weak = self.downgrade();
        self.imp().previous_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                this.show_previous();
            }
        });

        let this_weak = self.downgrade();
        self.imp().next_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                this.show_next();
            }
        });
    }

    pub fn append_card(&self, card: ReviewCard) -> usize {
        let index = card.index() as usize;
        self.imp().carousel.append(&card);
        self.imp().cards.borrow_mut().insert(index, card);

        index
    }

    pub fn cards(&self) -> Ref<'_, HashMap<usize, ReviewCard>> {
        self.imp().cards.borrow()
    }

    fn current_index(&self) -> usize {
        self.imp().carousel.position().round().max(0.0) as usize
    }

    fn show_card(&self, index: usize) {
        let carousel = &self.imp().carousel;
        if index < carousel.n_pages() as usize {
            carousel.scroll_to(&carousel.nth_page(index as u32), true);
        }
    }

    pub fn show_next(&self) {
        let count = self.imp().carousel.n_pages() as usize;
        if count > 0 {
            self.show_card((self.current_index() + 1) % count);
        }
    }

    pub fn show_previous(&self) {
        let count = self.imp().carousel.n_pages() as usize;
        if count > 0 {
            self.show_card((self.current_index() + count - 1) % count);
        }
    }

    pub fn set_stats(&self, stats: &ReviewStats) {
        let imp = self.imp();

        imp.satisfaction_tile.set_stat(
            &format!("{satisfaction:.0}%", satisfaction = stats.satisfaction_pct),
            "Customer happiness",
        );
        imp.average_tile.set_stat(
            &format!("{average:.1}/5", average = stats.average),
            &Self::stars(stats.filled_stars()),
        );
        imp.sentiment_tile.set_stat(
            &format!(
                "{positive} · {neutral} · {negative}",
                positive = stats.positive,
                neutral = stats.neutral,
                negative = stats.negative
            ),
            "positive · neutral · negative",
        );
    }

    fn stars(filled: usize) -> String {
        let filled = filled.min(5);
        format!(
            "{filled}{empty}",
            filled = "★".repeat(filled),
            empty = "☆".repeat(5 - filled)
        )
    }
}
