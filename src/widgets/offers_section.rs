use super::super::prelude::*;
use super::offer_card::OfferCard;

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/offers_section.ui")]
    pub struct OffersSection {
        #[template_child(id = "offers-section-carousel")]
        pub carousel: TemplateChild<adw::Carousel>,
        #[template_child(id = "offers-section-countdown-box")]
        pub countdown_box: TemplateChild<gtk::Box>,
        #[template_child(id = "offers-section-countdown-label")]
        pub countdown_label: TemplateChild<gtk::Label>,

        pub cards: RefCell<HashMap<usize, OfferCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for OffersSection {
        const NAME: &'static str = "OffersSection";
        type Type = super::OffersSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            OfferCard::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for OffersSection {}
    impl WidgetImpl for OffersSection {}
    impl BoxImpl for OffersSection {}
}

glib::wrapper! {
    pub struct OffersSection(ObjectSubclass<imp::OffersSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl OffersSection {
    pub fn append_card(&self, card: OfferCard) -> usize {
        let index = card.index() as usize;
        self.imp().carousel.append(&card);
        self.imp().cards.borrow_mut().insert(index, card);

        index
    }

    pub fn cards(&self) -> Ref<'_, HashMap<usize, OfferCard>> {
        self.imp().cards.borrow()
    }

    pub fn card_count(&self) -> usize {
        self.imp().carousel.n_pages() as usize
    }

    pub fn current_index(&self) -> usize {
        self.imp().carousel.position().round().max(0.0) as usize
    }

    pub fn show_card(&self, index: usize) -> bool {
        let carousel = &self.imp().carousel;
        if index < carousel.n_pages() as usize {
            carousel.scroll_to(&carousel.nth_page(index as u32), true);
            true
        } else {
            false
        }
    }

    /// Steps the carousel forward, wrapping back to the first card.
    pub fn advance(&self) -> bool {
        let count = self.card_count();
        if count == 0 {
            return false;
        }

        self.show_card((self.current_index() + 1) % count)
    }

    pub fn set_countdown(&self, text: &str) {
        self.imp().countdown_label.set_label(text);
    }

    pub fn set_countdown_visible(&self, visible: bool) {
        self.imp().countdown_box.set_visible(visible);
    }

    pub fn current_card_is_limited(&self) -> bool {
        self.cards()
            .get(&self.current_index())
            .is_some_and(OfferCard::limited)
    }
}
