use super::super::models::Offer;
use super::super::prelude::*;

use std::cell::Cell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/offer_card.ui")]
    #[properties(wrapper_type = super::OfferCard)]
    pub struct OfferCard {
        #[template_child(id = "offer-card-discount")]
        pub discount_label: TemplateChild<gtk::Label>,
        #[template_child(id = "offer-card-limited-badge")]
        pub limited_badge: TemplateChild<gtk::Label>,
        #[template_child(id = "offer-card-title")]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child(id = "offer-card-description")]
        pub description_label: TemplateChild<gtk::Label>,
        #[template_child(id = "offer-card-code")]
        pub code_label: TemplateChild<gtk::Label>,
        #[template_child(id = "offer-card-claim-button")]
        pub claim_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub index: Cell<u32>,
        #[property(get, set)]
        pub limited: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for OfferCard {
        const NAME: &'static str = "OfferCard";
        type Type = super::OfferCard;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for OfferCard {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_limited_notify(|card| {
                card.imp().limited_badge.set_visible(card.limited());
            });
        }
    }

    impl WidgetImpl for OfferCard {}
    impl BoxImpl for OfferCard {}
}

glib::wrapper! {
    pub struct OfferCard(ObjectSubclass<imp::OfferCard>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl OfferCard {
    pub fn new(offer: &Offer, index: usize) -> Self {
        let this: Self = glib::Object::builder()
            .property("index", index as u32)
            .property("limited", offer.limited)
            .build();

        let imp = this.imp();
        imp.discount_label.set_label(offer.discount);
        imp.title_label.set_label(offer.title);
        imp.description_label.set_label(offer.description);
        imp.code_label
            .set_label(&format!("Code: {code}", code = offer.code));

        this
    }

    pub fn connect_claim_clicked<F>(&self, callback: F)
    where
        F: Fn(&Self) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().claim_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this);
            }
        });
    }
}
