use super::super::models::MenuItem;
use super::super::prelude::*;

use std::cell::Cell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/recommendation_row.ui")]
    #[properties(wrapper_type = super::RecommendationRow)]
    pub struct RecommendationRow {
        #[template_child(id = "recommendation-row-price")]
        pub price_label: TemplateChild<gtk::Label>,
        #[template_child(id = "recommendation-row-order-button")]
        pub order_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub index: Cell<u32>,
        #[property(get, set)]
        pub price: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for RecommendationRow {
        const NAME: &'static str = "RecommendationRow";
        type Type = super::RecommendationRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for RecommendationRow {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_price_notify(|row| {
                let price = format!("₹{price}", price = row.price());
                row.imp().price_label.set_label(&price);
            });
        }
    }

    impl WidgetImpl for RecommendationRow {}
    impl ListBoxRowImpl for RecommendationRow {}
    impl PreferencesRowImpl for RecommendationRow {}
    impl ActionRowImpl for RecommendationRow {}
}

glib::wrapper! {
    pub struct RecommendationRow(ObjectSubclass<imp::RecommendationRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl RecommendationRow {
    pub fn new(item: &MenuItem, index: usize, reason: &str) -> Self {
        let escaped_title = glib::markup_escape_text(item.name);
        let escaped_subtitle = glib::markup_escape_text(reason);

        glib::Object::builder()
            .property("title", escaped_title)
            .property("subtitle", escaped_subtitle)
            .property("index", index as u32)
            .property("price", item.price)
            .build()
    }

    pub fn connect_order_clicked<F>(&self, callback: F)
    where
        F: Fn(&Self) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().order_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this);
            }
        });
    }
}
