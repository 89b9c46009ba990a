use super::super::models::MenuItem;
use super::super::prelude::*;

use std::cell::Cell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/dish_row.ui")]
    #[properties(wrapper_type = super::DishRow)]
    pub struct DishRow {
        #[template_child(id = "dish-row-popular-badge")]
        pub popular_badge: TemplateChild<gtk::Label>,
        #[template_child(id = "dish-row-veg-badge")]
        pub veg_badge: TemplateChild<gtk::Label>,
        #[template_child(id = "dish-row-spicy-badge")]
        pub spicy_badge: TemplateChild<gtk::Label>,
        #[template_child(id = "dish-row-price")]
        pub price_label: TemplateChild<gtk::Label>,
        #[template_child(id = "dish-row-order-button")]
        pub order_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub index: Cell<u32>,
        #[property(get, set)]
        pub price: Cell<u32>,
        #[property(get, set)]
        pub veg: Cell<bool>,
        #[property(get, set)]
        pub spicy: Cell<bool>,
        #[property(get, set)]
        pub popular: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for DishRow {
        const NAME: &'static str = "DishRow";
        type Type = super::DishRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for DishRow {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_badges();
        }
    }

    impl WidgetImpl for DishRow {}
    impl ListBoxRowImpl for DishRow {}
    impl PreferencesRowImpl for DishRow {}
    impl ActionRowImpl for DishRow {}
}

glib::wrapper! {
    pub struct DishRow(ObjectSubclass<imp::DishRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl DishRow {
    fn setup_badges(&self) {
        self.connect_price_notify(|this| {
            let price = format!("₹{price}", price = this.price());
            this.imp().price_label.set_label(&price);
        });
        self.connect_veg_notify(|this| {
            this.imp().veg_badge.set_visible(this.veg());
        });
        self.connect_spicy_notify(|this| {
            this.imp().spicy_badge.set_visible(this.spicy());
        });
        self.connect_popular_notify(|this| {
            this.imp().popular_badge.set_visible(this.popular());
        });
    }

    pub fn new(item: &MenuItem, index: usize) -> Self {
        let escaped_title = glib::markup_escape_text(item.name);
        let escaped_subtitle = glib::markup_escape_text(item.description);

        glib::Object::builder()
            .property("title", escaped_title)
            .property("subtitle", escaped_subtitle)
            .property("index", index as u32)
            .property("price", item.price)
            .property("veg", item.is_veg)
            .property("spicy", item.is_spicy)
            .property("popular", item.popular)
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
