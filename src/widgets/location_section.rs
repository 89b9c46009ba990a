use super::super::models::Restaurant;
use super::super::prelude::*;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/location_section.ui")]
    pub struct LocationSection {
        #[template_child(id = "location-section-address-label")]
        pub address_label: TemplateChild<gtk::Label>,
        #[template_child(id = "location-section-hours-label")]
        pub hours_label: TemplateChild<gtk::Label>,
        #[template_child(id = "location-section-open-label")]
        pub open_label: TemplateChild<gtk::Label>,
        #[template_child(id = "location-section-phone-label")]
        pub phone_label: TemplateChild<gtk::Label>,
        #[template_child(id = "location-section-maps-button")]
        pub maps_button: TemplateChild<gtk::Button>,
        #[template_child(id = "location-section-call-button")]
        pub call_button: TemplateChild<gtk::Button>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for LocationSection {
        const NAME: &'static str = "LocationSection";
        type Type = super::LocationSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for LocationSection {}
    impl WidgetImpl for LocationSection {}
    impl BoxImpl for LocationSection {}
}

glib::wrapper! {
    pub struct LocationSection(ObjectSubclass<imp::LocationSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl LocationSection {
    pub fn set_info(&self, info: &Restaurant, open_now: bool) {
        let imp = self.imp();
        imp.address_label.set_label(info.address);
        imp.hours_label.set_label(info.hours);
        imp.phone_label.set_label(info.phone);
        imp.open_label
            .set_label(if open_now { "Open Now" } else { "Closed" });

        if open_now {
            imp.open_label.add_css_class("open-indicator");
        } else {
            imp.open_label.add_css_class("closed-indicator");
        }
    }

    pub fn maps_button(&self) -> &gtk::Button {
        &self.imp().maps_button
    }

    pub fn call_button(&self) -> &gtk::Button {
        &self.imp().call_button
    }
}
