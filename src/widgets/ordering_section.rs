use super::super::models::Restaurant;
use super::super::prelude::*;
use super::channel_card::ChannelCard;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/ordering_section.ui")]
    pub struct OrderingSection {
        #[template_child(id = "ordering-section-whatsapp-card")]
        pub whatsapp_card: TemplateChild<ChannelCard>,
        #[template_child(id = "ordering-section-zomato-card")]
        pub zomato_card: TemplateChild<ChannelCard>,
        #[template_child(id = "ordering-section-swiggy-card")]
        pub swiggy_card: TemplateChild<ChannelCard>,
        #[template_child(id = "ordering-section-call-button")]
        pub call_button: TemplateChild<gtk::Button>,
        #[template_child(id = "ordering-section-availability-label")]
        pub availability_label: TemplateChild<gtk::Label>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for OrderingSection {
        const NAME: &'static str = "OrderingSection";
        type Type = super::OrderingSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            ChannelCard::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for OrderingSection {}
    impl WidgetImpl for OrderingSection {}
    impl BoxImpl for OrderingSection {}
}

glib::wrapper! {
    pub struct OrderingSection(ObjectSubclass<imp::OrderingSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl OrderingSection {
    pub fn whatsapp_card(&self) -> &ChannelCard {
        &self.imp().whatsapp_card
    }

    pub fn zomato_card(&self) -> &ChannelCard {
        &self.imp().zomato_card
    }

    pub fn swiggy_card(&self) -> &ChannelCard {
        &self.imp().swiggy_card
    }

    pub fn call_button(&self) -> &gtk::Button {
        &self.imp().call_button
    }

    pub fn set_info(&self, info: &Restaurant) {
        let imp = self.imp();
        imp.call_button
            .set_label(&format!("📞 {phone}", phone = info.phone));
        imp.availability_label
            .set_label(&format!("Available: {hours}", hours = info.hours));
    }
}
