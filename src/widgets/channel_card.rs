use super::super::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/channel_card.ui")]
    #[properties(wrapper_type = super::ChannelCard)]
    pub struct ChannelCard {
        #[template_child(id = "channel-card-icon")]
        pub icon_widget: TemplateChild<gtk::Label>,
        #[template_child(id = "channel-card-title")]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child(id = "channel-card-description")]
        pub description_label: TemplateChild<gtk::Label>,
        #[template_child(id = "channel-card-estimate")]
        pub estimate_label: TemplateChild<gtk::Label>,
        #[template_child(id = "channel-card-action-button")]
        pub action_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub icon: RefCell<String>,
        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub description: RefCell<String>,
        #[property(get, set)]
        pub estimate: RefCell<String>,
        #[property(get, set, name = "action-label")]
        pub action_label: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ChannelCard {
        const NAME: &'static str = "ChannelCard";
        type Type = super::ChannelCard;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ChannelCard {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_icon_notify(|card| {
                card.imp().icon_widget.set_label(&card.icon());
            });
            obj.connect_title_notify(|card| {
                card.imp().title_label.set_label(&card.title());
            });
            obj.connect_description_notify(|card| {
                card.imp().description_label.set_label(&card.description());
            });
            obj.connect_estimate_notify(|card| {
                let estimate = format!("Est. delivery: {estimate}", estimate = card.estimate());
                card.imp().estimate_label.set_label(&estimate);
            });
            obj.connect_action_label_notify(|card| {
                card.imp().action_button.set_label(&card.action_label());
            });
        }
    }

    impl WidgetImpl for ChannelCard {}
    impl BoxImpl for ChannelCard {}
}

glib::wrapper! {
    pub struct ChannelCard(ObjectSubclass<imp::ChannelCard>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ChannelCard {
    pub fn connect_action_clicked<F>(&self, callback: F)
    where
        F: Fn(&Self) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().action_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this);
            }
        });
    }
}
