use super::super::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/stat_tile.ui")]
    #[properties(wrapper_type = super::StatTile)]
    pub struct StatTile {
        #[template_child(id = "stat-tile-title")]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child(id = "stat-tile-value")]
        pub value_label: TemplateChild<gtk::Label>,
        #[template_child(id = "stat-tile-detail")]
        pub detail_label: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub value: RefCell<String>,
        #[property(get, set)]
        pub detail: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for StatTile {
        const NAME: &'static str = "StatTile";
        type Type = super::StatTile;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for StatTile {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_title_notify(|tile| {
                tile.imp().title_label.set_label(&tile.title());
            });
            obj.connect_value_notify(|tile| {
                tile.imp().value_label.set_label(&tile.value());
            });
            obj.connect_detail_notify(|tile| {
                tile.imp().detail_label.set_label(&tile.detail());
            });
        }
    }

    impl WidgetImpl for StatTile {}
    impl BoxImpl for StatTile {}
}

glib::wrapper! {
    pub struct StatTile(ObjectSubclass<imp::StatTile>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl StatTile {
    pub fn set_stat(&self, value: &str, detail: &str) {
        self.set_value(value);
        self.set_detail(detail);
    }
}
