use super::super::prelude::*;
use super::showcase_page::ShowcaseSection;

use std::cell::{Cell, RefCell};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/sidebar_row.ui")]
    #[properties(wrapper_type = super::SidebarRow)]
    pub struct SidebarRow {
        #[template_child(id = "sidebar-row-icon")]
        pub icon_widget: TemplateChild<gtk::Label>,
        #[template_child(id = "sidebar-row-label")]
        pub label_widget: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub icon: RefCell<String>,
        #[property(get, set)]
        pub label: RefCell<String>,
        #[property(get, set)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SidebarRow {
        const NAME: &'static str = "SidebarRow";
        type Type = super::SidebarRow;
        type ParentType = gtk::ListBoxRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for SidebarRow {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_icon_notify(|row| {
                row.imp().icon_widget.set_label(&row.icon());
            });
            obj.connect_label_notify(|row| {
                row.imp().label_widget.set_label(&row.label());
            });
        }
    }

    impl WidgetImpl for SidebarRow {}
    impl ListBoxRowImpl for SidebarRow {}
}

glib::wrapper! {
    pub struct SidebarRow(ObjectSubclass<imp::SidebarRow>)
        @extends gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl SidebarRow {
    pub fn new(icon: &str, label: &str, index: usize) -> Self {
        glib::Object::builder()
            .property("icon", icon)
            .property("label", label)
            .property("index", index as u32)
            .build()
    }

    pub fn from_section(section: ShowcaseSection) -> Self {
        Self::new(section.icon(), section.title(), section.index())
    }
}
