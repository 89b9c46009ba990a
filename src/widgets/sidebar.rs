use super::super::models::Restaurant;
use super::super::prelude::*;
use super::sidebar_row::SidebarRow;

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/sidebar.ui")]
    pub struct Sidebar {
        #[template_child(id = "sidebar-section-list")]
        pub section_list: TemplateChild<gtk::ListBox>,
        #[template_child(id = "sidebar-hours-label")]
        pub hours_label: TemplateChild<gtk::Label>,
        #[template_child(id = "sidebar-phone-label")]
        pub phone_label: TemplateChild<gtk::Label>,

        pub rows: RefCell<HashMap<usize, SidebarRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Sidebar {
        const NAME: &'static str = "Sidebar";
        type Type = super::Sidebar;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            SidebarRow::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Sidebar {}
    impl WidgetImpl for Sidebar {}
    impl BinImpl for Sidebar {}
}

glib::wrapper! {
    pub struct Sidebar(ObjectSubclass<imp::Sidebar>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Sidebar {
    pub fn append_row(&self, row: SidebarRow) -> usize {
        let index = row.index() as usize;
        let implementation = self.imp();
        implementation.section_list.append(&row);

        if implementation.rows.borrow().is_empty() {
            implementation.section_list.select_row(Some(&row));
        }

        implementation.rows.borrow_mut().insert(index, row);

        index
    }

    pub fn rows(&self) -> Ref<'_, HashMap<usize, SidebarRow>> {
        self.imp().rows.borrow()
    }

    pub fn select_row_by_index(&self, index: usize) -> bool {
        self.imp().rows.borrow().get(&index).is_some_and(|row| {
            self.imp().section_list.select_row(Some(row));
            true
        })
    }

    pub fn set_info(&self, info: &Restaurant) {
        self.imp().hours_label.set_label(info.hours);
        self.imp().phone_label.set_label(info.phone);
    }

    pub fn connect_row_selected<F>(&self, callback: F)
    where
        F: Fn(&Self, usize, &SidebarRow) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().section_list.connect_row_selected(move |_list, row| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(row) = row
                && let Some(row) = row.downcast_ref::<SidebarRow>()
            {
                callback(&this, row.index() as usize, row);
            }
        });
    }
}
