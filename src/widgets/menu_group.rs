use super::super::models::Category;
use super::super::prelude::*;
use super::dish_row::DishRow;

use std::cell::{Cell, Ref, RefCell};
use std::collections::HashMap;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/menu_group.ui")]
    #[properties(wrapper_type = super::MenuGroup)]
    pub struct MenuGroup {
        #[template_child(id = "menu-group-icon")]
        pub icon_label: TemplateChild<gtk::Label>,
        #[template_child(id = "menu-group-title")]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child(id = "menu-group-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,

        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub icon: RefCell<String>,
        #[property(get, set)]
        pub index: Cell<u32>,

        pub rows: RefCell<HashMap<usize, DishRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MenuGroup {
        const NAME: &'static str = "MenuGroup";
        type Type = super::MenuGroup;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for MenuGroup {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_title_notify(|group| {
                group.imp().title_label.set_label(&group.title());
            });
            obj.connect_icon_notify(|group| {
                group.imp().icon_label.set_label(&group.icon());
            });
        }
    }

    impl WidgetImpl for MenuGroup {}
    impl BoxImpl for MenuGroup {}
}

glib::wrapper! {
    pub struct MenuGroup(ObjectSubclass<imp::MenuGroup>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl MenuGroup {
    pub fn new(title: &str, icon: &str, index: usize) -> Self {
        let escaped_title = glib::markup_escape_text(title);

        glib::Object::builder()
            .property("title", escaped_title.as_str())
            .property("icon", icon)
            .property("index", index as u32)
            .build()
    }

    pub fn from_category(category: &Category, index: usize) -> Self {
        Self::new(category.name, category.icon, index)
    }

    pub fn append_row(&self, row: DishRow) -> usize {
        let key = row.index() as usize;
        let implementation = self.imp();
        implementation.list_box.append(&row);
        implementation.rows.borrow_mut().insert(key, row);

        key
    }

    pub fn rows(&self) -> Ref<'_, HashMap<usize, DishRow>> {
        self.imp().rows.borrow()
    }

    pub fn show_all_rows(&self) {
        for (_, row) in self.rows().iter() {
            row.set_visible(true);
        }

        self.set_visible(true);
    }

    /// Shows exactly the rows the predicate accepts; the group itself is
    /// hidden when none survive.
    pub fn apply_row_filter<F>(&self, predicate: F)
    where
        F: Fn(&DishRow) -> bool,
    {
        let mut group_should_be_visible = false;

        for (_, row) in self.rows().iter() {
            let should_show_row = predicate(row);
            row.set_visible(should_show_row);
            group_should_be_visible = group_should_be_visible || should_show_row;
        }

        self.set_visible(group_should_be_visible);
    }
}
