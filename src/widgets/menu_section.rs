use super::super::menu_filter::FilterTag;
use super::super::models::Category;
use super::super::prelude::*;
use super::dish_row::DishRow;
use super::menu_group::MenuGroup;

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

const ACTIVE_CHIP_CSS_CLASS: &str = "chip-active";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/menu_section.ui")]
    pub struct MenuSection {
        #[template_child(id = "menu-section-show-all-button")]
        pub show_all_button: TemplateChild<gtk::Button>,
        #[template_child(id = "menu-section-category-box")]
        pub category_box: TemplateChild<gtk::FlowBox>,
        #[template_child(id = "menu-section-filter-box")]
        pub filter_box: TemplateChild<gtk::FlowBox>,
        #[template_child(id = "menu-section-group-box")]
        pub group_box: TemplateChild<gtk::Box>,
        #[template_child(id = "menu-section-full-menu-button")]
        pub full_menu_button: TemplateChild<gtk::Button>,

        pub category_chips: RefCell<HashMap<usize, gtk::Button>>,
        pub filter_chips: RefCell<Vec<(FilterTag, gtk::Button)>>,
        pub groups: RefCell<HashMap<usize, MenuGroup>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MenuSection {
        const NAME: &'static str = "MenuSection";
        type Type = super::MenuSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            MenuGroup::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for MenuSection {
        fn constructed(&self) {
            self.parent_constructed();
            self.show_all_button.add_css_class(ACTIVE_CHIP_CSS_CLASS);
        }
    }

    impl WidgetImpl for MenuSection {}
    impl BoxImpl for MenuSection {}
}

glib::wrapper! {
    pub struct MenuSection(ObjectSubclass<imp::MenuSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl MenuSection {
    fn build_chip(caption: &str) -> gtk::Button {
        let chip = gtk::Button::with_label(caption);
        chip.add_css_class("chip");
        chip.add_css_class("pill");
        chip
    }

    pub fn add_category_chip(&self, category: &Category, index: usize) -> gtk::Button {
        let caption = format!("{icon} {name}", icon = category.icon, name = category.name);
        let chip = Self::build_chip(&caption);

        self.imp().category_box.append(&chip);
        self.imp().category_chips.borrow_mut().insert(index, chip.clone());

        chip
    }

    pub fn add_filter_chip(&self, tag: FilterTag) -> gtk::Button {
        let caption = format!("{icon} {label}", icon = tag.icon(), label = tag.label());
        let chip = Self::build_chip(&caption);

        if tag == FilterTag::All {
            chip.add_css_class(ACTIVE_CHIP_CSS_CLASS);
        }

        self.imp().filter_box.append(&chip);
        self.imp().filter_chips.borrow_mut().push((tag, chip.clone()));

        chip
    }

    pub fn add_group(&self, group: MenuGroup) -> usize {
        let index = group.index() as usize;
        self.imp().group_box.append(&group);
        self.imp().groups.borrow_mut().insert(index, group);

        index
    }

    pub fn groups(&self) -> Ref<'_, HashMap<usize, MenuGroup>> {
        self.imp().groups.borrow()
    }

    pub fn category_chips(&self) -> Ref<'_, HashMap<usize, gtk::Button>> {
        self.imp().category_chips.borrow()
    }

    pub fn filter_chips(&self) -> Ref<'_, Vec<(FilterTag, gtk::Button)>> {
        self.imp().filter_chips.borrow()
    }

    pub fn show_all_button(&self) -> &gtk::Button {
        &self.imp().show_all_button
    }

    pub fn full_menu_button(&self) -> &gtk::Button {
        &self.imp().full_menu_button
    }

    pub fn apply_item_filter<F>(&self, predicate: F)
    where
        F: Fn(&DishRow) -> bool,
    {
        for group in self.groups().values() {
            group.apply_row_filter(&predicate);
        }
    }

    pub fn set_active_category(&self, selection: Option<usize>) {
        if selection.is_none() {
            self.imp().show_all_button.add_css_class(ACTIVE_CHIP_CSS_CLASS);
        } else {
            self.imp().show_all_button.remove_css_class(ACTIVE_CHIP_CSS_CLASS);
        }

        for (&index, chip) in self.category_chips().iter() {
            if selection == Some(index) {
                chip.add_css_class(ACTIVE_CHIP_CSS_CLASS);
            } else {
                chip.remove_css_class(ACTIVE_CHIP_CSS_CLASS);
            }
        }
    }

    pub fn set_active_filter(&self, tag: FilterTag) {
        for (chip_tag, chip) in self.filter_chips().iter() {
            if *chip_tag == tag {
                chip.add_css_class(ACTIVE_CHIP_CSS_CLASS);
            } else {
                chip.remove_css_class(ACTIVE_CHIP_CSS_CLASS);
            }
        }
    }
}
