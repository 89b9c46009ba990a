use super::super::models::Restaurant;
use super::super::prelude::*;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/hero_section.ui")]
    pub struct HeroSection {
        #[template_child(id = "hero-section-title")]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child(id = "hero-section-tagline")]
        pub tagline_label: TemplateChild<gtk::Label>,
        #[template_child(id = "hero-section-description")]
        pub description_label: TemplateChild<gtk::Label>,
        #[template_child(id = "hero-section-order-button")]
        pub order_button: TemplateChild<gtk::Button>,
        #[template_child(id = "hero-section-menu-button")]
        pub menu_button: TemplateChild<gtk::Button>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for HeroSection {
        const NAME: &'static str = "HeroSection";
        type Type = super::HeroSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for HeroSection {}
    impl WidgetImpl for HeroSection {}
    impl BoxImpl for HeroSection {}
}

glib::wrapper! {
    pub struct HeroSection(ObjectSubclass<imp::HeroSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl HeroSection {
    pub fn set_info(&self, info: &Restaurant) {
        let imp = self.imp();
        imp.title_label.set_label(info.name);
        imp.tagline_label.set_label(info.tagline);
        imp.description_label.set_label(info.description);
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

    pub fn connect_view_menu_clicked<F>(&self, callback: F)
    where
        F: Fn(&Self) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().menu_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this);
            }
        });
    }
}
