use super::super::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/page_content.ui")]
    #[properties(wrapper_type = super::PageContent)]
    pub struct PageContent {
        #[template_child(id = "page-content-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,

        #[property(get, set)]
        pub content: RefCell<Option<gtk::Widget>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PageContent {
        const NAME: &'static str = "PageContent";
        type Type = super::PageContent;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for PageContent {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_content_changes();
        }
    }

    impl WidgetImpl for PageContent {}
    impl BinImpl for PageContent {}
}

glib::wrapper! {
    pub struct PageContent(ObjectSubclass<imp::PageContent>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl PageContent {
    fn setup_content_changes(&self) {
        self.connect_content_notify(|this| {
            this.imp()
                .scrolled_window
                .set_child(this.content().as_ref());
        });

        if let Some(content) = self.content() {
            self.imp().scrolled_window.set_child(Some(&content));
        }
    }

    pub fn scrolled_window(&self) -> &gtk::ScrolledWindow {
        &self.imp().scrolled_window
    }
}
