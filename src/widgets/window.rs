use super::super::prelude::*;
use super::recommendations_panel::RecommendationsPanel;
use super::showcase_page::ShowcasePage;
use super::sidebar::Sidebar;

use gtk::gio::{ActionGroup, ActionMap};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/window.ui")]
    pub struct Window {
        #[template_child(id = "window-toast-overlay")]
        pub toast_overlay: TemplateChild<adw::ToastOverlay>,
        #[template_child(id = "window-split-view")]
        pub split_view: TemplateChild<adw::NavigationSplitView>,
        #[template_child(id = "window-sidebar")]
        pub sidebar: TemplateChild<Sidebar>,
        #[template_child(id = "window-showcase-page")]
        pub showcase_page: TemplateChild<ShowcasePage>,
        #[template_child(id = "window-recommendations-panel")]
        pub recommendations_panel: TemplateChild<RecommendationsPanel>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "Window";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            Sidebar::ensure_type();
            ShowcasePage::ensure_type();
            RecommendationsPanel::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_sidebar();
            self.obj().setup_showcase_page();
        }
    }

    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    fn setup_sidebar(&self) {
        let this_weak = self.downgrade();
        self.sidebar().connect_row_selected(move |_, index, _| {
            if let Some(this) = this_weak.upgrade() {
                this.showcase_page().scroll_to_section(index);
            }
        });
    }

    fn setup_showcase_page(&self) {
        let this_weak = self.downgrade();
        self.showcase_page()
            .connect_active_section_changed(move |_, index| {
                if let Some(this) = this_weak.upgrade() {
                    this.sidebar().select_row_by_index(index);
                }
            });
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.imp().sidebar
    }

    pub fn showcase_page(&self) -> &ShowcasePage {
        &self.imp().showcase_page
    }

    pub fn recommendations_panel(&self) -> &RecommendationsPanel {
        &self.imp().recommendations_panel
    }

    pub fn notify_message(&self, message: &str) {
        self.imp()
            .toast_overlay
            .add_toast(adw::Toast::new(message));
    }
}
