use super::super::prelude::*;
use super::recommendation_row::RecommendationRow;

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/recommendations_panel.ui")]
    pub struct RecommendationsPanel {
        #[template_child(id = "recommendations-panel-revealer")]
        pub revealer: TemplateChild<gtk::Revealer>,
        #[template_child(id = "recommendations-panel-list")]
        pub list_box: TemplateChild<gtk::ListBox>,
        #[template_child(id = "recommendations-panel-dismiss-button")]
        pub dismiss_button: TemplateChild<gtk::Button>,

        pub rows: RefCell<HashMap<usize, RecommendationRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for RecommendationsPanel {
        const NAME: &'static str = "RecommendationsPanel";
        type Type = super::RecommendationsPanel;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for RecommendationsPanel {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_dismiss();
        }
    }

    impl WidgetImpl for RecommendationsPanel {}
    impl BinImpl for RecommendationsPanel {}
}

glib::wrapper! {
    pub struct RecommendationsPanel(ObjectSubclass<imp::RecommendationsPanel>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl RecommendationsPanel {
    fn setup_dismiss(&self) {
        let this_weak = self.downgrade();
        self.imp().dismiss_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                this.dismiss();
            }
        });
    }

    pub fn append_row(&self, row: RecommendationRow) -> usize {
        let index = row.index() as usize;
        let implementation = self.imp();
        implementation.list_box.append(&row);
        implementation.rows.borrow_mut().insert(index, row);

        index
    }

    pub fn rows(&self) -> Ref<'_, HashMap<usize, RecommendationRow>> {
        self.imp().rows.borrow()
    }

    pub fn clear_rows(&self) {
        let implementation = self.imp();
        for (_, row) in implementation.rows.borrow_mut().drain() {
            implementation.list_box.remove(&row);
        }
    }

    pub fn reveal(&self) {
        self.set_visible(true);
        self.imp().revealer.set_reveal_child(true);
    }

    /// Dismissal hides the panel for the rest of the session.
    pub fn dismiss(&self) {
        self.imp().revealer.set_reveal_child(false);
        self.set_visible(false);
    }
}
