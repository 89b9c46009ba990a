use super::super::prelude::*;
use super::super::ui::Ui;
use super::super::widgets::ShowcaseSection;

/// Application-level actions and their accelerators.
pub struct Actions {
    application: adw::Application,
    ui: Ui,
}

impl Actions {
    pub fn new(application: adw::Application, ui: Ui) -> Self {
        let this = Self { application, ui };
        this.setup_quit_action();
        this.setup_order_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);

        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });

        self.application.add_action(&quit_action);
        self.application
            .set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn setup_order_action(&self) {
        let order_action = gtk::gio::SimpleAction::new("order", None);

        let ui_weak = self.ui.downgrade();
        order_action.connect_activate(move |_action, _| {
            if let Some(ui) = ui_weak.upgrade() {
                ui.showcase_page()
                    .scroll_to_section(ShowcaseSection::Order.index());
            }
        });

        self.application.add_action(&order_action);
        self.application
            .set_accels_for_action("app.order", &["<Ctrl>o"]);
    }
}
