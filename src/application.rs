use std::cell::RefCell;
use std::rc::Rc;

use super::constants;
use super::controllers::{
    ActionsController, MenuFilterController, OffersRotationController, OrderingController,
    RecommendationsController,
};
use super::populator::Populator;
use super::prelude::*;
use super::repository::Repository;
use super::ui::Ui;
use super::widgets::Window;

/// Controllers stay alive for the lifetime of the window; they are only
/// held here, never called again.
struct Controllers {
    _menu_filter: MenuFilterController,
    _ordering: OrderingController,
    _offers_rotation: OffersRotationController,
    _recommendations: RecommendationsController,
    _actions: ActionsController,
}

struct ApplicationState {
    application: adw::Application,
    repository: Repository,
    controllers: RefCell<Option<Controllers>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {
    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            gtk::gio::ApplicationFlags::default(),
        );

        let state = Rc::new(ApplicationState {
            application,
            repository: Repository::new(),
            controllers: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_startup_event(state);
        Self::setup_activate_event(state);
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            Self::setup_resources().expect("failed to register application resources");
        });
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.setup_ui();
        });
    }

    fn setup_ui(&self) {
        let window = Window::new(&self.state.application);
        let ui = Ui::new(window);

        Populator::populate(&ui, self.state.repository);

        let controllers = Controllers {
            _menu_filter: MenuFilterController::new(ui.clone(), self.state.repository),
            _ordering: OrderingController::new(ui.clone(), self.state.repository),
            _offers_rotation: OffersRotationController::new(ui.clone()),
            _recommendations: RecommendationsController::new(ui.clone(), self.state.repository),
            _actions: ActionsController::new(self.state.application.clone(), ui.clone()),
        };
        self.state.controllers.replace(Some(controllers));

        ui.window().present();
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let style_manager = adw::StyleManager::default();
        style_manager.set_color_scheme(adw::ColorScheme::PreferLight);

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }
}
