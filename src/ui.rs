use super::widgets::{
    HeroSection, LocationSection, MenuSection, OffersSection, OrderingSection,
    RecommendationsPanel, ReviewsSection, ShowcasePage, Sidebar, Window,
};

use std::rc::{Rc, Weak};

pub struct UiWeak {
    window: Weak<Window>,
}

impl UiWeak {
    pub fn upgrade(&self) -> Option<Ui> {
        self.window.upgrade().map(|window| Ui { window })
    }
}

/// Cheap cloneable handle over the widget tree, so controllers can reach
/// any part of the page without threading individual widgets around.
#[derive(Clone)]
pub struct Ui {
    window: Rc<Window>,
}

impl Ui {
    pub fn new(window: Window) -> Self {
        Self {
            window: Rc::new(window),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn sidebar(&self) -> &Sidebar {
        self.window.sidebar()
    }

    pub fn showcase_page(&self) -> &ShowcasePage {
        self.window.showcase_page()
    }

    pub fn hero_section(&self) -> &HeroSection {
        self.showcase_page().hero_section()
    }

    pub fn menu_section(&self) -> &MenuSection {
        self.showcase_page().menu_section()
    }

    pub fn offers_section(&self) -> &OffersSection {
        self.showcase_page().offers_section()
    }

    pub fn ordering_section(&self) -> &OrderingSection {
        self.showcase_page().ordering_section()
    }

    pub fn reviews_section(&self) -> &ReviewsSection {
        self.showcase_page().reviews_section()
    }

    pub fn location_section(&self) -> &LocationSection {
        self.showcase_page().location_section()
    }

    pub fn recommendations_panel(&self) -> &RecommendationsPanel {
        self.window.recommendations_panel()
    }

    pub fn downgrade(&self) -> UiWeak {
        UiWeak {
            window: Rc::downgrade(&self.window),
        }
    }
}
