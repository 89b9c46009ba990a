use super::super::controllers::SectionScrollController;
use super::super::ordered_map::OrderedMap;
use super::super::prelude::*;
use super::hero_section::HeroSection;
use super::location_section::LocationSection;
use super::menu_section::MenuSection;
use super::offers_section::OffersSection;
use super::ordering_section::OrderingSection;
use super::page_content::PageContent;
use super::reviews_section::ReviewsSection;

use std::cell::{Cell, Ref, RefCell, OnceCell};
use std::sync::OnceLock;

const ACTIVE_SECTION_CHANGED_SIGNAL: &str = "active-section-changed";

/// The fixed page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseSection {
    Home,
    Menu,
    Offers,
    Order,
    Reviews,
    Location,
}

impl ShowcaseSection {
    pub const COUNT: usize = 6;

    #[must_use]
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &[
            Self::Home,
            Self::Menu,
            Self::Offers,
            Self::Order,
            Self::Reviews,
            Self::Location,
        ]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::all()[index])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::Offers => "Offers",
            Self::Order => "Order",
            Self::Reviews => "Reviews",
            Self::Location => "Location",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Menu => "🍽️",
            Self::Offers => "🎁",
            Self::Order => "🛵",
            Self::Reviews => "⭐",
            Self::Location => "📍",
        }
    }
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/guwahatiflavors/guwahati_flavors/showcase_page.ui")]
    pub struct ShowcasePage {
        #[template_child(id = "showcase-page-content")]
        pub content: TemplateChild<PageContent>,
        #[template_child(id = "showcase-page-box")]
        pub box_container: TemplateChild<gtk::Box>,
        #[template_child(id = "showcase-hero-section")]
        pub hero_section: TemplateChild<HeroSection>,
        #[template_child(id = "showcase-menu-section")]
        pub menu_section: TemplateChild<MenuSection>,
        #[template_child(id = "showcase-offers-section")]
        pub offers_section: TemplateChild<OffersSection>,
        #[template_child(id = "showcase-ordering-section")]
        pub ordering_section: TemplateChild<OrderingSection>,
        #[template_child(id = "showcase-reviews-section")]
        pub reviews_section: TemplateChild<ReviewsSection>,
        #[template_child(id = "showcase-location-section")]
        pub location_section: TemplateChild<LocationSection>,

        pub sections: RefCell<OrderedMap<gtk::Widget>>,
        pub active_index: Cell<Option<usize>>,
        pub scroll_controller: OnceCell<SectionScrollController>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ShowcasePage {
        const NAME: &'static str = "ShowcasePage";
        type Type = super::ShowcasePage;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            PageContent::ensure_type();
            HeroSection::ensure_type();
            MenuSection::ensure_type();
            OffersSection::ensure_type();
            OrderingSection::ensure_type();
            ReviewsSection::ensure_type();
            LocationSection::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ShowcasePage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().register_sections();
            self.obj().setup_scroll_controller();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            static SIGNALS: OnceLock<[glib::subclass::Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [glib::subclass::Signal::builder(ACTIVE_SECTION_CHANGED_SIGNAL)
                    .param_types([u32::static_type()])
                    .build()]
            })
        }
    }

    impl WidgetImpl for ShowcasePage {}
    impl BinImpl for ShowcasePage {}
}

glib::wrapper! {
    pub struct ShowcasePage(ObjectSubclass<imp::ShowcasePage>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ShowcasePage {
    fn register_sections(&self) {
        let imp = self.imp();
        let widgets: [gtk::Widget; ShowcaseSection::COUNT] = [
            imp.hero_section.get().upcast(),
            imp.menu_section.get().upcast(),
            imp.offers_section.get().upcast(),
            imp.ordering_section.get().upcast(),
            imp.reviews_section.get().upcast(),
            imp.location_section.get().upcast(),
        ];

        let mut sections = imp.sections.borrow_mut();
        for (index, widget) in widgets.into_iter().enumerate() {
            sections.insert(index, widget);
        }
        drop(sections);

        imp.active_index.set(Some(ShowcaseSection::Home.index()));
    }

    fn setup_scroll_controller(&self) {
        let this_weak = self.downgrade();
        let handler = move |index| {
            if let Some(this) = this_weak.upgrade() {
                this.set_active_section_index(index);
            }
        };

        let controller = SectionScrollController::new(
            self.clone(),
            self.imp().box_container.get(),
            self.imp().content.scrolled_window().clone(),
            handler,
        );
        self.imp()
            .scroll_controller
            .set(controller)
            .ok()
            .expect("controller set once");
    }

    pub fn sections(&self) -> Ref<'_, OrderedMap<gtk::Widget>> {
        self.imp().sections.borrow()
    }

    pub fn active_section_index(&self) -> Option<usize> {
        self.imp().active_index.get()
    }

    fn set_active_section_index(&self, index: usize) -> bool {
        let imp = self.imp();

        if imp.active_index.get() != Some(index) && self.sections().get(index).is_some() {
            imp.active_index.set(Some(index));
            self.emit_by_name::<()>(ACTIVE_SECTION_CHANGED_SIGNAL, &[&(index as u32)]);
            true
        } else {
            false
        }
    }

    pub fn scroll_to_section(&self, index: usize) -> bool {
        self.imp()
            .scroll_controller
            .get()
            .is_some_and(|controller| controller.scroll_to(index))
    }

    pub fn scroll_to_top(&self) -> bool {
        self.imp()
            .scroll_controller
            .get()
            .is_some_and(SectionScrollController::scroll_to_top)
    }

    pub fn hero_section(&self) -> &HeroSection {
        &self.imp().hero_section
    }

    pub fn menu_section(&self) -> &MenuSection {
        &self.imp().menu_section
    }

    pub fn offers_section(&self) -> &OffersSection {
        &self.imp().offers_section
    }

    pub fn ordering_section(&self) -> &OrderingSection {
        &self.imp().ordering_section
    }

    pub fn reviews_section(&self) -> &ReviewsSection {
        &self.imp().reviews_section
    }

    pub fn location_section(&self) -> &LocationSection {
        &self.imp().location_section
    }

    pub fn connect_active_section_changed<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, usize) + 'static,
    {
        self.connect_local(ACTIVE_SECTION_CHANGED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().unwrap();
            let index = values[1].get::<u32>().unwrap();
            callback(&this, index as usize);
            None
        })
    }
}
