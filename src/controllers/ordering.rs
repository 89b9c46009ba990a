use super::super::ordering::{
    full_menu_message, maps_url, offer_message, telephone_url, whatsapp_order_url, whatsapp_url,
    OrderingChannel,
};
use super::super::prelude::*;
use super::super::repository::Repository;
use super::super::ui::Ui;
use super::super::widgets::{ShowcaseSection, Window};

use std::rc::{Rc, Weak};

/// Opens an outbound URI, reporting failures as a toast on the window.
/// Fire-and-forget: no response is awaited beyond the launch result.
pub fn launch_uri(window: &Window, uri: &str) {
    let window_weak = window.downgrade();
    let uri_owned = uri.to_string();

    gtk::UriLauncher::new(&uri_owned).launch(
        Some(window),
        None::<&gtk::gio::Cancellable>,
        move |result| {
            if
                let Err(error) = result
                && let Some(window) = window_weak.upgrade()
            {
                eprintln!("Error: failed to launch {uri_owned}: {error}");
                window.notify_message(&format!("Failed to open {uri_owned}"));
            }
        },
    );
}

struct State {
    ui: Ui,
    repository: Repository,
}

struct WeakOrdering {
    state: Weak<State>,
}

impl WeakOrdering {
    fn upgrade(&self) -> Option<Ordering> {
        self.state.upgrade().map(|state| Ordering { state })
    }
}

/// Wires every order call-to-action to its outbound link: per-dish
/// WhatsApp messages, the delivery channels, phone and maps.
pub struct Ordering {
    state: Rc<State>,
}

impl Ordering {
    pub fn new(ui: Ui, repository: Repository) -> Self {
        let state = State { ui, repository };
        let this = Self {
            state: Rc::new(state),
        };
        this.setup_hero_actions();
        this.setup_dish_rows();
        this.setup_full_menu_action();
        this.setup_channel_cards();
        this.setup_contact_actions();
        this.setup_offer_claims();
        this
    }

    fn setup_hero_actions(&self) {
        let this_weak = self.downgrade();
        self.state.ui.hero_section().connect_order_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.state
                    .ui
                    .showcase_page()
                    .scroll_to_section(ShowcaseSection::Order.index());
            }
        });

        let this_weak = self.downgrade();
        self.state
            .ui
            .hero_section()
            .connect_view_menu_clicked(move |_| {
                if let Some(this) = this_weak.upgrade() {
                    this.state
                        .ui
                        .showcase_page()
                        .scroll_to_section(ShowcaseSection::Menu.index());
                }
            });
    }

    fn setup_dish_rows(&self) {
        for group in self.state.ui.menu_section().groups().values() {
            for row in group.rows().values() {
                let this_weak = self.downgrade();
                row.connect_order_clicked(move |row| {
                    if let Some(this) = this_weak.upgrade() {
                        this.order_item(row.index() as usize);
                    }
                });
            }
        }
    }

    fn setup_full_menu_action(&self) {
        let this_weak = self.downgrade();
        self.state
            .ui
            .menu_section()
            .full_menu_button()
            .connect_clicked(move |_button| {
                if let Some(this) = this_weak.upgrade() {
                    let info = this.state.repository.info();
                    launch_uri(
                        this.state.ui.window(),
                        &whatsapp_url(info, full_menu_message()),
                    );
                }
            });
    }

    fn setup_channel_cards(&self) {
        let ordering_section = self.state.ui.ordering_section();
        let cards = [
            (OrderingChannel::WhatsApp, ordering_section.whatsapp_card()),
            (OrderingChannel::Zomato, ordering_section.zomato_card()),
            (OrderingChannel::Swiggy, ordering_section.swiggy_card()),
        ];

        for (channel, card) in cards {
            let this_weak = self.downgrade();
            card.connect_action_clicked(move |_card| {
                if let Some(this) = this_weak.upgrade() {
                    let url = channel.url(this.state.repository.info());
                    launch_uri(this.state.ui.window(), &url);
                }
            });
        }
    }

    fn setup_contact_actions(&self) {
        let this_weak = self.downgrade();
        self.state
            .ui
            .ordering_section()
            .call_button()
            .connect_clicked(move |_button| {
                if let Some(this) = this_weak.upgrade() {
                    let url = telephone_url(this.state.repository.info());
                    launch_uri(this.state.ui.window(), &url);
                }
            });

        let this_weak = self.downgrade();
        self.state
            .ui
            .location_section()
            .call_button()
            .connect_clicked(move |_button| {
                if let Some(this) = this_weak.upgrade() {
                    let url = telephone_url(this.state.repository.info());
                    launch_uri(this.state.ui.window(), &url);
                }
            });

        let this_weak = self.downgrade();
        self.state
            .ui
            .location_section()
            .maps_button()
            .connect_clicked(move |_button| {
                if let Some(this) = this_weak.upgrade() {
                    let url = maps_url(this.state.repository.info());
                    launch_uri(this.state.ui.window(), &url);
                }
            });
    }

    fn setup_offer_claims(&self) {
        for card in self.state.ui.offers_section().cards().values() {
            let this_weak = self.downgrade();
            card.connect_claim_clicked(move |card| {
                if let Some(this) = this_weak.upgrade() {
                    this.claim_offer(card.index() as usize);
                }
            });
        }
    }

    fn order_item(&self, item_index: usize) {
        if let Some(item) = self.state.repository.item_by_index(item_index) {
            let url = whatsapp_order_url(self.state.repository.info(), item);
            launch_uri(self.state.ui.window(), &url);
        }
    }

    fn claim_offer(&self, offer_index: usize) {
        if let Some(offer) = self.state.repository.offers().get(offer_index) {
            let url = whatsapp_url(self.state.repository.info(), &offer_message(offer));
            launch_uri(self.state.ui.window(), &url);
        }
    }

    fn downgrade(&self) -> WeakOrdering {
        let state = Rc::downgrade(&self.state);
        WeakOrdering { state }
    }
}
