use super::super::ordering::whatsapp_order_url;
use super::super::prelude::*;
use super::super::recommendations::{recommendation_reason, select_recommendations};
use super::super::repository::Repository;
use super::super::ui::Ui;
use super::super::widgets::RecommendationRow;
use super::ordering::launch_uri;

use std::rc::{Rc, Weak};
use std::time::Duration;

const REVEAL_DELAY: Duration = Duration::from_secs(3);

struct State {
    ui: Ui,
    repository: Repository,
}

struct WeakRecommendations {
    state: Weak<State>,
}

impl WeakRecommendations {
    fn upgrade(&self) -> Option<Recommendations> {
        self.state.upgrade().map(|state| Recommendations { state })
    }
}

/// Fills and reveals the recommendation panel once per session, a few
/// seconds after the window comes up.
pub struct Recommendations {
    state: Rc<State>,
}

impl Recommendations {
    pub fn new(ui: Ui, repository: Repository) -> Self {
        let state = State { ui, repository };
        let this = Self {
            state: Rc::new(state),
        };
        this.setup_reveal_timer();
        this
    }

    fn setup_reveal_timer(&self) {
        let this_weak = self.downgrade();
        glib::timeout_add_local_once(REVEAL_DELAY, move || {
            if let Some(this) = this_weak.upgrade() {
                this.populate_and_reveal();
            }
        });
    }

    fn populate_and_reveal(&self) {
        let Ok(now) = glib::DateTime::now_local() else {
            return;
        };
        let hour = now.hour().clamp(0, 23) as u32;

        let mut rng = rand::thread_rng();
        let picks = select_recommendations(self.state.repository.items(), hour, &mut rng);
        if picks.is_empty() {
            return;
        }

        let panel = self.state.ui.recommendations_panel();
        panel.clear_rows();

        for (index, item) in picks {
            let reason = recommendation_reason(item, hour);
            let row = RecommendationRow::new(item, index, reason);

            let this_weak = self.downgrade();
            row.connect_order_clicked(move |row| {
                if let Some(this) = this_weak.upgrade() {
                    this.order_item(row.index() as usize);
                }
            });

            panel.append_row(row);
        }

        panel.reveal();
    }

    fn order_item(&self, item_index: usize) {
        if let Some(item) = self.state.repository.item_by_index(item_index) {
            let url = whatsapp_order_url(self.state.repository.info(), item);
            launch_uri(self.state.ui.window(), &url);
        }
    }

    fn downgrade(&self) -> WeakRecommendations {
        let state = Rc::downgrade(&self.state);
        WeakRecommendations { state }
    }
}
