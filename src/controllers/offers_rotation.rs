use super::super::prelude::*;
use super::super::ui::Ui;

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

const ROTATION_INTERVAL: Duration = Duration::from_secs(5);
const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
const SECONDS_PER_DAY: i32 = 86_400;

struct State {
    ui: Ui,
    rotation_source: Cell<Option<glib::SourceId>>,
    countdown_source: Cell<Option<glib::SourceId>>,
}

impl Drop for State {
    fn drop(&mut self) {
        if let Some(id) = self.rotation_source.take() {
            id.remove();
        }
        if let Some(id) = self.countdown_source.take() {
            id.remove();
        }
    }
}

struct WeakOffersRotation {
    state: Weak<State>,
}

impl WeakOffersRotation {
    fn upgrade(&self) -> Option<OffersRotation> {
        self.state.upgrade().map(|state| OffersRotation { state })
    }
}

/// Advances the offers carousel on a fixed interval and keeps the
/// end-of-day countdown ticking for limited offers.
pub struct OffersRotation {
    state: Rc<State>,
}

impl OffersRotation {
    pub fn new(ui: Ui) -> Self {
        let state = Rc::new(State {
            ui,
            rotation_source: Cell::new(None),
            countdown_source: Cell::new(None),
        });

        let this = Self { state };
        this.setup_rotation();
        this.setup_countdown();
        this.update_countdown();
        this
    }

    fn setup_rotation(&self) {
        let this_weak = self.downgrade();
        let source = glib::timeout_add_local(ROTATION_INTERVAL, move || {
            this_weak
                .upgrade()
                .map_or(glib::ControlFlow::Break, |this| {
                    this.state.ui.offers_section().advance();
                    this.update_countdown();
                    glib::ControlFlow::Continue
                })
        });
        self.state.rotation_source.set(Some(source));
    }

    fn setup_countdown(&self) {
        let this_weak = self.downgrade();
        let source = glib::timeout_add_local(COUNTDOWN_INTERVAL, move || {
            this_weak
                .upgrade()
                .map_or(glib::ControlFlow::Break, |this| {
                    this.update_countdown();
                    glib::ControlFlow::Continue
                })
        });
        self.state.countdown_source.set(Some(source));
    }

    fn update_countdown(&self) {
        let offers_section = self.state.ui.offers_section();

        if !offers_section.current_card_is_limited() {
            offers_section.set_countdown_visible(false);
            return;
        }

        let Ok(now) = glib::DateTime::now_local() else {
            offers_section.set_countdown_visible(false);
            return;
        };

        let elapsed_today = now.hour() * 3600 + now.minute() * 60 + now.second();
        let remaining = SECONDS_PER_DAY - elapsed_today;
        offers_section.set_countdown(&format!("Ends in: {}", format_countdown(remaining)));
        offers_section.set_countdown_visible(true);
    }

    fn downgrade(&self) -> WeakOffersRotation {
        let state = Rc::downgrade(&self.state);
        WeakOffersRotation { state }
    }
}

/// `{h}h {m}m {s}s` until midnight.
fn format_countdown(remaining_seconds: i32) -> String {
    let remaining = remaining_seconds.max(0);
    let hours = remaining / 3600;
    let minutes = remaining % 3600 / 60;
    let seconds = remaining % 60;

    format!("{hours}h {minutes}m {seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_splits_into_hour_minute_second_parts() {
        assert_eq!(format_countdown(3_661), "1h 1m 1s");
        assert_eq!(format_countdown(59), "0h 0m 59s");
        assert_eq!(format_countdown(86_399), "23h 59m 59s");
    }

    #[test]
    fn countdown_clamps_negative_remainders() {
        assert_eq!(format_countdown(-5), "0h 0m 0s");
    }
}
