use super::super::prelude::*;
use super::super::widgets::ShowcasePage;

use gtk::graphene::Point;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);
const ANIMATION_DURATION: Duration = Duration::from_millis(300);
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct State {
    showcase_page: ShowcasePage,
    container_box: gtk::Box,
    scrolled_window: gtk::ScrolledWindow,
    previous_scroll_position: Cell<f64>,
    debounce_timeout: Cell<Option<(f64, glib::SourceId)>>,
    animation_timeout: Cell<Option<glib::SourceId>>,
    on_active_changed: Box<dyn Fn(usize) + 'static>,
}

struct WeakSectionScroll {
    state: Weak<State>,
}

impl WeakSectionScroll {
    fn upgrade(&self) -> Option<SectionScroll> {
        self.state.upgrade().map(|state| SectionScroll { state })
    }
}

/// Keeps the active section in sync with the scroll position: scrolling
/// picks the section crossing the viewport, selecting a section animates
/// the scroll towards it.
pub struct SectionScroll {
    state: Rc<State>,
}

impl SectionScroll {
    pub fn new<F>(
        showcase_page: ShowcasePage,
        container_box: gtk::Box,
        scrolled_window: gtk::ScrolledWindow,
        on_active_changed: F,
    ) -> Self
    where
        F: Fn(usize) + 'static,
    {
        let state = Rc::new(State {
            showcase_page,
            container_box,
            scrolled_window,
            previous_scroll_position: Cell::new(0.0),
            debounce_timeout: Cell::new(None),
            animation_timeout: Cell::new(None),
            on_active_changed: Box::new(on_active_changed),
        });

        let this = Self { state };
        this.setup_scroll_change_handler();
        this.setup_scroll_key_handler();
        this
    }

    fn setup_scroll_change_handler(&self) {
        let this_weak = self.downgrade();
        self.state
            .scrolled_window
            .vadjustment()
            .connect_value_changed(move |_| {
                if let Some(this) = this_weak.upgrade() {
                    this.schedule_debounced_scroll_handler();
                }
            });
    }

    fn setup_scroll_key_handler(&self) {
        let this_weak = self.downgrade();
        self.state
            .scrolled_window
            .connect_scroll_child(move |_, scroll_type, horizontal| {
                this_weak
                    .upgrade()
                    .is_some_and(|this| this.handle_scroll_key_event(scroll_type, horizontal))
            });
    }

    fn schedule_debounced_scroll_handler(&self) {
        if let Some((_, id)) = self.state.debounce_timeout.take() {
            id.remove();
        }

        let this_weak = self.downgrade();
        let handler = move || {
            if let Some(this) = this_weak.upgrade() {
                this.handle_scroll_change();
            }
        };

        let timeout_id = glib::timeout_add_local_once(SCROLL_DEBOUNCE, handler);
        let current_scroll_position = self.state.scrolled_window.vadjustment().value();
        self.state
            .debounce_timeout
            .replace(Some((current_scroll_position, timeout_id)));
    }

    fn handle_scroll_key_event(&self, scroll_type: gtk::ScrollType, horizontal: bool) -> bool {
        match (horizontal, scroll_type) {
            (false, gtk::ScrollType::Start) => {
                self.scroll_to_top();
                true
            }
            (false, gtk::ScrollType::End) => {
                self.scroll_to_bottom();
                true
            }
            _ => false,
        }
    }

    pub fn scroll_to(&self, index: usize) -> bool {
        if
            !self.is_current_active(index)
            && let Some(section) = self.state.showcase_page.sections().get(index).cloned()
            && section.is_visible()
            && let Some((relative_top, _relative_bottom)) = self.section_viewport_bounds(&section)
        {
            (self.state.on_active_changed)(index);
            let adjustment = self.state.scrolled_window.vadjustment();
            let target_position = adjustment.value() + relative_top;
            self.animate_scroll_to_position(target_position);
            true
        } else {
            false
        }
    }

    pub fn scroll_to_top(&self) -> bool {
        self.first_visible_section_index()
            .is_some_and(|index| self.scroll_to(index))
    }

    pub fn scroll_to_bottom(&self) -> bool {
        self.last_visible_section_index()
            .is_some_and(|index| self.scroll_to(index))
    }

    fn animate_scroll_to_position(&self, target_position: f64) {
        if let Some(timeout_id) = self.state.animation_timeout.take() {
            timeout_id.remove();
        }

        let adjustment = self.state.scrolled_window.vadjustment();
        let start_position = adjustment.value();
        let distance = target_position - start_position;

        if distance.abs() < 1.0 {
            return;
        }

        let animation_start_time = std::time::Instant::now();
        let this_weak = self.downgrade();

        let animation_callback = move || {
            this_weak.upgrade().map_or(glib::ControlFlow::Break, |this| {
                this.execute_animation_frame(animation_start_time, start_position, distance)
            })
        };

        let timeout_id = glib::timeout_add_local(ANIMATION_FRAME_INTERVAL, animation_callback);
        self.state.animation_timeout.set(Some(timeout_id));
    }

    fn execute_animation_frame(
        &self,
        start_time: std::time::Instant,
        start_position: f64,
        distance: f64,
    ) -> glib::ControlFlow {
        let elapsed = start_time.elapsed();
        let progress =
            (elapsed.as_millis() as f64 / ANIMATION_DURATION.as_millis() as f64).min(1.0);
        let eased_progress = 1.0 - (1.0 - progress).powi(3);
        let current_position = distance.mul_add(eased_progress, start_position);
        self.state
            .scrolled_window
            .vadjustment()
            .set_value(current_position);

        if progress >= 1.0 {
            self.state.animation_timeout.set(None);
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    }

    fn first_visible_section_index(&self) -> Option<usize> {
        for (index, section) in self.state.showcase_page.sections().iter() {
            if section.is_visible() {
                return Some(index);
            }
        }
        None
    }

    fn last_visible_section_index(&self) -> Option<usize> {
        let sections = self.state.showcase_page.sections();
        for position in (0..sections.len()).rev() {
            if
                let Some((index, section)) = sections.entry_by_position(position)
                && section.is_visible()
            {
                return Some(index);
            }
        }
        None
    }

    fn is_current_active(&self, index: usize) -> bool {
        self.state.showcase_page.active_section_index() == Some(index)
    }

    fn handle_scroll_change(&self) {
        let queued_scroll_position = self
            .state
            .debounce_timeout
            .take()
            .map(|(position, _)| position);
        let adjustment = self.state.scrolled_window.vadjustment();
        let current_scroll_position = adjustment.value();
        let previous_scroll_position = self.state.previous_scroll_position.get();

        let effective_previous_position = queued_scroll_position
            .filter(|&queued| (queued - current_scroll_position).abs() < f64::EPSILON)
            .map(|_| previous_scroll_position)
            .or(queued_scroll_position)
            .unwrap_or(previous_scroll_position);

        self.state
            .previous_scroll_position
            .set(current_scroll_position);
        let scrolling_down = current_scroll_position > effective_previous_position;

        if
            let Some(index) = self.active_section_by_viewport_intersection(scrolling_down)
            && !self.is_current_active(index)
        {
            (self.state.on_active_changed)(index);
        }
    }

    fn active_section_by_viewport_intersection(&self, scrolling_down: bool) -> Option<usize> {
        let adjustment = self.state.scrolled_window.vadjustment();
        let current_scroll_position = adjustment.value();
        let viewport_height = adjustment.page_size();
        let max_scroll_position = adjustment.upper() - viewport_height;

        if current_scroll_position <= 0.0 {
            return self.first_visible_section_index();
        }

        if current_scroll_position >= max_scroll_position {
            return self.last_visible_section_index();
        }

        let sections = self.state.showcase_page.sections();
        let mut best_section_index = None;
        let mut best_intersection_score = f64::NEG_INFINITY;

        for (index, section) in sections.iter() {
            if
                section.is_visible()
                && let Some((relative_top, relative_bottom)) = self.section_viewport_bounds(section)
                && relative_bottom > 0.0
                && relative_top < viewport_height
            {
                let intersection_score = if scrolling_down && relative_top > 0.0 {
                    -relative_top - 1000.0
                } else {
                    -relative_top
                };

                if intersection_score > best_intersection_score {
                    best_intersection_score = intersection_score;
                    best_section_index = Some(index);
                }
            }
        }

        best_section_index
    }

    fn section_viewport_bounds(&self, section: &gtk::Widget) -> Option<(f64, f64)> {
        let origin = Point::new(0.0, 0.0);
        section
            .compute_point(&self.state.container_box, &origin)
            .map(|point_in_page| {
                let adjustment = self.state.scrolled_window.vadjustment();
                let scroll_position = adjustment.value();
                let section_y_position = f64::from(point_in_page.y());
                let section_height = f64::from(section.height());
                let relative_top = section_y_position - scroll_position;
                (relative_top, relative_top + section_height)
            })
    }

    fn downgrade(&self) -> WeakSectionScroll {
        let state = Rc::downgrade(&self.state);
        WeakSectionScroll { state }
    }
}
