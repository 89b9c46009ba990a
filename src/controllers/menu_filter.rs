use super::super::menu_filter::{filter_menu, CategorySelection, FilterTag};
use super::super::prelude::*;
use super::super::repository::Repository;
use super::super::ui::Ui;

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    repository: Repository,
    selection: Cell<CategorySelection>,
    tag: Cell<FilterTag>,
}

struct WeakMenuFilter {
    state: Weak<State>,
}

impl WeakMenuFilter {
    fn upgrade(&self) -> Option<MenuFilter> {
        self.state.upgrade().map(|state| MenuFilter { state })
    }
}

/// Owns the menu view state (category selection + filter tag) and
/// recomputes row visibility whenever a chip is clicked.
pub struct MenuFilter {
    state: Rc<State>,
}

impl MenuFilter {
    pub fn new(ui: Ui, repository: Repository) -> Self {
        let state = State {
            ui,
            repository,
            selection: Cell::new(CategorySelection::new()),
            tag: Cell::new(FilterTag::All),
        };
        let this = Self {
            state: Rc::new(state),
        };
        this.setup_show_all_chip();
        this.setup_category_chips();
        this.setup_filter_chips();
        this
    }

    fn setup_show_all_chip(&self) {
        let this_weak = self.downgrade();
        self.state
            .ui
            .menu_section()
            .show_all_button()
            .connect_clicked(move |_chip| {
                if let Some(this) = this_weak.upgrade() {
                    this.clear_category();
                }
            });
    }

    fn setup_category_chips(&self) {
        let menu_section = self.state.ui.menu_section();
        for (&index, chip) in menu_section.category_chips().iter() {
            let this_weak = self.downgrade();
            chip.connect_clicked(move |_chip| {
                if let Some(this) = this_weak.upgrade() {
                    this.toggle_category(index);
                }
            });
        }
    }

    fn setup_filter_chips(&self) {
        let menu_section = self.state.ui.menu_section();
        for (tag, chip) in menu_section.filter_chips().iter() {
            let tag = *tag;
            let this_weak = self.downgrade();
            chip.connect_clicked(move |_chip| {
                if let Some(this) = this_weak.upgrade() {
                    this.set_filter_tag(tag);
                }
            });
        }
    }

    /// Selecting the active category again clears the restriction.
    pub fn toggle_category(&self, category_index: usize) {
        let mut selection = self.state.selection.get();
        selection.toggle(category_index);
        self.state.selection.set(selection);
        self.refresh();
    }

    pub fn clear_category(&self) {
        let mut selection = self.state.selection.get();
        selection.clear();
        self.state.selection.set(selection);
        self.refresh();
    }

    pub fn set_filter_tag(&self, tag: FilterTag) {
        self.state.tag.set(tag);
        self.refresh();
    }

    fn refresh(&self) {
        let selection = self.state.selection.get();
        let tag = self.state.tag.get();

        let visible: HashSet<usize> =
            filter_menu(self.state.repository.items(), selection.active(), tag)
                .into_iter()
                .map(|(index, _)| index)
                .collect();

        let menu_section = self.state.ui.menu_section();
        menu_section.apply_item_filter(|row| visible.contains(&(row.index() as usize)));
        menu_section.set_active_category(selection.active());
        menu_section.set_active_filter(tag);
    }

    fn downgrade(&self) -> WeakMenuFilter {
        let state = Rc::downgrade(&self.state);
        WeakMenuFilter { state }
    }
}
