mod event;
mod menu;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SideNavEffect, SideNavEvent, SideNavIntent};
use iced::Task;
pub(crate) use model::SideNavViewModel;
use state::SideNavState;

use crate::layout::LayoutMode;

/// Side navigation widget owning the expanded submenu entry.
pub(crate) struct SideNavWidget {
    state: SideNavState,
}

impl SideNavWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SideNavState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: SideNavIntent) -> Task<SideNavEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model. Layout mode and active route belong to
    /// the shell and the router and are passed in explicitly.
    pub(crate) fn vm<'a>(
        &self,
        layout_mode: LayoutMode,
        active_route: &'a str,
    ) -> SideNavViewModel<'a> {
        SideNavViewModel {
            items: menu::MENU_ITEMS,
            layout_mode,
            expanded_label: self.state.expanded_label(),
            active_route,
        }
    }

    /// Return the label of the expanded top-level entry, if any.
    pub(crate) fn expanded_label(&self) -> Option<&'static str> {
        self.state.expanded_label()
    }
}

#[cfg(test)]
mod tests {
    use super::{SideNavIntent, SideNavWidget, menu};
    use crate::layout::{LayoutMode, ShellLayout};

    #[test]
    fn given_expanded_submenu_when_rail_minimized_and_restored_then_submenu_reappears()
     {
        let mut widget = SideNavWidget::new();
        let mut shell = ShellLayout::new();
        let products = menu::MENU_ITEMS
            .iter()
            .find(|item| item.label == "Product Management")
            .expect("menu item should exist");

        let _task = widget.reduce(SideNavIntent::SelectItem(products));
        shell.toggle_minimize();

        assert_eq!(shell.mode(), LayoutMode::Minimized);
        assert!(!widget.vm(shell.mode(), "/dashboard").is_submenu_visible(products));
        assert_eq!(widget.expanded_label(), Some("Product Management"));

        shell.toggle_minimize();

        assert!(widget.vm(shell.mode(), "/dashboard").is_submenu_visible(products));
    }

    #[test]
    fn given_toggle_minimize_intent_when_reduced_then_expanded_label_is_untouched()
     {
        let mut widget = SideNavWidget::new();
        let _task = widget.reduce(SideNavIntent::ToggleMinimize);
        assert_eq!(widget.expanded_label(), None);
    }
}
