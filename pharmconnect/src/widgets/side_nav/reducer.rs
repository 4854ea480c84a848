use iced::Task;

use super::event::{SideNavEffect, SideNavEvent, SideNavIntent};
use super::menu::MenuItem;
use super::state::SideNavState;

/// Reduce a side navigation intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SideNavState,
    intent: SideNavIntent,
) -> Task<SideNavEvent> {
    let effect = match intent {
        SideNavIntent::ToggleMinimize => Some(SideNavEffect::ToggleMinimize),
        SideNavIntent::SelectItem(item) => select_item(state, item),
        SideNavIntent::SelectSubItem(sub_item) => {
            Some(SideNavEffect::Navigate {
                path: sub_item.path,
            })
        },
    };

    match effect {
        Some(effect) => Task::done(SideNavEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Apply a top-level selection and return the navigation it requests.
fn select_item(
    state: &mut SideNavState,
    item: &'static MenuItem,
) -> Option<SideNavEffect> {
    if item.has_sub_items() {
        state.toggle_expanded(item.label);
        return None;
    }

    item.path.map(|path| SideNavEffect::Navigate { path })
}

#[cfg(test)]
mod tests {
    use super::{SideNavState, select_item};
    use crate::widgets::side_nav::SideNavEffect;
    use crate::widgets::side_nav::menu::{MENU_ITEMS, MenuItem, SubMenuItem};

    fn menu_item(label: &str) -> &'static MenuItem {
        MENU_ITEMS
            .iter()
            .find(|item| item.label == label)
            .expect("menu item should exist")
    }

    static INERT: MenuItem = MenuItem {
        icon: &[],
        label: "Inert",
        path: None,
        sub_items: &[],
    };

    static BOTH: MenuItem = MenuItem {
        icon: &[],
        label: "Both",
        path: Some("/both"),
        sub_items: &[SubMenuItem {
            icon: &[],
            label: "Child",
            path: "/both/child",
        }],
    };

    #[test]
    fn given_parent_item_when_selected_twice_then_expanded_label_is_cleared() {
        let mut state = SideNavState::default();
        let products = menu_item("Product Management");

        assert_eq!(select_item(&mut state, products), None);
        assert_eq!(state.expanded_label(), Some("Product Management"));

        assert_eq!(select_item(&mut state, products), None);
        assert_eq!(state.expanded_label(), None);
    }

    #[test]
    fn given_expanded_parent_when_other_parent_selected_then_it_replaces_label()
    {
        let mut state = SideNavState::default();
        select_item(&mut state, menu_item("Product Management"));
        select_item(&mut state, menu_item("Order Management"));

        assert_eq!(state.expanded_label(), Some("Order Management"));
    }

    #[test]
    fn given_expanded_parent_when_leaf_selected_then_label_is_kept_and_navigation_requested()
     {
        let mut state = SideNavState::default();
        select_item(&mut state, menu_item("Product Management"));

        let effect = select_item(&mut state, menu_item("Dashboard"));

        assert_eq!(
            effect,
            Some(SideNavEffect::Navigate {
                path: "/dashboard"
            })
        );
        assert_eq!(state.expanded_label(), Some("Product Management"));
    }

    #[test]
    fn given_item_without_path_or_sub_items_when_selected_then_nothing_happens()
    {
        let mut state = SideNavState::default();

        assert_eq!(select_item(&mut state, &INERT), None);
        assert_eq!(state.expanded_label(), None);
    }

    #[test]
    fn given_item_with_path_and_sub_items_when_selected_then_it_acts_as_parent()
    {
        let mut state = SideNavState::default();

        assert_eq!(select_item(&mut state, &BOTH), None);
        assert_eq!(state.expanded_label(), Some("Both"));
    }
}
