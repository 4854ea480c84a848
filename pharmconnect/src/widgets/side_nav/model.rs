use super::menu::{MenuItem, SubMenuItem};
use crate::layout::LayoutMode;
use crate::router::is_active;

/// Read-only view model for the navigation rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SideNavViewModel<'a> {
    pub(crate) items: &'static [MenuItem],
    pub(crate) layout_mode: LayoutMode,
    pub(crate) expanded_label: Option<&'static str>,
    pub(crate) active_route: &'a str,
}

impl SideNavViewModel<'_> {
    pub(crate) fn is_minimized(&self) -> bool {
        self.layout_mode.is_minimized()
    }

    /// A submenu shows only while the rail is expanded and its parent is the
    /// expanded entry.
    pub(crate) fn is_submenu_visible(&self, item: &MenuItem) -> bool {
        !self.is_minimized()
            && item.has_sub_items()
            && self.expanded_label == Some(item.label)
    }

    pub(crate) fn is_expanded(&self, item: &MenuItem) -> bool {
        self.expanded_label == Some(item.label)
    }

    /// Highlight a leaf by its path and a parent by any of its sub items.
    pub(crate) fn is_item_active(&self, item: &MenuItem) -> bool {
        if item.has_sub_items() {
            return item
                .sub_items
                .iter()
                .any(|sub_item| self.is_sub_item_active(sub_item));
        }

        item.path
            .is_some_and(|path| is_active(self.active_route, path))
    }

    pub(crate) fn is_sub_item_active(&self, sub_item: &SubMenuItem) -> bool {
        is_active(self.active_route, sub_item.path)
    }
}

#[cfg(test)]
mod tests {
    use super::SideNavViewModel;
    use crate::layout::LayoutMode;
    use crate::widgets::side_nav::menu::{MENU_ITEMS, MenuItem};

    fn menu_item(label: &str) -> &'static MenuItem {
        MENU_ITEMS
            .iter()
            .find(|item| item.label == label)
            .expect("menu item should exist")
    }

    fn vm(layout_mode: LayoutMode, active_route: &str) -> SideNavViewModel<'_> {
        SideNavViewModel {
            items: MENU_ITEMS,
            layout_mode,
            expanded_label: Some("Product Management"),
            active_route,
        }
    }

    #[test]
    fn given_expanded_label_when_rail_expanded_then_only_that_submenu_is_visible()
     {
        let vm = vm(LayoutMode::Expanded, "/dashboard");

        assert!(vm.is_submenu_visible(menu_item("Product Management")));
        assert!(!vm.is_submenu_visible(menu_item("Order Management")));
    }

    #[test]
    fn given_expanded_label_when_rail_minimized_then_no_submenu_is_visible() {
        let vm = vm(LayoutMode::Minimized, "/dashboard");

        assert!(!vm.is_submenu_visible(menu_item("Product Management")));
        assert_eq!(vm.expanded_label, Some("Product Management"));
    }

    #[test]
    fn given_nested_route_when_highlighting_then_parent_and_sub_item_are_active()
    {
        let vm = vm(LayoutMode::Expanded, "/products/inventory");
        let products = menu_item("Product Management");

        assert!(vm.is_item_active(products));
        assert!(vm.is_sub_item_active(&products.sub_items[0]));
        assert!(!vm.is_sub_item_active(&products.sub_items[1]));
        assert!(!vm.is_item_active(menu_item("Dashboard")));
    }
}
