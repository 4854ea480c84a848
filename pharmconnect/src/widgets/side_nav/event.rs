use super::menu::{MenuItem, SubMenuItem};

/// Intent events handled by the side navigation.
#[derive(Debug, Clone)]
pub(crate) enum SideNavIntent {
    ToggleMinimize,
    SelectItem(&'static MenuItem),
    SelectSubItem(&'static SubMenuItem),
}

/// Effect events produced by the side navigation reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SideNavEffect {
    ToggleMinimize,
    Navigate { path: &'static str },
}

/// Side navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SideNavEvent {
    /// Intent event reduced by the side navigation widget.
    Intent(SideNavIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SideNavEffect),
}
