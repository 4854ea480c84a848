/// Private state of the side navigation: the expanded top-level entry.
#[derive(Debug, Default)]
pub(crate) struct SideNavState {
    expanded_label: Option<&'static str>,
}

impl SideNavState {
    pub(crate) fn expanded_label(&self) -> Option<&'static str> {
        self.expanded_label
    }

    /// Expand `label`, or collapse it when it is already expanded.
    pub(crate) fn toggle_expanded(&mut self, label: &'static str) {
        self.expanded_label = if self.expanded_label == Some(label) {
            None
        } else {
            Some(label)
        };
    }
}
