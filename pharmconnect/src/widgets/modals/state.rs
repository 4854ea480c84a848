use crate::disclosure::Disclosure;

/// Panel presented above the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ModalPanel {
    Notifications {
        cleared: u32,
    },
    #[default]
    Profile,
}

/// Private modal state. At most one panel is visible at a time; `panel`
/// only matters while `visibility` is open.
#[derive(Debug, Default)]
pub(crate) struct ModalsState {
    visibility: Disclosure,
    panel: ModalPanel,
}

impl ModalsState {
    pub(crate) fn active(&self) -> Option<ModalPanel> {
        self.visibility.is_open().then_some(self.panel)
    }

    /// Present `panel`, replacing whatever was visible. Showing never
    /// toggles an already visible overlay closed.
    pub(crate) fn show(&mut self, panel: ModalPanel) {
        self.panel = panel;
        self.visibility.open();
    }

    pub(crate) fn dismiss(&mut self) {
        self.visibility.close();
    }
}
