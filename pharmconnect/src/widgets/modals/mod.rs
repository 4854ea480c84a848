mod event;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::ModalsIntent;
pub(crate) use state::ModalPanel;
use state::ModalsState;

/// Modal overlay presenting the notifications and profile panels.
pub(crate) struct ModalsWidget {
    state: ModalsState,
}

impl ModalsWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ModalsState::default(),
        }
    }

    pub(crate) fn reduce(&mut self, intent: ModalsIntent) {
        reducer::reduce(&mut self.state, intent);
    }

    pub(crate) fn active(&self) -> Option<ModalPanel> {
        self.state.active()
    }
}
