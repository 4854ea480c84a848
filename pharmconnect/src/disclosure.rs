/// Open/closed state of a dropdown or any other collapsible region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub(crate) fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    /// Flip the state and return whether it is now open.
    pub(crate) fn toggle(&mut self) -> bool {
        *self = match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        };
        self.is_open()
    }

    /// Open regardless of the current state.
    pub(crate) fn open(&mut self) {
        *self = Disclosure::Open;
    }

    /// Close regardless of the current state. Returns `true` when the
    /// region was open before the call.
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Disclosure::Closed;
        was_open
    }
}
