/// Intent events handled by the modal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ModalsIntent {
    ShowNotifications { cleared: u32 },
    ShowProfile,
    Dismiss,
}
