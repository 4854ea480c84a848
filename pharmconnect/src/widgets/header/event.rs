use iced::Point;

/// Intent events handled by the header.
#[derive(Debug, Clone)]
pub(crate) enum HeaderIntent {
    ToggleAccountMenu,
    ShowProfile,
    Logout,
    OpenNotifications,
    SearchChanged(String),
    /// Pointer-down anywhere in the window, reported while the account
    /// menu detector is armed.
    PointerDown { position: Point },
}

/// Effect events produced by the header reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderEffect {
    ShowProfile,
    /// Open the notifications panel; `cleared` is the unread count that was
    /// reset by this request.
    ShowNotifications { cleared: u32 },
    Logout,
}

/// Header event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum HeaderEvent {
    /// Intent event reduced by the header widget.
    Intent(HeaderIntent),
    /// External effect orchestrated by app-level routing.
    Effect(HeaderEffect),
}
