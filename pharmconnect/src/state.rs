use iced::{Point, Size};

/// Window geometry and pointer state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    /// Last cursor position reported inside the window.
    pub(crate) cursor: Point,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            cursor: Point::ORIGIN,
        }
    }
}
