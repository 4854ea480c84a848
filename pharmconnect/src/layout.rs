use iced::{Point, Rectangle, Size};

/// Width of the side navigation rail when expanded.
pub(crate) const MENU_EXPANDED_WIDTH: f32 = 256.0;
/// Width of the side navigation rail when minimized.
pub(crate) const MENU_MINIMIZED_WIDTH: f32 = 64.0;
pub(crate) const HEADER_HEIGHT: f32 = 80.0;
pub(crate) const HEADER_PADDING_X: f32 = 24.0;
pub(crate) const HEADER_SEARCH_WIDTH: f32 = 360.0;
pub(crate) const HEADER_BELL_SIZE: f32 = 40.0;
pub(crate) const HEADER_CONTROL_SPACING: f32 = 16.0;
const CONTENT_TOP_GAP: f32 = 16.0;

pub(crate) const ACCOUNT_TRIGGER_WIDTH: f32 = 280.0;
pub(crate) const ACCOUNT_TRIGGER_HEIGHT: f32 = 48.0;
pub(crate) const ACCOUNT_MENU_GAP: f32 = 8.0;
pub(crate) const ACCOUNT_MENU_ITEM_HEIGHT: f32 = 36.0;
pub(crate) const ACCOUNT_MENU_VERTICAL_PADDING: f32 = 8.0;
pub(crate) const ACCOUNT_MENU_SEPARATOR_HEIGHT: f32 = 1.0;
const ACCOUNT_MENU_ITEM_COUNT: usize = 2;

/// Width the header row needs so the account trigger stays right-aligned:
/// search box, bell and trigger plus the gaps between the three controls
/// and the flexible spacer.
pub(crate) const HEADER_ROW_MIN_WIDTH: f32 = HEADER_SEARCH_WIDTH
    + HEADER_BELL_SIZE
    + ACCOUNT_TRIGGER_WIDTH
    + 3.0 * HEADER_CONTROL_SPACING;

/// Narrowest window in which the expanded rail and a non-overflowing header
/// row fit side by side.
pub(crate) const MIN_SHELL_WIDTH: f32 =
    MENU_EXPANDED_WIDTH + 2.0 * HEADER_PADDING_X + HEADER_ROW_MIN_WIDTH;

/// Collapsed/expanded width state of the navigation rail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LayoutMode {
    #[default]
    Expanded,
    Minimized,
}

impl LayoutMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            LayoutMode::Expanded => LayoutMode::Minimized,
            LayoutMode::Minimized => LayoutMode::Expanded,
        }
    }

    pub(crate) fn is_minimized(self) -> bool {
        self == LayoutMode::Minimized
    }
}

/// Owner of the shell-wide layout mode. The only writer is
/// [`ShellLayout::toggle_minimize`].
#[derive(Debug, Default)]
pub(crate) struct ShellLayout {
    mode: LayoutMode,
}

impl ShellLayout {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Flip the layout mode and return the new value.
    pub(crate) fn toggle_minimize(&mut self) -> LayoutMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub(crate) fn insets(&self) -> ShellInsets {
        shell_insets(self.mode)
    }
}

/// Offsets derived from the layout mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShellInsets {
    pub(crate) menu_width: f32,
    pub(crate) header_left: f32,
    pub(crate) content_left: f32,
    pub(crate) content_top: f32,
}

pub(crate) fn shell_insets(mode: LayoutMode) -> ShellInsets {
    let menu_width = match mode {
        LayoutMode::Expanded => MENU_EXPANDED_WIDTH,
        LayoutMode::Minimized => MENU_MINIMIZED_WIDTH,
    };

    ShellInsets {
        menu_width,
        header_left: menu_width,
        content_left: menu_width,
        content_top: HEADER_HEIGHT + CONTENT_TOP_GAP,
    }
}

/// Bounds of the account trigger, right-aligned in the header. Matches the
/// drawn trigger for every window at least [`MIN_SHELL_WIDTH`] wide.
pub(crate) fn account_trigger_bounds(window_size: Size) -> Rectangle {
    let x = (window_size.width - HEADER_PADDING_X - ACCOUNT_TRIGGER_WIDTH)
        .max(0.0);
    let y = (HEADER_HEIGHT - ACCOUNT_TRIGGER_HEIGHT) / 2.0;

    Rectangle::new(
        Point::new(x, y),
        Size::new(ACCOUNT_TRIGGER_WIDTH, ACCOUNT_TRIGGER_HEIGHT),
    )
}

/// Bounds of the account dropdown panel, anchored below the trigger.
pub(crate) fn account_menu_bounds(window_size: Size) -> Rectangle {
    let trigger = account_trigger_bounds(window_size);

    Rectangle::new(
        Point::new(trigger.x, trigger.y + trigger.height + ACCOUNT_MENU_GAP),
        Size::new(trigger.width, account_menu_height()),
    )
}

pub(crate) fn account_menu_height() -> f32 {
    ACCOUNT_MENU_VERTICAL_PADDING * 2.0
        + ACCOUNT_MENU_ITEM_HEIGHT * ACCOUNT_MENU_ITEM_COUNT as f32
        + ACCOUNT_MENU_SEPARATOR_HEIGHT
}

/// Region owned by the account menu: the trigger, plus the dropdown panel
/// while it is open.
pub(crate) fn account_region(window_size: Size, menu_open: bool) -> Rectangle {
    let trigger = account_trigger_bounds(window_size);
    if menu_open {
        trigger.union(&account_menu_bounds(window_size))
    } else {
        trigger
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size};

    use super::*;

    const WINDOW: Size = Size::new(1280.0, 800.0);

    /// Left edge of the trigger as the header row lays it out: search box,
    /// flexible spacer, bell, trigger. The spacer never goes below zero, so
    /// a too narrow row pushes the trigger right.
    fn drawn_trigger_x(window: Size, mode: LayoutMode) -> f32 {
        let row_left = shell_insets(mode).header_left + HEADER_PADDING_X;
        let row_width = window.width - row_left - HEADER_PADDING_X;
        let spacer = (row_width - HEADER_ROW_MIN_WIDTH).max(0.0);

        row_left
            + HEADER_SEARCH_WIDTH
            + HEADER_CONTROL_SPACING
            + spacer
            + HEADER_CONTROL_SPACING
            + HEADER_BELL_SIZE
            + HEADER_CONTROL_SPACING
    }

    #[test]
    fn given_new_shell_when_created_then_layout_is_expanded() {
        assert_eq!(ShellLayout::new().mode(), LayoutMode::Expanded);
    }

    #[test]
    fn given_toggle_sequence_when_applied_then_parity_decides_mode() {
        for toggles in 0..7 {
            let mut shell = ShellLayout::new();
            for _ in 0..toggles {
                shell.toggle_minimize();
            }

            let expected = if toggles % 2 == 0 {
                LayoutMode::Expanded
            } else {
                LayoutMode::Minimized
            };
            assert_eq!(shell.mode(), expected, "after {toggles} toggles");
        }
    }

    #[test]
    fn given_each_mode_when_insets_derived_then_header_and_content_track_menu()
    {
        let expanded = shell_insets(LayoutMode::Expanded);
        assert_eq!(expanded.menu_width, MENU_EXPANDED_WIDTH);
        assert_eq!(expanded.header_left, MENU_EXPANDED_WIDTH);
        assert_eq!(expanded.content_left, MENU_EXPANDED_WIDTH);

        let minimized = shell_insets(LayoutMode::Minimized);
        assert_eq!(minimized.menu_width, MENU_MINIMIZED_WIDTH);
        assert_eq!(minimized.header_left, MENU_MINIMIZED_WIDTH);
        assert_eq!(minimized.content_left, MENU_MINIMIZED_WIDTH);
        assert_eq!(minimized.content_top, expanded.content_top);
    }

    #[test]
    fn given_closed_menu_when_region_computed_then_only_trigger_is_inside() {
        let region = account_region(WINDOW, false);
        let menu = account_menu_bounds(WINDOW);

        assert!(region.contains(account_trigger_bounds(WINDOW).center()));
        assert!(!region.contains(menu.center()));
    }

    #[test]
    fn given_open_menu_when_region_computed_then_dropdown_is_inside() {
        let region = account_region(WINDOW, true);

        assert!(region.contains(account_menu_bounds(WINDOW).center()));
        assert!(!region.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn given_narrow_window_when_trigger_placed_then_it_stays_on_screen() {
        let trigger = account_trigger_bounds(Size::new(100.0, 400.0));
        assert_eq!(trigger.x, 0.0);
    }

    #[test]
    fn given_minimum_window_when_trigger_placed_then_it_matches_drawn_row() {
        let window = Size::new(MIN_SHELL_WIDTH, 640.0);

        for mode in [LayoutMode::Expanded, LayoutMode::Minimized] {
            assert_eq!(
                account_trigger_bounds(window).x,
                drawn_trigger_x(window, mode),
                "{mode:?}"
            );
        }
    }

    #[test]
    fn given_default_window_when_trigger_placed_then_it_matches_drawn_row() {
        for mode in [LayoutMode::Expanded, LayoutMode::Minimized] {
            assert_eq!(
                account_trigger_bounds(WINDOW).x,
                drawn_trigger_x(WINDOW, mode),
                "{mode:?}"
            );
        }
    }

    #[test]
    fn given_minimum_window_when_derived_then_expanded_header_row_fits() {
        let row_width = MIN_SHELL_WIDTH
            - shell_insets(LayoutMode::Expanded).header_left
            - 2.0 * HEADER_PADDING_X;
        assert!(row_width >= HEADER_ROW_MIN_WIDTH);
    }
}
