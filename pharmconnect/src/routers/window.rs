use iced::{Point, Size, Task};

use crate::app::{App, AppEvent};
use crate::outside_click::{DetectorId, PointerDown};
use crate::widgets::header::{ACCOUNT_MENU_DETECTOR, HeaderEvent, HeaderIntent};

/// Track the window size used for overlay geometry.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.window_size = size;
    Task::none()
}

/// Track the cursor so mouse presses can be located.
pub(crate) fn handle_cursor_moved(
    app: &mut App,
    position: Point,
) -> Task<AppEvent> {
    app.state.cursor = position;
    Task::none()
}

/// Resolve a pointer-down reported by a detector and hand it to its owner.
pub(crate) fn handle_pointer_down(
    app: &mut App,
    detector: DetectorId,
    pointer: PointerDown,
) -> Task<AppEvent> {
    match resolve_pointer_down(app, detector, pointer) {
        Some(event) => Task::done(event),
        None => {
            log::debug!("pointer-down from unknown detector {detector:?}");
            Task::none()
        },
    }
}

/// Locate the press and address it to the widget owning `detector`.
fn resolve_pointer_down(
    app: &App,
    detector: DetectorId,
    pointer: PointerDown,
) -> Option<AppEvent> {
    let position = pointer.position.unwrap_or(app.state.cursor);

    (detector == ACCOUNT_MENU_DETECTOR).then_some(AppEvent::Header(
        HeaderEvent::Intent(HeaderIntent::PointerDown { position }),
    ))
}

#[cfg(test)]
mod tests {
    use iced::advanced::subscription::into_recipes;
    use iced::{Point, Size};

    use super::{handle_cursor_moved, resolve_pointer_down};
    use crate::app::{App, AppEvent};
    use crate::layout::{ShellLayout, account_menu_bounds};
    use crate::outside_click::{DetectorId, PointerDown};
    use crate::router::Router;
    use crate::routers;
    use crate::settings::{DashboardSettings, MerchantProfile};
    use crate::shared::ui::theme::ThemeManager;
    use crate::state::State;
    use crate::widgets::Widgets;
    use crate::widgets::header::{
        ACCOUNT_MENU_DETECTOR, HeaderEvent, HeaderIntent,
    };

    const WINDOW: Size = Size::new(1280.0, 800.0);
    const MOUSE_PRESS: PointerDown = PointerDown { position: None };

    fn app() -> App {
        App {
            state: State::new(WINDOW),
            shell: ShellLayout::new(),
            router: Router::default(),
            profile: MerchantProfile::default(),
            theme_manager: ThemeManager::new(),
            widgets: Widgets::new(&DashboardSettings::default()),
        }
    }

    fn app_with_open_menu() -> App {
        let mut app = app();
        let _task = routers::route(
            &mut app,
            AppEvent::Header(HeaderEvent::Intent(
                HeaderIntent::ToggleAccountMenu,
            )),
        );
        assert!(app.widgets.header.is_account_menu_open());
        app
    }

    /// Feed mouse presses at `cursor` and count open-to-closed transitions.
    fn count_closes(
        app: &mut App,
        detector: DetectorId,
        cursor: Point,
        presses: usize,
    ) -> usize {
        let _task = handle_cursor_moved(app, cursor);

        let mut closes = 0;
        for _ in 0..presses {
            let was_open = app.widgets.header.is_account_menu_open();
            if let Some(event) = resolve_pointer_down(app, detector, MOUSE_PRESS)
            {
                let _task = routers::route(app, event);
            }
            if was_open && !app.widgets.header.is_account_menu_open() {
                closes += 1;
            }
        }
        closes
    }

    fn listener_count(app: &App) -> usize {
        into_recipes(app.subscription()).len()
    }

    #[test]
    fn given_open_menu_when_mouse_pressed_outside_then_menu_closes_once() {
        let mut app = app_with_open_menu();

        let closes = count_closes(
            &mut app,
            ACCOUNT_MENU_DETECTOR,
            Point::new(600.0, 400.0),
            2,
        );

        assert_eq!(closes, 1);
        assert!(!app.widgets.header.is_account_menu_open());
    }

    #[test]
    fn given_open_menu_when_mouse_pressed_inside_then_menu_stays_open() {
        let mut app = app_with_open_menu();

        let closes = count_closes(
            &mut app,
            ACCOUNT_MENU_DETECTOR,
            account_menu_bounds(WINDOW).center(),
            2,
        );

        assert_eq!(closes, 0);
        assert!(app.widgets.header.is_account_menu_open());
    }

    #[test]
    fn given_unknown_detector_when_mouse_pressed_outside_then_press_is_ignored()
    {
        let mut app = app_with_open_menu();
        let unknown = DetectorId::new("unknown");

        assert!(
            resolve_pointer_down(&app, unknown, MOUSE_PRESS).is_none()
        );
        assert_eq!(
            count_closes(&mut app, unknown, Point::new(600.0, 400.0), 1),
            0
        );
        assert!(app.widgets.header.is_account_menu_open());
    }

    #[test]
    fn given_touch_press_when_resolved_then_its_own_position_wins() {
        let mut app = app();
        let _task = handle_cursor_moved(&mut app, Point::new(1.0, 1.0));
        let touch = PointerDown {
            position: Some(Point::new(500.0, 300.0)),
        };

        let Some(AppEvent::Header(HeaderEvent::Intent(
            HeaderIntent::PointerDown { position },
        ))) = resolve_pointer_down(&app, ACCOUNT_MENU_DETECTOR, touch)
        else {
            panic!("press should be addressed to the header");
        };
        assert_eq!(position, Point::new(500.0, 300.0));
    }

    #[test]
    fn given_menu_toggled_when_subscriptions_built_then_listener_follows_arming()
    {
        let mut app = app();
        let window_only = listener_count(&app);

        let _task = routers::route(
            &mut app,
            AppEvent::Header(HeaderEvent::Intent(
                HeaderIntent::ToggleAccountMenu,
            )),
        );
        assert_eq!(listener_count(&app), window_only + 1);

        let _task = count_closes(
            &mut app,
            ACCOUNT_MENU_DETECTOR,
            Point::new(600.0, 400.0),
            1,
        );
        assert_eq!(listener_count(&app), window_only);
    }
}
