use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // One pointer-down listener per armed outside-click detector.
    for detector in app.widgets.detectors() {
        subs.push(detector.subscription().map(|(detector, pointer)| {
            AppEvent::PointerDown { detector, pointer }
        }));
    }

    Subscription::batch(subs)
}
