use iced::Task;

use crate::app::{App, AppEvent};

/// Flip the shell layout between expanded and minimized.
pub(crate) fn toggle_minimize(app: &mut App) -> Task<AppEvent> {
    let mode = app.shell.toggle_minimize();
    log::debug!("layout mode changed to {mode:?}");
    Task::none()
}

/// Hand a navigation request to the router.
pub(crate) fn navigate_to(app: &mut App, path: &str) -> Task<AppEvent> {
    if app.router.navigate_to(path) {
        log::debug!("navigated to {path}");
    }
    Task::none()
}

/// Logout has no backend; the request is only recorded.
pub(crate) fn logout() -> Task<AppEvent> {
    log::info!("logout requested");
    Task::none()
}
