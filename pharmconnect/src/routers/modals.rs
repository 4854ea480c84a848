use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::modals::ModalsIntent;

/// Route a modal intent into the modal widget.
pub(crate) fn route(app: &mut App, intent: ModalsIntent) -> Task<AppEvent> {
    app.widgets.modals.reduce(intent);
    Task::none()
}
