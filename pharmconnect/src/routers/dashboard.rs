use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::dashboard::DashboardIntent;

/// Route a dashboard intent into the dashboard widget.
pub(crate) fn route(app: &mut App, intent: DashboardIntent) -> Task<AppEvent> {
    app.widgets.dashboard.reduce(intent);
    Task::none()
}
