use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod dashboard;
pub(crate) mod flow;
pub(crate) mod header;
pub(crate) mod modals;
pub(crate) mod side_nav;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Side navigation widget
        AppEvent::SideNav(event) => side_nav::route(app, event),
        // Header widget
        AppEvent::Header(event) => header::route(app, event),
        // Modals widget
        AppEvent::Modals(intent) => modals::route(app, intent),
        // Dashboard page
        AppEvent::Dashboard(intent) => dashboard::route(app, intent),
        // Cross-widget flows
        AppEvent::ToggleMinimize => flow::toggle_minimize(app),
        AppEvent::NavigateTo(path) => flow::navigate_to(app, &path),
        AppEvent::Logout => flow::logout(),
        // Direct operations
        AppEvent::CursorMoved(position) => {
            window::handle_cursor_moved(app, position)
        },
        AppEvent::PointerDown { detector, pointer } => {
            window::handle_pointer_down(app, detector, pointer)
        },
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
