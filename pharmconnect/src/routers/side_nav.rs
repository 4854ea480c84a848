use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::side_nav::{SideNavEffect, SideNavEvent, SideNavIntent};

/// Route a side navigation event through widget reduction or app
/// orchestration.
pub(crate) fn route(app: &mut App, event: SideNavEvent) -> Task<AppEvent> {
    match event {
        SideNavEvent::Intent(intent) => route_intent(app, intent),
        SideNavEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: SideNavIntent) -> Task<AppEvent> {
    app.widgets.side_nav.reduce(intent).map(AppEvent::SideNav)
}

fn route_effect(effect: SideNavEffect) -> Task<AppEvent> {
    match effect {
        SideNavEffect::ToggleMinimize => Task::done(AppEvent::ToggleMinimize),
        SideNavEffect::Navigate { path } => {
            Task::done(AppEvent::NavigateTo(path.to_string()))
        },
    }
}
