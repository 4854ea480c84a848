use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::header::{
    HeaderCtx, HeaderEffect, HeaderEvent, HeaderIntent,
};
use crate::widgets::modals::ModalsIntent;

/// Route a header event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: HeaderEvent) -> Task<AppEvent> {
    match event {
        HeaderEvent::Intent(intent) => route_intent(app, intent),
        HeaderEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: HeaderIntent) -> Task<AppEvent> {
    let ctx = HeaderCtx {
        window_size: app.state.window_size,
    };
    app.widgets.header.reduce(intent, &ctx).map(AppEvent::Header)
}

fn route_effect(effect: HeaderEffect) -> Task<AppEvent> {
    match effect {
        HeaderEffect::ShowProfile => {
            Task::done(AppEvent::Modals(ModalsIntent::ShowProfile))
        },
        HeaderEffect::ShowNotifications { cleared } => {
            log::debug!("notifications opened, {cleared} marked as read");
            Task::done(AppEvent::Modals(ModalsIntent::ShowNotifications {
                cleared,
            }))
        },
        HeaderEffect::Logout => Task::done(AppEvent::Logout),
    }
}
