use iced::{Size, Task};

use super::event::{HeaderEffect, HeaderEvent, HeaderIntent};
use super::state::HeaderState;
use crate::layout::account_region;

/// Read-only context for header reduction.
pub(crate) struct HeaderCtx {
    pub(crate) window_size: Size,
}

/// Reduce a header intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut HeaderState,
    intent: HeaderIntent,
    ctx: &HeaderCtx,
) -> Task<HeaderEvent> {
    match apply(state, intent, ctx) {
        Some(effect) => Task::done(HeaderEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(
    state: &mut HeaderState,
    intent: HeaderIntent,
    ctx: &HeaderCtx,
) -> Option<HeaderEffect> {
    match intent {
        HeaderIntent::ToggleAccountMenu => {
            state.toggle_account_menu(account_region(ctx.window_size, true));
            None
        },
        HeaderIntent::ShowProfile => {
            state.close_account_menu();
            Some(HeaderEffect::ShowProfile)
        },
        HeaderIntent::Logout => {
            state.close_account_menu();
            Some(HeaderEffect::Logout)
        },
        HeaderIntent::OpenNotifications => {
            let cleared = state.clear_unread();
            Some(HeaderEffect::ShowNotifications { cleared })
        },
        HeaderIntent::SearchChanged(query) => {
            state.set_search_query(query);
            None
        },
        HeaderIntent::PointerDown { position } => {
            let region =
                account_region(ctx.window_size, state.is_account_menu_open());
            if state.is_outside_account_menu(region, position) {
                state.close_account_menu();
            }
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size};

    use super::{HeaderCtx, apply};
    use crate::layout::{account_menu_bounds, account_trigger_bounds};
    use crate::widgets::header::HeaderEffect;
    use crate::widgets::header::event::HeaderIntent;
    use crate::widgets::header::state::HeaderState;

    const WINDOW: Size = Size::new(1280.0, 800.0);

    fn ctx() -> HeaderCtx {
        HeaderCtx {
            window_size: WINDOW,
        }
    }

    fn open_state() -> HeaderState {
        let mut state = HeaderState::new(6);
        apply(&mut state, HeaderIntent::ToggleAccountMenu, &ctx());
        state
    }

    #[test]
    fn given_unread_notifications_when_opened_twice_then_counter_stays_at_zero()
    {
        let mut state = HeaderState::new(6);

        let effect = apply(&mut state, HeaderIntent::OpenNotifications, &ctx());
        assert_eq!(effect, Some(HeaderEffect::ShowNotifications { cleared: 6 }));
        assert_eq!(state.unread_count(), 0);

        let effect = apply(&mut state, HeaderIntent::OpenNotifications, &ctx());
        assert_eq!(effect, Some(HeaderEffect::ShowNotifications { cleared: 0 }));
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn given_closed_menu_when_toggled_then_detector_is_armed_with_open_region()
    {
        let state = open_state();

        assert!(state.is_account_menu_open());
        assert!(state.detector().is_armed());
        assert!(
            state
                .detector()
                .region()
                .contains(account_menu_bounds(WINDOW).center())
        );
    }

    #[test]
    fn given_open_menu_when_toggled_again_then_detector_is_disarmed() {
        let mut state = open_state();
        apply(&mut state, HeaderIntent::ToggleAccountMenu, &ctx());

        assert!(!state.is_account_menu_open());
        assert!(!state.detector().is_armed());
    }

    #[test]
    fn given_open_menu_when_pointer_down_outside_then_menu_closes_once() {
        let mut state = open_state();
        let outside = Point::new(10.0, 400.0);

        apply(
            &mut state,
            HeaderIntent::PointerDown { position: outside },
            &ctx(),
        );
        assert!(!state.is_account_menu_open());
        assert!(!state.detector().is_armed());

        apply(
            &mut state,
            HeaderIntent::PointerDown { position: outside },
            &ctx(),
        );
        assert!(!state.is_account_menu_open());
    }

    #[test]
    fn given_open_menu_when_pointer_down_inside_then_menu_stays_open() {
        let mut state = open_state();

        for position in [
            account_trigger_bounds(WINDOW).center(),
            account_menu_bounds(WINDOW).center(),
        ] {
            apply(&mut state, HeaderIntent::PointerDown { position }, &ctx());
        }

        assert!(state.is_account_menu_open());
        assert!(state.detector().is_armed());
    }

    #[test]
    fn given_open_menu_when_profile_chosen_then_menu_closes_and_profile_is_requested()
     {
        let mut state = open_state();

        let effect = apply(&mut state, HeaderIntent::ShowProfile, &ctx());

        assert_eq!(effect, Some(HeaderEffect::ShowProfile));
        assert!(!state.is_account_menu_open());
        assert!(!state.detector().is_armed());
    }

    #[test]
    fn given_open_menu_when_logout_chosen_then_menu_closes_and_logout_is_emitted()
    {
        let mut state = open_state();

        let effect = apply(&mut state, HeaderIntent::Logout, &ctx());

        assert_eq!(effect, Some(HeaderEffect::Logout));
        assert!(!state.is_account_menu_open());
    }

    #[test]
    fn given_search_text_when_changed_then_query_is_stored() {
        let mut state = HeaderState::new(0);

        apply(
            &mut state,
            HeaderIntent::SearchChanged(String::from("insulin")),
            &ctx(),
        );

        assert_eq!(state.search_query(), "insulin");
    }
}
