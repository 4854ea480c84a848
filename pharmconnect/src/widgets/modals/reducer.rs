use super::event::ModalsIntent;
use super::state::{ModalPanel, ModalsState};

/// Reduce a modal intent into state updates.
pub(crate) fn reduce(state: &mut ModalsState, intent: ModalsIntent) {
    match intent {
        ModalsIntent::ShowNotifications { cleared } => {
            state.show(ModalPanel::Notifications { cleared });
        },
        ModalsIntent::ShowProfile => state.show(ModalPanel::Profile),
        ModalsIntent::Dismiss => state.dismiss(),
    }
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::widgets::modals::ModalsIntent;
    use crate::widgets::modals::state::{ModalPanel, ModalsState};

    #[test]
    fn given_no_modal_when_profile_requested_then_profile_is_shown() {
        let mut state = ModalsState::default();
        reduce(&mut state, ModalsIntent::ShowProfile);
        assert_eq!(state.active(), Some(ModalPanel::Profile));
    }

    #[test]
    fn given_profile_shown_when_notifications_requested_then_they_replace_it() {
        let mut state = ModalsState::default();
        reduce(&mut state, ModalsIntent::ShowProfile);
        reduce(&mut state, ModalsIntent::ShowNotifications { cleared: 6 });

        assert_eq!(
            state.active(),
            Some(ModalPanel::Notifications { cleared: 6 })
        );
    }

    #[test]
    fn given_visible_modal_when_dismissed_then_nothing_is_shown() {
        let mut state = ModalsState::default();
        reduce(&mut state, ModalsIntent::ShowProfile);
        reduce(&mut state, ModalsIntent::Dismiss);

        assert_eq!(state.active(), None);
    }

    #[test]
    fn given_notifications_shown_when_requested_again_then_they_stay_visible() {
        let mut state = ModalsState::default();
        reduce(&mut state, ModalsIntent::ShowNotifications { cleared: 6 });
        reduce(&mut state, ModalsIntent::ShowNotifications { cleared: 0 });

        assert_eq!(
            state.active(),
            Some(ModalPanel::Notifications { cleared: 0 })
        );
    }

    #[test]
    fn given_no_modal_when_dismissed_then_nothing_is_shown() {
        let mut state = ModalsState::default();
        reduce(&mut state, ModalsIntent::Dismiss);
        assert_eq!(state.active(), None);
    }

    #[test]
    fn given_dismissed_notifications_when_profile_requested_then_only_profile_shows()
     {
        let mut state = ModalsState::default();
        reduce(&mut state, ModalsIntent::ShowNotifications { cleared: 6 });
        reduce(&mut state, ModalsIntent::Dismiss);
        assert_eq!(state.active(), None);

        reduce(&mut state, ModalsIntent::ShowProfile);
        assert_eq!(state.active(), Some(ModalPanel::Profile));
    }
}
