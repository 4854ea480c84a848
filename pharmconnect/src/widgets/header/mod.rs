mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{HeaderEffect, HeaderEvent, HeaderIntent};
use iced::Task;
pub(crate) use model::HeaderViewModel;
pub(crate) use reducer::HeaderCtx;
use state::HeaderState;
pub(crate) use state::ACCOUNT_MENU_DETECTOR;

use crate::outside_click::OutsideClickDetector;
use crate::settings::MerchantProfile;

/// Header widget: search box, notifications bell and account menu.
pub(crate) struct HeaderWidget {
    state: HeaderState,
}

impl HeaderWidget {
    pub(crate) fn new(unread_count: u32) -> Self {
        Self {
            state: HeaderState::new(unread_count),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: HeaderIntent,
        ctx: &HeaderCtx,
    ) -> Task<HeaderEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model. The identity record is owned by the
    /// app and passed in.
    pub(crate) fn vm<'a>(
        &'a self,
        profile: &'a MerchantProfile,
    ) -> HeaderViewModel<'a> {
        HeaderViewModel {
            is_account_menu_open: self.state.is_account_menu_open(),
            unread_count: self.state.unread_count(),
            search_query: self.state.search_query(),
            profile,
        }
    }

    pub(crate) fn is_account_menu_open(&self) -> bool {
        self.state.is_account_menu_open()
    }

    /// Outside-click detector guarding the account menu.
    pub(crate) fn account_menu_detector(&self) -> &OutsideClickDetector {
        self.state.detector()
    }
}
