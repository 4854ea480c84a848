use iced::Rectangle;

use crate::disclosure::Disclosure;
use crate::outside_click::{DetectorId, OutsideClickDetector};

/// Identity of the account menu's outside-click listener.
pub(crate) const ACCOUNT_MENU_DETECTOR: DetectorId =
    DetectorId::new("header-account-menu");

/// Private header state.
#[derive(Debug)]
pub(crate) struct HeaderState {
    account_menu: Disclosure,
    detector: OutsideClickDetector,
    unread_count: u32,
    search_query: String,
}

impl HeaderState {
    pub(crate) fn new(unread_count: u32) -> Self {
        Self {
            account_menu: Disclosure::default(),
            detector: OutsideClickDetector::new(ACCOUNT_MENU_DETECTOR),
            unread_count,
            search_query: String::new(),
        }
    }

    pub(crate) fn is_account_menu_open(&self) -> bool {
        self.account_menu.is_open()
    }

    pub(crate) fn detector(&self) -> &OutsideClickDetector {
        &self.detector
    }

    pub(crate) fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub(crate) fn search_query(&self) -> &str {
        &self.search_query
    }

    pub(crate) fn toggle_account_menu(&mut self, region: Rectangle) {
        if self.account_menu.toggle() {
            self.detector.bind(region);
            self.detector.arm();
        } else {
            self.detector.disarm();
        }
    }

    /// Close the account menu. Returns `true` when it was open.
    pub(crate) fn close_account_menu(&mut self) -> bool {
        self.detector.disarm();
        self.account_menu.close()
    }

    /// Rebind the detector to the current region and report whether a
    /// pointer-down at `position` lands outside it.
    pub(crate) fn is_outside_account_menu(
        &mut self,
        region: Rectangle,
        position: iced::Point,
    ) -> bool {
        self.detector.bind(region);
        self.detector.is_outside(position)
    }

    /// Reset the unread counter and return the previous value.
    pub(crate) fn clear_unread(&mut self) -> u32 {
        std::mem::take(&mut self.unread_count)
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }
}
