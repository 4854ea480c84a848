pub(crate) mod dashboard;
pub(crate) mod header;
pub(crate) mod modals;
pub(crate) mod side_nav;

use crate::outside_click::OutsideClickDetector;
use crate::settings::DashboardSettings;

pub(crate) struct Widgets {
    pub(crate) side_nav: side_nav::SideNavWidget,
    pub(crate) header: header::HeaderWidget,
    pub(crate) modals: modals::ModalsWidget,
    pub(crate) dashboard: dashboard::DashboardWidget,
}

impl Widgets {
    pub(crate) fn new(settings: &DashboardSettings) -> Self {
        Self {
            side_nav: side_nav::SideNavWidget::new(),
            header: header::HeaderWidget::new(settings.unread_notifications),
            modals: modals::ModalsWidget::new(),
            dashboard: dashboard::DashboardWidget::new(),
        }
    }

    /// Every outside-click detector owned by a widget, armed or not.
    pub(crate) fn detectors(&self) -> [&OutsideClickDetector; 1] {
        [self.header.account_menu_detector()]
    }
}
