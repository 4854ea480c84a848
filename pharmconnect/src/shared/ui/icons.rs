pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../../assets/logo/logo-small.png");
pub(crate) const LOGO_MARK: &[u8] =
    include_bytes!("../../../assets/svg/stethoscope.svg");

// Navigation
pub(crate) const LAYOUT_GRID: &[u8] =
    include_bytes!("../../../assets/svg/layout-grid.svg");
pub(crate) const PACKAGE: &[u8] =
    include_bytes!("../../../assets/svg/package.svg");
pub(crate) const SHOPPING_CART: &[u8] =
    include_bytes!("../../../assets/svg/shopping-cart.svg");
pub(crate) const TRUCK: &[u8] = include_bytes!("../../../assets/svg/truck.svg");
pub(crate) const USERS: &[u8] = include_bytes!("../../../assets/svg/users.svg");
pub(crate) const PILL: &[u8] = include_bytes!("../../../assets/svg/pill.svg");
pub(crate) const LINE_CHART: &[u8] =
    include_bytes!("../../../assets/svg/line-chart.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../../assets/svg/settings.svg");
pub(crate) const CLIPBOARD_LIST: &[u8] =
    include_bytes!("../../../assets/svg/clipboard-list.svg");
pub(crate) const FILE_TEXT: &[u8] =
    include_bytes!("../../../assets/svg/file-text.svg");
pub(crate) const STORE: &[u8] = include_bytes!("../../../assets/svg/store.svg");
pub(crate) const BELL: &[u8] = include_bytes!("../../../assets/svg/bell.svg");
pub(crate) const MAP: &[u8] = include_bytes!("../../../assets/svg/map.svg");
pub(crate) const MESSAGE_SQUARE: &[u8] =
    include_bytes!("../../../assets/svg/message-square.svg");
pub(crate) const CREDIT_CARD: &[u8] =
    include_bytes!("../../../assets/svg/credit-card.svg");
pub(crate) const MENU_COLLAPSE: &[u8] =
    include_bytes!("../../../assets/svg/chevrons-left.svg");
pub(crate) const MENU_EXPAND: &[u8] =
    include_bytes!("../../../assets/svg/chevrons-right.svg");

// Header
pub(crate) const SEARCH: &[u8] =
    include_bytes!("../../../assets/svg/search.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../assets/svg/chevron-down.svg");
pub(crate) const CHEVRON_UP: &[u8] =
    include_bytes!("../../../assets/svg/chevron-up.svg");
pub(crate) const USER: &[u8] = include_bytes!("../../../assets/svg/user.svg");
pub(crate) const LOG_OUT: &[u8] =
    include_bytes!("../../../assets/svg/log-out.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../../../assets/svg/x.svg");

// Dashboard
pub(crate) const ARROW_UP: &[u8] =
    include_bytes!("../../../assets/svg/arrow-up.svg");
pub(crate) const ARROW_DOWN: &[u8] =
    include_bytes!("../../../assets/svg/arrow-down.svg");
pub(crate) const DOLLAR_SIGN: &[u8] =
    include_bytes!("../../../assets/svg/dollar-sign.svg");
pub(crate) const BAR_CHART: &[u8] =
    include_bytes!("../../../assets/svg/bar-chart.svg");
