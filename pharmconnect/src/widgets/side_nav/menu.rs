use crate::shared::ui::icons;

/// Top-level navigation entry.
///
/// An entry with sub items is a submenu parent and never navigates, even
/// when it also carries a path. An entry with neither is inert.
#[derive(Debug)]
pub(crate) struct MenuItem {
    pub(crate) icon: &'static [u8],
    pub(crate) label: &'static str,
    pub(crate) path: Option<&'static str>,
    pub(crate) sub_items: &'static [SubMenuItem],
}

impl MenuItem {
    pub(crate) fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// Leaf entry inside a submenu.
#[derive(Debug)]
pub(crate) struct SubMenuItem {
    pub(crate) icon: &'static [u8],
    pub(crate) label: &'static str,
    pub(crate) path: &'static str,
}

const fn leaf(
    icon: &'static [u8],
    label: &'static str,
    path: &'static str,
) -> MenuItem {
    MenuItem {
        icon,
        label,
        path: Some(path),
        sub_items: &[],
    }
}

const fn parent(
    icon: &'static [u8],
    label: &'static str,
    sub_items: &'static [SubMenuItem],
) -> MenuItem {
    MenuItem {
        icon,
        label,
        path: None,
        sub_items,
    }
}

const fn sub(
    icon: &'static [u8],
    label: &'static str,
    path: &'static str,
) -> SubMenuItem {
    SubMenuItem { icon, label, path }
}

const PRODUCT_ITEMS: &[SubMenuItem] = &[
    sub(icons::CLIPBOARD_LIST, "Inventory Listing", "/products/inventory"),
    sub(icons::FILE_TEXT, "Add/Edit Products", "/products/manage"),
    sub(icons::STORE, "Categories", "/products/categories"),
    sub(icons::PILL, "Prescription Medicines", "/products/prescription"),
    sub(icons::STORE, "OTC Items", "/products/otc"),
];

const ORDER_ITEMS: &[SubMenuItem] = &[
    sub(icons::BELL, "New Orders", "/orders/new"),
    sub(icons::CLIPBOARD_LIST, "Processing Orders", "/orders/processing"),
    sub(icons::FILE_TEXT, "Completed Orders", "/orders/completed"),
    sub(icons::STORE, "Canceled/Returned", "/orders/canceled"),
    sub(icons::PILL, "Prescription Verification", "/orders/verification"),
];

const DELIVERY_ITEMS: &[SubMenuItem] = &[
    sub(icons::TRUCK, "Track Deliveries", "/delivery/track"),
    sub(icons::USERS, "Delivery Personnel", "/delivery/personnel"),
    sub(icons::MAP, "Delivery Zones", "/delivery/zones"),
    sub(icons::PACKAGE, "Special Handling", "/delivery/special"),
];

const CUSTOMER_ITEMS: &[SubMenuItem] = &[
    sub(icons::USERS, "Customer Database", "/customers/database"),
    sub(icons::FILE_TEXT, "Patient Profiles", "/customers/profiles"),
    sub(
        icons::CLIPBOARD_LIST,
        "Prescription History",
        "/customers/prescriptions",
    ),
    sub(
        icons::MESSAGE_SQUARE,
        "Communication Tools",
        "/customers/communication",
    ),
];

const PHARMACY_ITEMS: &[SubMenuItem] = &[
    sub(
        icons::CLIPBOARD_LIST,
        "Prescription Validation",
        "/pharmacy/validation",
    ),
    sub(
        icons::FILE_TEXT,
        "Drug Interaction Checker",
        "/pharmacy/interactions",
    ),
    sub(icons::STORE, "Regulatory Compliance", "/pharmacy/compliance"),
    sub(icons::BELL, "Expiration Tracking", "/pharmacy/expiration"),
];

const SETTINGS_ITEMS: &[SubMenuItem] = &[
    sub(icons::USERS, "Account Settings", "/settings/account"),
    sub(icons::STORE, "Store Information", "/settings/store"),
    sub(icons::CREDIT_CARD, "Payment Methods", "/settings/payment"),
    sub(icons::BELL, "Notifications", "/settings/notifications"),
    sub(icons::SETTINGS, "Platform Integration", "/settings/integration"),
];

/// Ordered navigation menu of the merchant dashboard.
pub(crate) static MENU_ITEMS: &[MenuItem] = &[
    leaf(icons::LAYOUT_GRID, "Dashboard", "/dashboard"),
    parent(icons::PACKAGE, "Product Management", PRODUCT_ITEMS),
    parent(icons::SHOPPING_CART, "Order Management", ORDER_ITEMS),
    parent(icons::TRUCK, "Delivery Management", DELIVERY_ITEMS),
    parent(icons::USERS, "Customer Management", CUSTOMER_ITEMS),
    parent(icons::PILL, "Pharmacy", PHARMACY_ITEMS),
    leaf(icons::LINE_CHART, "Analytics", "/analytics"),
    parent(icons::SETTINGS, "Settings", SETTINGS_ITEMS),
];
