pub(crate) mod account_menu;
pub(crate) mod header_bar;
