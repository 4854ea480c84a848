pub(crate) mod menu_rail;
