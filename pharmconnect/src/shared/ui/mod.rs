pub(crate) mod icons;
pub(crate) mod menu_style;
pub(crate) mod theme;
