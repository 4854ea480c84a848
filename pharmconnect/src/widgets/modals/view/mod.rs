pub(crate) mod notifications_panel;
pub(crate) mod profile_panel;
