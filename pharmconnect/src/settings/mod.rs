mod errors;
mod model;
mod storage;

pub(crate) use errors::SettingsError;
pub(crate) use model::{DashboardSettings, MerchantProfile};
pub(crate) use storage::load_initial_settings;
