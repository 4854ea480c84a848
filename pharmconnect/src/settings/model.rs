use serde::{Deserialize, Serialize};

use super::errors::SettingsError;
use crate::router::DEFAULT_LANDING_ROUTE;

const DEFAULT_UNREAD_NOTIFICATIONS: u32 = 6;
const DEFAULT_ACCENT_COLOR: &str = "#2563EB";

/// Startup settings read from `settings.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DashboardSettings {
    pub(crate) landing_route: String,
    pub(crate) unread_notifications: u32,
    pub(crate) accent_color: String,
    pub(crate) profile: MerchantProfile,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            landing_route: String::from(DEFAULT_LANDING_ROUTE),
            unread_notifications: DEFAULT_UNREAD_NOTIFICATIONS,
            accent_color: String::from(DEFAULT_ACCENT_COLOR),
            profile: MerchantProfile::default(),
        }
    }
}

impl DashboardSettings {
    /// Check field values that serde alone cannot enforce.
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        if !self.landing_route.starts_with('/') {
            return Err(SettingsError::Validation {
                message: format!(
                    "landing_route must start with '/', got {:?}",
                    self.landing_route
                ),
            });
        }

        if self.accent_color.parse::<iced::Color>().is_err() {
            return Err(SettingsError::Validation {
                message: format!(
                    "accent_color is not a hex color: {:?}",
                    self.accent_color
                ),
            });
        }

        Ok(())
    }
}

/// Read-only identity record shown in the header and profile panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct MerchantProfile {
    pub(crate) name: String,
    pub(crate) specialty: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) location: String,
    pub(crate) education: String,
    pub(crate) stats: ProfileStats,
}

impl Default for MerchantProfile {
    fn default() -> Self {
        Self {
            name: String::from("Dr. Galanda Wafula Hassan"),
            specialty: String::from("Cardiologist"),
            email: String::from("dr.galanda@medicenter.com"),
            phone: String::from("+254 712 345 678"),
            location: String::from("Nairobi Medical Center"),
            education: String::from(
                "MD, University of Nairobi • Cardiology Fellowship, Kenyatta Hospital",
            ),
            stats: ProfileStats::default(),
        }
    }
}

impl MerchantProfile {
    /// Up to two uppercase initials, skipping honorifics ending in `.`.
    pub(crate) fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|part| !part.ends_with('.'))
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ProfileStats {
    pub(crate) patients: u32,
    pub(crate) years_experience: u32,
    pub(crate) certifications: u32,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            patients: 1250,
            years_experience: 13,
            certifications: 5,
        }
    }
}
