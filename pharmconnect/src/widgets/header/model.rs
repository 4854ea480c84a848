use crate::settings::MerchantProfile;

/// Read-only view model for the header bar and account menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderViewModel<'a> {
    pub(crate) is_account_menu_open: bool,
    pub(crate) unread_count: u32,
    pub(crate) search_query: &'a str,
    pub(crate) profile: &'a MerchantProfile,
}

impl HeaderViewModel<'_> {
    /// Badge text for the bell, hidden when nothing is unread.
    pub(crate) fn unread_badge(&self) -> Option<String> {
        (self.unread_count > 0).then(|| self.unread_count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderViewModel;
    use crate::settings::MerchantProfile;

    fn vm(profile: &MerchantProfile, unread_count: u32) -> HeaderViewModel<'_> {
        HeaderViewModel {
            is_account_menu_open: false,
            unread_count,
            search_query: "",
            profile,
        }
    }

    #[test]
    fn given_zero_unread_when_badge_built_then_it_is_hidden() {
        let profile = MerchantProfile::default();
        assert_eq!(vm(&profile, 0).unread_badge(), None);
    }

    #[test]
    fn given_unread_notifications_when_badge_built_then_count_is_shown() {
        let profile = MerchantProfile::default();
        assert_eq!(vm(&profile, 6).unread_badge().as_deref(), Some("6"));
    }
}
