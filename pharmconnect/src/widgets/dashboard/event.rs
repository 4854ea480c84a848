use super::model::Period;

/// Intent events handled by the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DashboardIntent {
    SelectPeriod(Period),
    ProductQueryChanged(String),
}
