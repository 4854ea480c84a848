use super::event::DashboardIntent;
use super::state::DashboardState;

/// Reduce a dashboard intent into state updates.
pub(crate) fn reduce(state: &mut DashboardState, intent: DashboardIntent) {
    match intent {
        DashboardIntent::SelectPeriod(period) => state.set_period(period),
        DashboardIntent::ProductQueryChanged(query) => {
            state.set_product_query(query)
        },
    }
}
