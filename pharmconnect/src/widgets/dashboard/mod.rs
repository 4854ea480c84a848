mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::DashboardIntent;
pub(crate) use model::DashboardViewModel;
use state::DashboardState;

/// Dashboard page: period selector, summary cards and product table.
pub(crate) struct DashboardWidget {
    state: DashboardState,
}

impl DashboardWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: DashboardState::default(),
        }
    }

    pub(crate) fn reduce(&mut self, intent: DashboardIntent) {
        reducer::reduce(&mut self.state, intent);
    }

    /// Build a read-only view model for the page.
    pub(crate) fn vm(&self) -> DashboardViewModel<'_> {
        DashboardViewModel {
            period: self.state.period(),
            stats: model::SUMMARY_STATS,
            products: model::filter_products(
                model::PRODUCTS,
                self.state.product_query(),
            ),
            product_query: self.state.product_query(),
        }
    }
}
