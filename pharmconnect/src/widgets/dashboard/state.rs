use super::model::Period;

/// Private dashboard page state.
#[derive(Debug, Default)]
pub(crate) struct DashboardState {
    period: Period,
    product_query: String,
}

impl DashboardState {
    pub(crate) fn period(&self) -> Period {
        self.period
    }

    pub(crate) fn product_query(&self) -> &str {
        &self.product_query
    }

    pub(crate) fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub(crate) fn set_product_query(&mut self, query: String) {
        self.product_query = query;
    }
}
