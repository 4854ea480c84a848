use crate::shared::ui::icons;

/// Comparison window for the summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Period {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    pub(crate) const ALL: [Period; 4] =
        [Period::Day, Period::Week, Period::Month, Period::Year];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }

    pub(crate) fn noun(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

/// Palette slot used to tint a stat card icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatTone {
    Success,
    Accent,
    Highlight,
    Warning,
}

#[derive(Debug)]
pub(crate) struct StatCard {
    pub(crate) title: &'static str,
    pub(crate) value: &'static str,
    pub(crate) change: f32,
    pub(crate) icon: &'static [u8],
    pub(crate) tone: StatTone,
}

impl StatCard {
    pub(crate) fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct ProductPerformance {
    pub(crate) id: u32,
    pub(crate) name: &'static str,
    pub(crate) category: &'static str,
    pub(crate) sold: u32,
    pub(crate) revenue: u32,
    pub(crate) in_stock: u32,
    pub(crate) trend: f32,
}

pub(crate) static SUMMARY_STATS: &[StatCard] = &[
    StatCard {
        title: "Total Revenue",
        value: "$12,458",
        change: 12.5,
        icon: icons::DOLLAR_SIGN,
        tone: StatTone::Success,
    },
    StatCard {
        title: "Total Orders",
        value: "256",
        change: 8.2,
        icon: icons::SHOPPING_CART,
        tone: StatTone::Accent,
    },
    StatCard {
        title: "Products Sold",
        value: "1,247",
        change: 3.1,
        icon: icons::PACKAGE,
        tone: StatTone::Highlight,
    },
    StatCard {
        title: "New Customers",
        value: "24",
        change: -2.4,
        icon: icons::USERS,
        tone: StatTone::Warning,
    },
];

pub(crate) static PRODUCTS: &[ProductPerformance] = &[
    ProductPerformance {
        id: 1,
        name: "Paracetamol 500mg",
        category: "OTC Pain Relief",
        sold: 245,
        revenue: 1225,
        in_stock: 780,
        trend: 8.2,
    },
    ProductPerformance {
        id: 2,
        name: "Blood Pressure Monitor",
        category: "Medical Devices",
        sold: 32,
        revenue: 3840,
        in_stock: 15,
        trend: 12.5,
    },
    ProductPerformance {
        id: 3,
        name: "Vitamin C 1000mg",
        category: "Supplements",
        sold: 187,
        revenue: 1870,
        in_stock: 340,
        trend: -2.8,
    },
    ProductPerformance {
        id: 4,
        name: "Insulin Pen",
        category: "Prescription",
        sold: 56,
        revenue: 2240,
        in_stock: 42,
        trend: 4.7,
    },
    ProductPerformance {
        id: 5,
        name: "N95 Face Mask (10 pack)",
        category: "PPE",
        sold: 124,
        revenue: 1240,
        in_stock: 250,
        trend: -6.3,
    },
];

/// Read-only view model for the dashboard page.
#[derive(Debug, Clone)]
pub(crate) struct DashboardViewModel<'a> {
    pub(crate) period: Period,
    pub(crate) stats: &'static [StatCard],
    pub(crate) products: Vec<&'static ProductPerformance>,
    pub(crate) product_query: &'a str,
}

/// Keep products whose name or category contains `query`, ignoring case.
/// A blank query keeps everything.
pub(crate) fn filter_products(
    products: &'static [ProductPerformance],
    query: &str,
) -> Vec<&'static ProductPerformance> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|product| {
            needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Format whole dollars with thousands separators, e.g. `$12,458`.
pub(crate) fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

/// Absolute percentage with one decimal, e.g. `2.4%`.
pub(crate) fn format_change(change: f32) -> String {
    format!("{:.1}%", change.abs())
}
