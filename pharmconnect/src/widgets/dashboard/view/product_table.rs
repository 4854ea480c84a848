use iced::widget::{Space, column, container, row, svg, text, text_input};
use iced::{Border, Element, Length, alignment};

use super::super::event::DashboardIntent;
use super::super::model::{
    ProductPerformance, format_change, format_currency,
};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const SECTION_TEXT_SIZE: f32 = 18.0;
const HEADER_TEXT_SIZE: f32 = 12.0;
const CELL_TEXT_SIZE: f32 = 14.0;
const TREND_ICON_SIZE: f32 = 16.0;
const SEARCH_ICON_SIZE: f32 = 16.0;
const SEARCH_WIDTH: f32 = 260.0;
const ROW_HEIGHT: f32 = 48.0;
const CELL_PADDING_X: f32 = 16.0;
const PANEL_PADDING: f32 = 24.0;

const COLUMNS: [(&str, u16); 6] = [
    ("PRODUCT NAME", 3),
    ("CATEGORY", 2),
    ("UNITS SOLD", 1),
    ("REVENUE", 1),
    ("IN STOCK", 1),
    ("TREND", 1),
];

/// Props for rendering the product performance table.
#[derive(Debug, Clone)]
pub(crate) struct ProductTableProps<'a> {
    pub(crate) products: Vec<&'static ProductPerformance>,
    pub(crate) query: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the searchable product performance table.
pub(crate) fn view(props: ProductTableProps<'_>) -> Element<'_, DashboardIntent> {
    let palette = *props.theme.theme.iced_palette();
    let muted = palette.muted;

    let search_icon = svg::Svg::new(svg::Handle::from_memory(icons::SEARCH))
        .width(Length::Fixed(SEARCH_ICON_SIZE))
        .height(Length::Fixed(SEARCH_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(muted) });
    let search = container(
        row![
            search_icon,
            text_input("Search products...", props.query)
                .on_input(DashboardIntent::ProductQueryChanged)
                .size(CELL_TEXT_SIZE)
                .padding(8.0)
                .width(Length::Fill),
        ]
        .spacing(4.0)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(SEARCH_WIDTH))
    .padding([0.0, 8.0])
    .style(move |_| container::Style {
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: 8.0.into(),
        },
        ..Default::default()
    });

    let title = row![
        text("Product Performance")
            .size(SECTION_TEXT_SIZE)
            .color(palette.foreground),
        Space::new().width(Length::Fill),
        search,
    ]
    .align_y(alignment::Vertical::Center);

    let mut table = column![header_row(palette)].width(Length::Fill);
    if props.products.is_empty() {
        table = table.push(
            container(
                text("No products match your search.")
                    .size(CELL_TEXT_SIZE)
                    .color(palette.muted),
            )
            .height(Length::Fixed(ROW_HEIGHT))
            .padding([0.0, CELL_PADDING_X])
            .align_y(alignment::Vertical::Center),
        );
    }
    for &product in &props.products {
        table = table.push(product_row(product, palette));
    }

    container(column![title, table].spacing(20.0))
        .width(Length::Fill)
        .padding(PANEL_PADDING)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                width: 1.0,
                color: palette.border,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn header_row<'a>(palette: IcedColorPalette) -> Element<'a, DashboardIntent> {
    let mut cells = row![].width(Length::Fill);
    for (label, portion) in COLUMNS {
        cells = cells.push(
            container(text(label).size(HEADER_TEXT_SIZE).color(palette.muted))
                .width(Length::FillPortion(portion))
                .padding([0.0, CELL_PADDING_X]),
        );
    }

    let background = palette.background;
    container(cells.align_y(alignment::Vertical::Center))
        .height(Length::Fixed(ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn product_row<'a>(
    product: &'static ProductPerformance,
    palette: IcedColorPalette,
) -> Element<'a, DashboardIntent> {
    let trend_color = if product.trend >= 0.0 {
        palette.success
    } else {
        palette.danger
    };
    let trend_icon = if product.trend >= 0.0 {
        icons::ARROW_UP
    } else {
        icons::ARROW_DOWN
    };

    let trend = row![
        svg::Svg::new(svg::Handle::from_memory(trend_icon))
            .width(Length::Fixed(TREND_ICON_SIZE))
            .height(Length::Fixed(TREND_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(trend_color),
            }),
        text(format_change(product.trend))
            .size(CELL_TEXT_SIZE)
            .color(trend_color),
    ]
    .spacing(4.0)
    .align_y(alignment::Vertical::Center);

    let cells: [Element<'a, DashboardIntent>; 6] = [
        text(product.name)
            .size(CELL_TEXT_SIZE)
            .color(palette.foreground)
            .into(),
        muted_cell(product.category.to_string(), palette),
        muted_cell(product.sold.to_string(), palette),
        muted_cell(format_currency(product.revenue), palette),
        muted_cell(product.in_stock.to_string(), palette),
        trend.into(),
    ];

    let mut content = row![].width(Length::Fill);
    for (cell, (_, portion)) in cells.into_iter().zip(COLUMNS) {
        content = content.push(
            container(cell)
                .width(Length::FillPortion(portion))
                .padding([0.0, CELL_PADDING_X]),
        );
    }

    let border = palette.border;
    container(content.align_y(alignment::Vertical::Center))
        .height(Length::Fixed(ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            border: Border {
                width: 0.5,
                color: border,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn muted_cell<'a>(
    value: String,
    palette: IcedColorPalette,
) -> Element<'a, DashboardIntent> {
    text(value).size(CELL_TEXT_SIZE).color(palette.muted).into()
}
