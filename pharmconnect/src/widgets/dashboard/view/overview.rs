use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Border, Color, Element, Length, alignment};

use super::super::event::DashboardIntent;
use super::super::model::{Period, StatCard, StatTone, format_change};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const TITLE_TEXT_SIZE: f32 = 24.0;
const SUBTITLE_TEXT_SIZE: f32 = 14.0;
const SECTION_TEXT_SIZE: f32 = 18.0;
const CARD_TITLE_SIZE: f32 = 13.0;
const CARD_VALUE_SIZE: f32 = 24.0;
const CARD_CHANGE_SIZE: f32 = 13.0;
const CARD_ICON_SIZE: f32 = 24.0;
const TREND_ICON_SIZE: f32 = 16.0;
const SPARK_WIDTH: f32 = 64.0;
const SPARK_HEIGHT: f32 = 40.0;
const CARD_PADDING: f32 = 20.0;
const CARD_RADIUS: f32 = 8.0;
const CARD_SPACING: f32 = 24.0;

/// Props for rendering the page heading and summary cards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverviewProps<'a> {
    pub(crate) period: Period,
    pub(crate) stats: &'static [StatCard],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the page heading, the period selector and the summary cards.
pub(crate) fn view(props: OverviewProps<'_>) -> Element<'_, DashboardIntent> {
    let palette = *props.theme.theme.iced_palette();

    let heading = column![
        text("Merchant Dashboard")
            .size(TITLE_TEXT_SIZE)
            .color(palette.foreground),
        text("Welcome back! Here's what's happening with your store.")
            .size(SUBTITLE_TEXT_SIZE)
            .color(palette.muted),
    ]
    .spacing(4.0);

    let header = row![
        heading,
        Space::new().width(Length::Fill),
        period_selector(props.period, palette),
    ]
    .align_y(alignment::Vertical::Center);

    let mut cards = row![].spacing(CARD_SPACING).width(Length::Fill);
    for stat in props.stats {
        cards = cards.push(stat_card(stat, props.period, palette));
    }

    column![
        header,
        text("Summary Analytics")
            .size(SECTION_TEXT_SIZE)
            .color(palette.foreground),
        cards,
    ]
    .spacing(CARD_SPACING)
    .width(Length::Fill)
    .into()
}

fn period_selector<'a>(
    selected: Period,
    palette: IcedColorPalette,
) -> Element<'a, DashboardIntent> {
    let mut options = row![].spacing(4.0);
    for period in Period::ALL {
        let is_selected = period == selected;
        let color = if is_selected {
            palette.accent
        } else {
            palette.muted
        };

        options = options.push(
            button(text(period.title()).size(SUBTITLE_TEXT_SIZE).color(color))
                .on_press(DashboardIntent::SelectPeriod(period))
                .padding([4.0, 12.0])
                .style(move |_, _| button::Style {
                    background: is_selected
                        .then(|| palette.accent_soft.into()),
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }),
        );
    }

    container(options)
        .padding(4.0)
        .style(move |_| card_style(palette))
        .into()
}

fn stat_card<'a>(
    stat: &'static StatCard,
    period: Period,
    palette: IcedColorPalette,
) -> Element<'a, DashboardIntent> {
    let tone = tone_color(stat.tone, palette);
    let trend_color = if stat.is_positive() {
        palette.success
    } else {
        palette.danger
    };
    let trend_icon = if stat.is_positive() {
        icons::ARROW_UP
    } else {
        icons::ARROW_DOWN
    };

    let title_row = row![
        text(stat.title).size(CARD_TITLE_SIZE).color(palette.muted),
        Space::new().width(Length::Fill),
        icon(stat.icon, CARD_ICON_SIZE, CARD_ICON_SIZE, tone),
    ]
    .align_y(alignment::Vertical::Center);

    let change = row![
        icon(trend_icon, TREND_ICON_SIZE, TREND_ICON_SIZE, trend_color),
        text(format!("{} {}", format_change(stat.change), period.noun()))
            .size(CARD_CHANGE_SIZE)
            .color(trend_color),
    ]
    .spacing(4.0)
    .align_y(alignment::Vertical::Center);

    let value_row = row![
        column![
            text(stat.value)
                .size(CARD_VALUE_SIZE)
                .color(palette.foreground),
            change,
        ]
        .spacing(8.0),
        Space::new().width(Length::Fill),
        icon(icons::BAR_CHART, SPARK_WIDTH, SPARK_HEIGHT, palette.subtle),
    ]
    .align_y(alignment::Vertical::Bottom);

    container(column![title_row, value_row].spacing(16.0))
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(move |_| card_style(palette))
        .into()
}

fn icon<'a>(
    data: &'static [u8],
    width: f32,
    height: f32,
    color: Color,
) -> Element<'a, DashboardIntent> {
    svg::Svg::new(svg::Handle::from_memory(data))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}

fn tone_color(tone: StatTone, palette: IcedColorPalette) -> Color {
    match tone {
        StatTone::Success => palette.success,
        StatTone::Accent => palette.accent,
        StatTone::Highlight => palette.highlight,
        StatTone::Warning => palette.warning,
    }
}

fn card_style(palette: IcedColorPalette) -> container::Style {
    container::Style {
        background: Some(palette.surface.into()),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}
