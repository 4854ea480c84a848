use iced::widget::{
    Space, Stack, button, column, container, row, svg, text, text_input,
};
use iced::{Border, Color, Element, Length, alignment};

use super::super::event::HeaderIntent;
use super::super::model::HeaderViewModel;
use crate::layout::{
    ACCOUNT_TRIGGER_HEIGHT, ACCOUNT_TRIGGER_WIDTH, HEADER_BELL_SIZE,
    HEADER_CONTROL_SPACING, HEADER_HEIGHT, HEADER_PADDING_X,
    HEADER_SEARCH_WIDTH,
};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const SEARCH_ICON_SIZE: f32 = 16.0;
const BELL_ICON_SIZE: f32 = 20.0;
const BADGE_SIZE: f32 = 18.0;
const BADGE_TEXT_SIZE: f32 = 10.0;
const AVATAR_SIZE: f32 = 36.0;
const NAME_TEXT_SIZE: f32 = 14.0;
const DETAIL_TEXT_SIZE: f32 = 12.0;
const CHEVRON_SIZE: f32 = 16.0;
const CONTROL_RADIUS: f32 = 8.0;

/// Props for rendering the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderBarProps<'a> {
    pub(crate) vm: HeaderViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the fixed header: search box, notifications bell and the account
/// trigger.
pub(crate) fn view(props: HeaderBarProps<'_>) -> Element<'_, HeaderIntent> {
    let palette = *props.theme.theme.iced_palette();

    let content = row![
        search_box(props.vm.search_query, palette),
        Space::new().width(Length::Fill),
        bell(&props.vm, palette),
        account_trigger(&props.vm, palette),
    ]
    .spacing(HEADER_CONTROL_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                width: 1.0,
                color: palette.border,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn search_box<'a>(
    query: &'a str,
    palette: IcedColorPalette,
) -> Element<'a, HeaderIntent> {
    let input = text_input("Search sales, records, products...", query)
        .on_input(HeaderIntent::SearchChanged)
        .size(14.0)
        .padding(8.0)
        .width(Length::Fill);

    container(
        row![icon(icons::SEARCH, SEARCH_ICON_SIZE, palette.muted), input]
            .spacing(4.0)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(HEADER_SEARCH_WIDTH))
    .padding([0.0, 8.0])
    .style(move |_| container::Style {
        background: Some(palette.background.into()),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: CONTROL_RADIUS.into(),
        },
        ..Default::default()
    })
    .into()
}

fn bell<'a>(
    vm: &HeaderViewModel<'_>,
    palette: IcedColorPalette,
) -> Element<'a, HeaderIntent> {
    let bell_button = button(
        container(icon(icons::BELL, BELL_ICON_SIZE, palette.foreground))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(HeaderIntent::OpenNotifications)
    .padding(0)
    .width(Length::Fixed(HEADER_BELL_SIZE))
    .height(Length::Fixed(HEADER_BELL_SIZE))
    .style(move |_, status| control_style(palette, status));

    let Some(badge_text) = vm.unread_badge() else {
        return bell_button.into();
    };

    let danger = palette.danger;
    let badge = container(
        text(badge_text).size(BADGE_TEXT_SIZE).color(Color::WHITE),
    )
    .width(Length::Fixed(BADGE_SIZE))
    .height(Length::Fixed(BADGE_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(danger.into()),
        border: Border {
            radius: (BADGE_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    });

    let badge_layer = container(badge)
        .width(Length::Fixed(HEADER_BELL_SIZE))
        .height(Length::Fixed(HEADER_BELL_SIZE))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    Stack::with_children(vec![bell_button.into(), badge_layer.into()])
        .width(Length::Fixed(HEADER_BELL_SIZE))
        .height(Length::Fixed(HEADER_BELL_SIZE))
        .into()
}

fn account_trigger<'a>(
    vm: &HeaderViewModel<'a>,
    palette: IcedColorPalette,
) -> Element<'a, HeaderIntent> {
    let accent = palette.accent;
    let avatar = container(
        text(vm.profile.initials())
            .size(NAME_TEXT_SIZE)
            .color(Color::WHITE),
    )
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(accent.into()),
        border: Border {
            radius: (AVATAR_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    });

    let identity = column![
        text(vm.profile.name.as_str())
            .size(NAME_TEXT_SIZE)
            .color(palette.foreground),
        text(vm.profile.specialty.as_str())
            .size(DETAIL_TEXT_SIZE)
            .color(palette.muted),
    ]
    .width(Length::Fill);

    let chevron = if vm.is_account_menu_open {
        icons::CHEVRON_UP
    } else {
        icons::CHEVRON_DOWN
    };

    let content = row![
        avatar,
        identity,
        icon(chevron, CHEVRON_SIZE, palette.muted)
    ]
    .spacing(8.0)
    .align_y(alignment::Vertical::Center);

    button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .padding([0.0, 6.0]),
    )
    .on_press(HeaderIntent::ToggleAccountMenu)
    .padding(0)
    .width(Length::Fixed(ACCOUNT_TRIGGER_WIDTH))
    .height(Length::Fixed(ACCOUNT_TRIGGER_HEIGHT))
    .style(move |_, status| control_style(palette, status))
    .into()
}

fn icon<'a>(
    data: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, HeaderIntent> {
    svg::Svg::new(svg::Handle::from_memory(data))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}

fn control_style(
    palette: IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.into())
        },
        _ => None,
    };

    button::Style {
        background,
        border: Border {
            radius: CONTROL_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
