use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Color, Element, Length, alignment};

use super::super::event::HeaderIntent;
use crate::layout::{
    ACCOUNT_MENU_ITEM_HEIGHT, ACCOUNT_MENU_SEPARATOR_HEIGHT,
    ACCOUNT_MENU_VERTICAL_PADDING, ACCOUNT_TRIGGER_WIDTH, account_menu_height,
};
use crate::shared::ui::icons;
use crate::shared::ui::menu_style::{menu_button_style, menu_panel_style};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const ITEM_ICON_SIZE: f32 = 16.0;
const ITEM_TEXT_SIZE: f32 = 14.0;
const ITEM_PADDING_X: f32 = 16.0;

/// Props for rendering the account dropdown.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AccountMenuProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the account dropdown panel with its profile and logout actions.
pub(crate) fn view(props: AccountMenuProps<'_>) -> Element<'_, HeaderIntent> {
    let palette = *props.theme.theme.iced_palette();
    let border = palette.border;

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(ACCOUNT_MENU_SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(border.into()),
            ..Default::default()
        });

    let content = column![
        menu_entry(
            icons::USER,
            "Profile",
            palette.foreground,
            palette,
            HeaderIntent::ShowProfile,
        ),
        separator,
        menu_entry(
            icons::LOG_OUT,
            "Logout",
            palette.danger,
            palette,
            HeaderIntent::Logout,
        ),
    ]
    .width(Length::Fill);

    container(content)
        .width(Length::Fixed(ACCOUNT_TRIGGER_WIDTH))
        .height(Length::Fixed(account_menu_height()))
        .padding([ACCOUNT_MENU_VERTICAL_PADDING, 0.0])
        .style(menu_panel_style(props.theme))
        .into()
}

fn menu_entry<'a>(
    icon: &'static [u8],
    label: &'static str,
    text_color: Color,
    palette: IcedColorPalette,
    on_press: HeaderIntent,
) -> Element<'a, HeaderIntent> {
    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(ITEM_ICON_SIZE))
        .height(Length::Fixed(ITEM_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(text_color),
        });

    let content = row![icon, text(label).size(ITEM_TEXT_SIZE)]
        .spacing(10.0)
        .align_y(alignment::Vertical::Center);

    button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .padding([0.0, ITEM_PADDING_X]),
    )
    .on_press(on_press)
    .padding(0.0)
    .width(Length::Fill)
    .height(Length::Fixed(ACCOUNT_MENU_ITEM_HEIGHT))
    .style(move |_, status| menu_button_style(&palette, status, text_color))
    .into()
}
