use iced::widget::{
    Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Border, Color, Element, Length, alignment};

use super::super::event::SideNavIntent;
use super::super::menu::{MenuItem, SubMenuItem};
use super::super::model::SideNavViewModel;
use crate::layout::{HEADER_HEIGHT, shell_insets};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const ITEM_HEIGHT: f32 = 44.0;
const SUB_ITEM_HEIGHT: f32 = 36.0;
const ITEM_ICON_SIZE: f32 = 20.0;
const SUB_ITEM_ICON_SIZE: f32 = 16.0;
const CHEVRON_SIZE: f32 = 16.0;
const LOGO_SIZE: f32 = 28.0;
const ITEM_TEXT_SIZE: f32 = 14.0;
const SUB_ITEM_TEXT_SIZE: f32 = 13.0;
const BRAND_TEXT_SIZE: f32 = 20.0;
const FOOTER_TEXT_SIZE: f32 = 12.0;
const RAIL_PADDING: f32 = 12.0;
const ITEM_SPACING: f32 = 12.0;
const SUB_ITEM_INDENT: f32 = 32.0;
const ITEM_RADIUS: f32 = 6.0;
const TOGGLE_BUTTON_SIZE: f32 = 32.0;

/// Props for rendering the navigation rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuRailProps<'a> {
    pub(crate) vm: SideNavViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the collapsible navigation rail with its submenus.
pub(crate) fn view(props: MenuRailProps<'_>) -> Element<'_, SideNavIntent> {
    let palette = *props.theme.theme.iced_palette();
    let minimized = props.vm.is_minimized();
    let width = shell_insets(props.vm.layout_mode).menu_width;

    let mut entries = column![].spacing(4.0).width(Length::Fill);
    for item in props.vm.items {
        entries = entries.push(menu_entry(item, &props.vm, palette));
        if props.vm.is_submenu_visible(item) {
            for sub_item in item.sub_items {
                entries = entries.push(sub_menu_entry(
                    sub_item,
                    props.vm.is_sub_item_active(sub_item),
                    palette,
                ));
            }
        }
    }

    let entries = scrollable::Scrollable::with_direction(
        container(entries).padding([8.0, RAIL_PADDING]),
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut content = column![brand(minimized, palette), entries]
        .width(Length::Fill)
        .height(Length::Fill);

    if !minimized {
        content = content.push(
            container(
                text("© 2025 PharmConnect")
                    .size(FOOTER_TEXT_SIZE)
                    .color(palette.muted),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(RAIL_PADDING),
        );
    }

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
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

fn brand<'a>(
    minimized: bool,
    palette: IcedColorPalette,
) -> Element<'a, SideNavIntent> {
    let accent = palette.accent;
    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_MARK))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(accent),
        });

    let toggle_icon = if minimized {
        icons::MENU_EXPAND
    } else {
        icons::MENU_COLLAPSE
    };
    let toggle = button(
        container(icon(toggle_icon, CHEVRON_SIZE, palette.muted))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(SideNavIntent::ToggleMinimize)
    .padding(0)
    .width(Length::Fixed(TOGGLE_BUTTON_SIZE))
    .height(Length::Fixed(TOGGLE_BUTTON_SIZE))
    .style(move |_, status| item_button_style(palette, status, false));

    let content: Element<'a, SideNavIntent> = if minimized {
        column![logo, toggle]
            .spacing(4.0)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        row![
            logo,
            text("PharmConnect")
                .size(BRAND_TEXT_SIZE)
                .color(palette.accent),
            Space::new().width(Length::Fill),
            toggle,
        ]
        .spacing(ITEM_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, RAIL_PADDING])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn menu_entry<'a>(
    item: &'static MenuItem,
    vm: &SideNavViewModel<'_>,
    palette: IcedColorPalette,
) -> Element<'a, SideNavIntent> {
    let is_active = vm.is_item_active(item);
    let color = if is_active {
        palette.accent
    } else {
        palette.foreground
    };

    let mut content = row![icon(item.icon, ITEM_ICON_SIZE, color)]
        .spacing(ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    if !vm.is_minimized() {
        content = content.push(
            text(item.label)
                .size(ITEM_TEXT_SIZE)
                .color(color)
                .width(Length::Fill),
        );
        if item.has_sub_items() {
            let chevron = if vm.is_expanded(item) {
                icons::CHEVRON_UP
            } else {
                icons::CHEVRON_DOWN
            };
            content = content.push(icon(chevron, CHEVRON_SIZE, palette.muted));
        }
    }

    let content = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(if vm.is_minimized() {
            alignment::Horizontal::Center
        } else {
            alignment::Horizontal::Left
        })
        .align_y(alignment::Vertical::Center)
        .padding([0.0, 10.0]);

    button(content)
        .on_press(SideNavIntent::SelectItem(item))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(ITEM_HEIGHT))
        .style(move |_, status| item_button_style(palette, status, is_active))
        .into()
}

fn sub_menu_entry<'a>(
    sub_item: &'static SubMenuItem,
    is_active: bool,
    palette: IcedColorPalette,
) -> Element<'a, SideNavIntent> {
    let color = if is_active {
        palette.accent
    } else {
        palette.muted
    };

    let content = row![
        icon(sub_item.icon, SUB_ITEM_ICON_SIZE, color),
        text(sub_item.label).size(SUB_ITEM_TEXT_SIZE).color(color),
    ]
    .spacing(ITEM_SPACING)
    .align_y(alignment::Vertical::Center);

    let content = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding(iced::Padding {
            left: SUB_ITEM_INDENT,
            ..iced::Padding::ZERO
        });

    button(content)
        .on_press(SideNavIntent::SelectSubItem(sub_item))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(SUB_ITEM_HEIGHT))
        .style(move |_, status| item_button_style(palette, status, is_active))
        .into()
}

fn icon<'a>(
    data: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, SideNavIntent> {
    svg::Svg::new(svg::Handle::from_memory(data))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}

fn item_button_style(
    palette: IcedColorPalette,
    status: button::Status,
    is_active: bool,
) -> button::Style {
    let background = if is_active {
        Some(palette.accent_soft.into())
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(palette.background.into())
            },
            _ => None,
        }
    };

    button::Style {
        background,
        border: Border {
            radius: ITEM_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
