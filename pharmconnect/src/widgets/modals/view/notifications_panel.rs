use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Element, Length, alignment};

use super::super::event::ModalsIntent;
use crate::shared::ui::icons;
use crate::shared::ui::menu_style::menu_panel_style;
use crate::shared::ui::theme::ThemeProps;

const PANEL_WIDTH: f32 = 380.0;
const PANEL_PADDING: f32 = 20.0;
const TITLE_TEXT_SIZE: f32 = 18.0;
const BODY_TEXT_SIZE: f32 = 14.0;
const CLOSE_ICON_SIZE: f32 = 18.0;

/// Props for rendering the notifications panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotificationsPanelProps<'a> {
    pub(crate) cleared: u32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the notifications panel.
pub(crate) fn view(
    props: NotificationsPanelProps<'_>,
) -> Element<'_, ModalsIntent> {
    let palette = *props.theme.theme.iced_palette();
    let muted = palette.muted;

    let close_icon = svg::Svg::new(svg::Handle::from_memory(icons::CLOSE))
        .width(Length::Fixed(CLOSE_ICON_SIZE))
        .height(Length::Fixed(CLOSE_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(muted) });
    let close = button(close_icon)
        .on_press(ModalsIntent::Dismiss)
        .padding(4.0)
        .style(|_, _| button::Style::default());

    let title = row![
        text("Notifications")
            .size(TITLE_TEXT_SIZE)
            .color(palette.foreground),
        Space::new().width(Length::Fill),
        close,
    ]
    .align_y(alignment::Vertical::Center);

    let body = match props.cleared {
        0 => String::from("You're all caught up."),
        1 => String::from("1 notification marked as read."),
        count => format!("{count} notifications marked as read."),
    };

    container(
        column![title, text(body).size(BODY_TEXT_SIZE).color(palette.muted)]
            .spacing(12.0),
    )
    .width(Length::Fixed(PANEL_WIDTH))
    .padding(PANEL_PADDING)
    .style(menu_panel_style(props.theme))
    .into()
}
