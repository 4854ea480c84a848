use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container};

use super::theme::{IcedColorPalette, ThemeProps};

const PANEL_RADIUS: f32 = 8.0;
const PANEL_BORDER_WIDTH: f32 = 1.0;

/// Return a styled container closure for dropdown and modal panels.
pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: PANEL_BORDER_WIDTH,
            color: palette.border,
            radius: iced::border::Radius::new(PANEL_RADIUS),
        },
        shadow: iced::Shadow {
            color: iced::Color {
                a: 0.12,
                ..palette.backdrop
            },
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Button style for rows inside a dropdown panel.
pub(crate) fn menu_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    text_color: iced::Color,
) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            Some(palette.background.into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
