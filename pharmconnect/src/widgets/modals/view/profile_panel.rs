use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Color, Element, Length, alignment};

use super::super::event::ModalsIntent;
use crate::settings::MerchantProfile;
use crate::shared::ui::icons;
use crate::shared::ui::menu_style::menu_panel_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const PANEL_WIDTH: f32 = 440.0;
const PANEL_PADDING: f32 = 24.0;
const AVATAR_SIZE: f32 = 64.0;
const NAME_TEXT_SIZE: f32 = 20.0;
const BODY_TEXT_SIZE: f32 = 14.0;
const LABEL_TEXT_SIZE: f32 = 12.0;
const STAT_VALUE_SIZE: f32 = 18.0;
const CLOSE_ICON_SIZE: f32 = 18.0;

/// Props for rendering the read-only profile panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfilePanelProps<'a> {
    pub(crate) profile: &'a MerchantProfile,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the identity record of the signed-in merchant.
pub(crate) fn view(props: ProfilePanelProps<'_>) -> Element<'_, ModalsIntent> {
    let palette = *props.theme.theme.iced_palette();
    let profile = props.profile;
    let accent = palette.accent;
    let muted = palette.muted;

    let avatar = container(
        text(profile.initials())
            .size(NAME_TEXT_SIZE)
            .color(Color::WHITE),
    )
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(accent.into()),
        border: iced::Border {
            radius: (AVATAR_SIZE / 2.0).into(),
            ..iced::Border::default()
        },
        ..Default::default()
    });

    let close_icon = svg::Svg::new(svg::Handle::from_memory(icons::CLOSE))
        .width(Length::Fixed(CLOSE_ICON_SIZE))
        .height(Length::Fixed(CLOSE_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(muted) });
    let close = button(close_icon)
        .on_press(ModalsIntent::Dismiss)
        .padding(4.0)
        .style(|_, _| button::Style::default());

    let heading = row![
        avatar,
        column![
            text(profile.name.as_str())
                .size(NAME_TEXT_SIZE)
                .color(palette.foreground),
            text(profile.specialty.as_str())
                .size(BODY_TEXT_SIZE)
                .color(palette.accent),
        ]
        .spacing(4.0),
        Space::new().width(Length::Fill),
        close,
    ]
    .spacing(16.0)
    .align_y(alignment::Vertical::Center);

    let details = column![
        detail("Email", &profile.email, palette),
        detail("Phone", &profile.phone, palette),
        detail("Location", &profile.location, palette),
        detail("Education", &profile.education, palette),
    ]
    .spacing(10.0);

    let stats = row![
        stat("Patients", profile.stats.patients, palette),
        stat("Years", profile.stats.years_experience, palette),
        stat("Certifications", profile.stats.certifications, palette),
    ]
    .spacing(12.0);

    container(column![heading, details, stats].spacing(20.0))
        .width(Length::Fixed(PANEL_WIDTH))
        .padding(PANEL_PADDING)
        .style(menu_panel_style(props.theme))
        .into()
}

fn detail<'a>(
    label: &'static str,
    value: &'a str,
    palette: IcedColorPalette,
) -> Element<'a, ModalsIntent> {
    column![
        text(label).size(LABEL_TEXT_SIZE).color(palette.muted),
        text(value).size(BODY_TEXT_SIZE).color(palette.foreground),
    ]
    .spacing(2.0)
    .into()
}

fn stat<'a>(
    label: &'static str,
    value: u32,
    palette: IcedColorPalette,
) -> Element<'a, ModalsIntent> {
    let background = palette.background;

    container(
        column![
            text(value.to_string())
                .size(STAT_VALUE_SIZE)
                .color(palette.foreground),
            text(label).size(LABEL_TEXT_SIZE).color(palette.muted),
        ]
        .spacing(2.0)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(10.0)
    .align_x(alignment::Horizontal::Center)
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: iced::Border {
            radius: 8.0.into(),
            ..iced::Border::default()
        },
        ..Default::default()
    })
    .into()
}
