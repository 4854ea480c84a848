use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex color palette as stored in settings and presets.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) foreground: String,
    pub(crate) muted: String,
    pub(crate) subtle: String,
    pub(crate) border: String,
    pub(crate) accent: String,
    pub(crate) accent_soft: String,
    pub(crate) success: String,
    pub(crate) danger: String,
    pub(crate) warning: String,
    pub(crate) highlight: String,
    pub(crate) backdrop: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#F9FAFB"),
            surface: String::from("#FFFFFF"),
            foreground: String::from("#1F2937"),
            muted: String::from("#6B7280"),
            subtle: String::from("#D1D5DB"),
            border: String::from("#E5E7EB"),
            accent: String::from("#2563EB"),
            accent_soft: String::from("#EFF6FF"),
            success: String::from("#22C55E"),
            danger: String::from("#EF4444"),
            warning: String::from("#F97316"),
            highlight: String::from("#A855F7"),
            backdrop: String::from("#111827"),
        }
    }
}

impl ColorPalette {
    /// Return a copy of the palette with a different accent color.
    pub(crate) fn with_accent(mut self, accent: &str) -> Self {
        self.accent = accent.to_string();
        self
    }
}

/// Parsed palette ready for iced styling closures.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) muted: Color,
    pub(crate) subtle: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
    pub(crate) highlight: Color,
    pub(crate) backdrop: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: parse_hex_color(&p.background),
            surface: parse_hex_color(&p.surface),
            foreground: parse_hex_color(&p.foreground),
            muted: parse_hex_color(&p.muted),
            subtle: parse_hex_color(&p.subtle),
            border: parse_hex_color(&p.border),
            accent: parse_hex_color(&p.accent),
            accent_soft: parse_hex_color(&p.accent_soft),
            success: parse_hex_color(&p.success),
            danger: parse_hex_color(&p.danger),
            warning: parse_hex_color(&p.warning),
            highlight: parse_hex_color(&p.highlight),
            backdrop: parse_hex_color(&p.backdrop),
        }
    }
}

/// Parse `#rrggbb` into a color, falling back to black on malformed input.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or(Color::BLACK)
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a custom palette.
    pub(crate) fn from_palette(id: String, raw_palette: ColorPalette) -> Self {
        let iced_palette = IcedColorPalette::from(&raw_palette);
        Self { id, iced_palette }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the current theme with a custom palette.
    pub(crate) fn set_custom_palette(&mut self, palette: ColorPalette) {
        self.current = AppTheme::from_palette(String::from("custom"), palette);
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{ColorPalette, ThemeManager, parse_hex_color};

    #[test]
    fn given_valid_hex_when_parsed_then_color_matches_channels() {
        let color = parse_hex_color("#FF0000");
        assert_eq!(color, Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_black_is_returned() {
        assert_eq!(parse_hex_color("not-a-color"), Color::BLACK);
    }

    #[test]
    fn given_custom_accent_when_palette_applied_then_current_theme_uses_it() {
        let mut manager = ThemeManager::new();
        manager.set_custom_palette(ColorPalette::default().with_accent("#00FF00"));

        assert_eq!(
            manager.current().iced_palette().accent,
            Color::from_rgb8(0, 255, 0)
        );
    }
}
