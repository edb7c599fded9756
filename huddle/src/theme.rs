use iced::theme::Palette;
use iced::{Color, Theme};

/// Resolved colors used by the shell views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShellPalette {
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) content_background: Color,
    pub(crate) rail_background: Color,
    pub(crate) rooms_background: Color,
    pub(crate) card: Color,
    pub(crate) card_selected: Color,
    pub(crate) space_cell: Color,
    pub(crate) space_cell_active: Color,
    pub(crate) avatar: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
}

impl Default for ShellPalette {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            dim_foreground: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
            content_background: Color::from_rgb8(0x1A, 0x1A, 0x1A),
            rail_background: Color::from_rgb8(0x0D, 0x0D, 0x0D),
            rooms_background: Color::BLACK,
            card: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            card_selected: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            space_cell: Color::from_rgb8(0xAF, 0x52, 0xDE),
            space_cell_active: Color::from_rgb8(0xC8, 0x7E, 0xF0),
            avatar: Color::from_rgb8(0x34, 0xC7, 0x59),
            red: Color::from_rgb8(0xFF, 0x3B, 0x30),
            yellow: Color::from_rgb8(0xFF, 0xCC, 0x00),
        }
    }
}

/// Application theme: an id plus the palette views draw with.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    palette: ShellPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("huddle-dark"),
            palette: ShellPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = value.palette;
        let palette = Palette {
            background: palette.content_background,
            text: palette.foreground,
            primary: palette.space_cell,
            success: palette.avatar,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn palette(&self) -> &ShellPalette {
        &self.palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

/// Theme props passed from the app view down to widgets and components.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}
