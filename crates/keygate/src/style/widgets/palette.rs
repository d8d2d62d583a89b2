//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,
    pub background_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_green: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadow colors
    pub shadow: Color,
    pub shadow_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    ///
    /// Gray page, white card, blue actions.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.23, 0.51, 0.96), // #3B82F6
            primary_light: Color::from_rgb(0.38, 0.65, 0.98),
            primary_dark: Color::from_rgb(0.15, 0.39, 0.92), // #2563EB

            surface: Color::WHITE,
            surface_elevated: Color::WHITE,
            background: Color::from_rgb(0.95, 0.96, 0.96), // #F3F4F6
            background_secondary: Color::from_rgb(0.90, 0.91, 0.92),

            text_primary: Color::from_rgb(0.12, 0.16, 0.22), // #1F2937
            text_secondary: Color::from_rgb(0.29, 0.33, 0.39),
            text_muted: Color::from_rgb(0.42, 0.45, 0.50),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.13, 0.77, 0.37), // #22C55E
            accent_red: Color::from_rgb(0.94, 0.27, 0.27),   // #EF4444

            selected: Color::from_rgb(0.94, 0.97, 1.0),
            hover: Color::from_rgb(0.97, 0.98, 0.99),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.92),
            border_medium: Color::from_rgb(0.82, 0.84, 0.86),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.10),
        }
    }

    /// Creates the dark theme palette.
    ///
    /// Terminal-inspired teal on near-black surfaces.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 1.0, 0.8), // #00FFCC
            primary_light: Color::from_rgb(0.2, 1.0, 0.85),
            primary_dark: Color::from_rgb(0.0, 0.8, 0.65),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            background: Color::from_rgb(0.08, 0.09, 0.11),
            background_secondary: Color::from_rgb(0.10, 0.11, 0.13),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            accent_green: Color::from_rgb(0.2, 0.9, 0.5),
            accent_red: Color::from_rgb(1.0, 0.35, 0.4),

            selected: Color::from_rgb(0.10, 0.18, 0.20),
            hover: Color::from_rgb(0.14, 0.15, 0.17),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.20),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to dark mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
