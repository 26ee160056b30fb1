use ratatui::style::Color;

use crate::state::Theme;

/// Colors for one theme. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub input: Color,
    pub chip: Color,
    pub chip_selected: Color,
    pub error: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(129, 140, 248),
    card: Color::Rgb(255, 255, 255),
    text: Color::Rgb(31, 41, 55),
    muted: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(37, 99, 235),
    input: Color::Rgb(229, 231, 235),
    chip: Color::Rgb(219, 234, 254),
    chip_selected: Color::Rgb(147, 197, 253),
    error: Color::Rgb(185, 28, 28),
};

const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    card: Color::Rgb(31, 41, 55),
    text: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(147, 197, 253),
    input: Color::Rgb(55, 65, 81),
    chip: Color::Rgb(30, 64, 175),
    chip_selected: Color::Rgb(29, 78, 216),
    error: Color::Rgb(248, 113, 113),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}
