use iced::font::{self, Font};
use iced::theme::Palette;
use iced::{Color, Theme};

pub const AMBER: Color = Color {
    r: 0.85,
    g: 0.47,
    b: 0.02,
    a: 1.0,
};

pub const MUTED: Color = Color {
    r: 0.78,
    g: 0.76,
    b: 0.72,
    a: 1.0,
};

pub const FAINT: Color = Color {
    r: 0.58,
    g: 0.56,
    b: 0.52,
    a: 1.0,
};

pub const DANGER: Color = Color {
    r: 0.86,
    g: 0.30,
    b: 0.26,
    a: 1.0,
};

/// Headings use the platform serif face
pub const SERIF: Font = Font {
    family: font::Family::Serif,
    ..Font::DEFAULT
};

/// Dark walnut background with amber accents
pub fn woodshop() -> Theme {
    Theme::custom(
        "Woodshop".to_string(),
        Palette {
            background: Color::from_rgb8(0x24, 0x1c, 0x16),
            text: Color::from_rgb8(0xf5, 0xf0, 0xe8),
            primary: AMBER,
            success: Color::from_rgb8(0x5c, 0x8a, 0x4a),
            danger: DANGER,
        },
    )
}
