use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;

pub const PURPLE: Color = Color::from_rgb(
    0x62 as f32 / 255.0,
    0x00 as f32 / 255.0,
    0xEE as f32 / 255.0,
);
pub const DARK_PURPLE: Color = Color::from_rgb(
    0x37 as f32 / 255.0,
    0x00 as f32 / 255.0,
    0xB3 as f32 / 255.0,
);
pub const TRANSPARENT_PURPLE: Color = Color::from_rgba(
    0x62 as f32 / 255.0,
    0x00 as f32 / 255.0,
    0xEE as f32 / 255.0,
    0.25,
);

// Soft blue-grey used behind the login card
pub const LIGHT_BG: Color = Color::from_rgb(
    0xEC as f32 / 255.0,
    0xEF as f32 / 255.0,
    0xF4 as f32 / 255.0,
);

pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xB4 as f32 / 255.0,
    0xB4 as f32 / 255.0,
    0xB4 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
);
pub const DARK_GREY: Color = Color::from_rgb(
    0x32 as f32 / 255.0,
    0x32 as f32 / 255.0,
    0x32 as f32 / 255.0,
);

pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

// Scrim behind the bottom sheet
pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);
