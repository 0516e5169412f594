use ratatui::style::Color;

pub const COFFEE_ORANGE: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const MUTED_TEXT: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const USER_DOT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const RADIUS_RING: Color = Color::Rgb(0x00, 0x96, 0xff);
