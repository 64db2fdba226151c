use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 86, g: 182, b: 194 };
pub const ACCENT: Color = Color::TrueColor { r: 229, g: 192, b: 123 };
pub const SEPARATOR: Color = Color::TrueColor { r: 92, g: 99, b: 112 };
pub const SUCCESS: Color = Color::TrueColor { r: 152, g: 195, b: 121 };
pub const FAILURE: Color = Color::TrueColor { r: 224, g: 108, b: 117 };
