// src/style/color.rs

/// Named terminal colors accepted in style tags (`<fg=light_green>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
}

/// Parses a color name as written inside a style tag.
pub fn parse_color_name(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "default" => Some(Color::Default),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" | "light_gray" | "light_grey" => Some(Color::White),
        "dark_gray" | "dark_grey" | "light_black" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "light_white" => Some(Color::LightWhite),
        _ => None,
    }
}

impl Color {
    /// The SGR parameter selecting this color as foreground.
    pub fn fg_code(self) -> &'static str {
        match self {
            Self::Default => "39",
            Self::Black => "30",
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Blue => "34",
            Self::Magenta => "35",
            Self::Cyan => "36",
            Self::White => "37",
            Self::DarkGray => "90",
            Self::LightRed => "91",
            Self::LightGreen => "92",
            Self::LightYellow => "93",
            Self::LightBlue => "94",
            Self::LightMagenta => "95",
            Self::LightCyan => "96",
            Self::LightWhite => "97",
        }
    }

    /// The SGR parameter selecting this color as background.
    pub fn bg_code(self) -> &'static str {
        match self {
            Self::Default => "49",
            Self::Black => "40",
            Self::Red => "41",
            Self::Green => "42",
            Self::Yellow => "43",
            Self::Blue => "44",
            Self::Magenta => "45",
            Self::Cyan => "46",
            Self::White => "47",
            Self::DarkGray => "100",
            Self::LightRed => "101",
            Self::LightGreen => "102",
            Self::LightYellow => "103",
            Self::LightBlue => "104",
            Self::LightMagenta => "105",
            Self::LightCyan => "106",
            Self::LightWhite => "107",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_and_light_names() {
        assert_eq!(parse_color_name("red"), Some(Color::Red));
        assert_eq!(parse_color_name("light_green"), Some(Color::LightGreen));
        assert_eq!(parse_color_name("dark_gray"), Some(Color::DarkGray));
        assert_eq!(parse_color_name("RED"), Some(Color::Red));
        assert_eq!(parse_color_name("crimson"), None);
    }

    #[test]
    fn codes_pair_up() {
        assert_eq!(Color::Red.fg_code(), "31");
        assert_eq!(Color::Red.bg_code(), "41");
        assert_eq!(Color::DarkGray.fg_code(), "90");
        assert_eq!(Color::DarkGray.bg_code(), "100");
    }
}
