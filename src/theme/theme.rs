use super::Color;

/// Palette for the editor chrome. Two are built in; Toggle Theme flips
/// between them.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,

    pub line_number: Color,
    pub line_number_active: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub tab_bar_bg: Color,
    pub tab_bar_fg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,

    pub warning: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",

            background: Color::rgb(0x1e, 0x1e, 0x1e),
            foreground: Color::WHITE,
            cursor: Color::WHITE,

            line_number: Color::rgb(0x55, 0x55, 0x55),
            line_number_active: Color::rgb(0xaa, 0xaa, 0xaa),
            status_bar_bg: Color::rgb(0x2d, 0x2d, 0x2d),
            status_bar_fg: Color::WHITE,
            tab_bar_bg: Color::rgb(0x2d, 0x2d, 0x2d),
            tab_bar_fg: Color::rgb(0xbb, 0xbb, 0xbb),
            tab_active_bg: Color::rgb(0x3a, 0x3a, 0x3a),
            tab_active_fg: Color::WHITE,

            warning: Color::rgb(0xff, 0xb4, 0x54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",

            background: Color::WHITE,
            foreground: Color::BLACK,
            cursor: Color::BLACK,

            line_number: Color::rgb(0xaa, 0xaa, 0xaa),
            line_number_active: Color::rgb(0x55, 0x55, 0x55),
            status_bar_bg: Color::rgb(0xe0, 0xe0, 0xe0),
            status_bar_fg: Color::BLACK,
            tab_bar_bg: Color::rgb(0xe0, 0xe0, 0xe0),
            tab_bar_fg: Color::rgb(0x44, 0x44, 0x44),
            tab_active_bg: Color::rgb(0xcc, 0xcc, 0xcc),
            tab_active_fg: Color::BLACK,

            warning: Color::rgb(0xb5, 0x4a, 0x00),
        }
    }

    /// The other theme of the dark/light pair.
    pub fn toggled(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            _ => Self::dark(),
        }
    }
}
