mod colors;
mod theme;

pub use colors::Color;
pub use theme::Theme;

pub fn default_theme() -> Theme {
    Theme::dark()
}

pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "dark" => Some(Theme::dark()),
        "light" => Some(Theme::light()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_covers_both_themes() {
        assert_eq!(get_builtin_theme("dark").unwrap().name, "dark");
        assert_eq!(get_builtin_theme("light").unwrap().name, "light");
        assert!(get_builtin_theme("gruvbox").is_none());
    }
}
