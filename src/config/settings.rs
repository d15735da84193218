/// Settings that can be customized via the Rhai config file
#[derive(Debug, Clone)]
pub struct Settings {
    // Display
    pub theme: String,
    pub show_line_numbers: bool,
    pub tab_width: usize,

    // Script execution
    pub interpreter: String,
    pub package_manager: String,
    pub default_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_line_numbers: true,
            tab_width: 4,

            interpreter: default_interpreter().to_string(),
            package_manager: "pip".to_string(),
            default_extension: "py".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
}

fn default_interpreter() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}
