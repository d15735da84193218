use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use rhai::{Engine, Scope};

use super::Settings;

/// Runs the startup script that customizes wren. The script only sees the
/// `set_*` functions registered here; the engine is otherwise sandboxed.
pub struct ConfigEngine {
    engine: Engine,
    settings: Arc<RwLock<Settings>>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        let settings = Arc::new(RwLock::new(Settings::default()));
        let mut engine = Engine::new();

        // Limit script execution for safety
        engine.set_max_expr_depths(64, 64);
        engine.set_max_operations(100_000);

        register_api(&mut engine, &settings);

        Self { engine, settings }
    }

    /// Evaluate a script string against the registered API.
    pub fn eval(&mut self, script: &str) -> Result<(), String> {
        let ast = self
            .engine
            .compile(script)
            .map_err(|e| format!("Config parse error: {}", e))?;

        self.engine
            .run_ast_with_scope(&mut Scope::new(), &ast)
            .map_err(|e| format!("Config error: {}", e))
    }

    /// Read and evaluate a config file.
    pub fn load_file(&mut self, path: &Path) -> Result<(), String> {
        let script = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        self.eval(&script)
    }

    /// Evaluate the user's config file when it exists. A missing file is not
    /// an error; wren then runs on defaults.
    pub fn load_default(&mut self) -> Result<(), String> {
        match Self::config_file() {
            Some(path) if path.exists() => self.load_file(&path),
            _ => Ok(()),
        }
    }

    pub fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wren").join("init.rhai"))
    }

    /// A snapshot of the settings the script produced.
    pub fn settings(&self) -> Settings {
        self.settings.read().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn register_api(engine: &mut Engine, settings: &Arc<RwLock<Settings>>) {
    let string_setters: &[(&str, fn(&mut Settings, &str))] = &[
        ("set_theme", |cfg, v| cfg.theme = v.to_string()),
        ("set_interpreter", |cfg, v| cfg.interpreter = v.to_string()),
        ("set_package_manager", |cfg, v| {
            cfg.package_manager = v.to_string()
        }),
        ("set_default_extension", |cfg, v| {
            cfg.default_extension = v.trim_start_matches('.').to_string()
        }),
    ];

    for &(name, apply) in string_setters {
        let s = Arc::clone(settings);
        engine.register_fn(name, move |value: &str| {
            if let Ok(mut cfg) = s.write() {
                apply(&mut cfg, value);
            }
        });
    }

    {
        let s = Arc::clone(settings);
        engine.register_fn("set_tab_width", move |width: i64| {
            if let Ok(mut cfg) = s.write() {
                cfg.tab_width = width.clamp(1, 16) as usize;
            }
        });
    }

    {
        let s = Arc::clone(settings);
        engine.register_fn("set_show_line_numbers", move |enabled: bool| {
            if let Ok(mut cfg) = s.write() {
                cfg.show_line_numbers = enabled;
            }
        });
    }

    // Scripts may call print; there is nowhere to show it before the
    // terminal is set up, so it goes nowhere.
    engine.register_fn("print", |_msg: &str| {});
}
