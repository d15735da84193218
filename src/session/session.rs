use std::io;
use std::path::PathBuf;

use crate::config::Settings;
use crate::launch::{self, InstallOutcome, TerminalSpawner};
use crate::theme::{self, Theme};

use super::mode::{Mode, PromptKind};
use super::tabs::{Tab, TabRegistry, title_for_path};
use super::Buffer;

/// All application state, constructed at startup and dropped at exit.
///
/// The tab registry never learns which tab is focused; `active` lives here,
/// on the presentation side, and is handed to the registry per call.
pub struct Session {
    pub tabs: TabRegistry,
    pub active: usize,
    pub settings: Settings,
    pub theme: Theme,
    pub mode: Mode,
    pub prompt_input: String,
    pub message: Option<String>,
    pub running: bool,
    spawner: Box<dyn TerminalSpawner>,
}

impl Session {
    /// Starts with a single untitled tab so the registry is never empty and
    /// `active` is always a valid index.
    pub fn new(settings: Settings, spawner: Box<dyn TerminalSpawner>) -> Self {
        let theme = theme::get_builtin_theme(&settings.theme).unwrap_or_else(theme::default_theme);

        let mut tabs = TabRegistry::new();
        let active = tabs.add_tab();

        Self {
            tabs,
            active,
            settings,
            theme,
            mode: Mode::default(),
            prompt_input: String::new(),
            message: None,
            running: true,
            spawner,
        }
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs.tab(self.active).expect("Active tab should exist")
    }

    pub fn active_tab_mut(&mut self) -> &mut Tab {
        self.tabs
            .tab_mut(self.active)
            .expect("Active tab should exist")
    }

    // Commands

    /// New Tab: append an untitled tab and select it.
    pub fn new_tab(&mut self) {
        self.active = self.tabs.add_tab();
    }

    /// Open File: read the file, then add a fresh tab for it. A new tab is
    /// always created, even if an empty one is already showing; on error
    /// the registry is left untouched.
    pub fn open_file(&mut self, path: PathBuf) -> io::Result<usize> {
        let buffer = Buffer::from_file(path.clone())?;
        let index = self.tabs.add_tab_with(buffer, title_for_path(&path));
        self.active = index;
        Ok(index)
    }

    /// Save File: write the active buffer to `path`, overwriting. The tab
    /// title is not changed; only Open sets file-derived titles.
    pub fn save_active_to(&mut self, path: PathBuf) -> io::Result<()> {
        self.active_tab_mut().buffer.write_to(path)
    }

    /// Run Code: hand the active buffer's content to a fresh interpreter in
    /// its own terminal window. Does not wait for it.
    pub fn run_code(&mut self) {
        let content = self.active_tab().buffer.content();
        let result = launch::run_script(
            &content,
            &self.settings.default_extension,
            &self.settings.interpreter,
            self.spawner.as_ref(),
        );
        match result {
            Ok(path) => self.set_message(format!("Running {}", path.display())),
            Err(e) => self.set_message(format!("Error: {}", e)),
        }
    }

    /// Install Package: blocks until the installer exits. A non-zero exit
    /// is not reported; only failure to start the installer is.
    pub fn install_package(&mut self, name: &str) {
        let outcome = launch::install_package(&self.settings.package_manager, name);
        match outcome {
            InstallOutcome::Error(e) => self.set_message(format!("Error: {}", e)),
            InstallOutcome::Completed | InstallOutcome::Failed(_) => {
                self.set_message(format!("Install finished: {}", name));
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn about(&mut self) {
        self.set_message(format!(
            "wren {} - a tiny tabbed script pad",
            env!("CARGO_PKG_VERSION")
        ));
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // Tab selection

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    pub fn prev_tab(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }

    // Prompts (the dialog equivalents)

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt_input.clear();
        if kind == PromptKind::SaveFile {
            // Prefill with the buffer's known path, like a save dialog would
            let known = self
                .active_tab()
                .buffer
                .path()
                .map(|p| p.display().to_string());
            if let Some(path) = known {
                self.prompt_input = path;
            }
        }
        self.mode = Mode::Prompt(kind);
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt_input.clear();
        self.mode = Mode::Edit;
    }

    pub fn submit_prompt(&mut self) {
        let Mode::Prompt(kind) = self.mode else {
            return;
        };
        self.mode = Mode::Edit;

        let input = std::mem::take(&mut self.prompt_input);
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        match kind {
            PromptKind::OpenFile => {
                if let Err(e) = self.open_file(PathBuf::from(input)) {
                    self.set_message(format!("Error: {}", e));
                }
            }
            PromptKind::SaveFile => {
                let mut path = PathBuf::from(input);
                // Suggested, not enforced: an explicit extension wins.
                if path.extension().is_none() {
                    path.set_extension(self.settings.default_extension.clone());
                }
                match self.save_active_to(path.clone()) {
                    Ok(()) => self.set_message(format!("Written {}", path.display())),
                    Err(e) => self.set_message(format!("Error: {}", e)),
                }
            }
            PromptKind::InstallPackage => {
                let name = input.to_string();
                self.install_package(&name);
            }
        }
    }

    // Messages

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    // Text editing on the active tab

    pub fn insert_char(&mut self, ch: char) {
        let tab = self.active_tab_mut();
        tab.buffer.insert_char(tab.cursor.line, tab.cursor.col, ch);
        tab.cursor.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let tab = self.active_tab_mut();
        tab.buffer.insert_newline(tab.cursor.line, tab.cursor.col);
        tab.cursor.line += 1;
        tab.cursor.col = 0;
    }

    pub fn insert_tab_stop(&mut self) {
        let spaces = " ".repeat(self.settings.tab_width);
        let tab = self.active_tab_mut();
        tab.buffer.insert_str(tab.cursor.line, tab.cursor.col, &spaces);
        tab.cursor.col += spaces.len();
    }

    pub fn delete_char_backward(&mut self) {
        let tab = self.active_tab_mut();
        if tab.cursor.col > 0 {
            tab.buffer.delete_char_backward(tab.cursor.line, tab.cursor.col);
            tab.cursor.col -= 1;
        } else if tab.cursor.line > 0 {
            // Join with previous line
            let prev_line_len = tab.buffer.line_len(tab.cursor.line - 1);
            tab.buffer.delete_char_backward(tab.cursor.line, tab.cursor.col);
            tab.cursor.line -= 1;
            tab.cursor.col = prev_line_len;
        }
    }

    pub fn move_left(&mut self) {
        self.active_tab_mut().cursor.move_left();
    }

    pub fn move_right(&mut self) {
        let tab = self.active_tab_mut();
        tab.cursor.move_right(&tab.buffer);
    }

    pub fn move_up(&mut self) {
        let tab = self.active_tab_mut();
        tab.cursor.move_up(&tab.buffer);
    }

    pub fn move_down(&mut self) {
        let tab = self.active_tab_mut();
        tab.cursor.move_down(&tab.buffer);
    }

    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        self.active_tab_mut().adjust_scroll(viewport_height);
    }
}
