mod installer;
mod script;
mod terminal;

pub use installer::{InstallOutcome, install_package};
pub use script::run_script;
pub use terminal::{TerminalSpawner, UnixTerminal, WindowsConsole, platform_spawner};
