use std::io;
use std::path::Path;
use std::process::Command;

/// Opens a new interactive terminal window running `program <arg>` and
/// returns without waiting for it. The child is detached: its exit code and
/// output are never observed.
///
/// One implementation per host platform; `platform_spawner` picks the right
/// one once at startup so calling code never branches on the OS.
pub trait TerminalSpawner {
    fn spawn_in_terminal(&self, program: &str, arg: &Path) -> io::Result<()>;
}

/// Windows: `start` opens a fresh console, `cmd /k` keeps it open after the
/// program exits so the output stays readable.
pub struct WindowsConsole;

impl TerminalSpawner for WindowsConsole {
    fn spawn_in_terminal(&self, program: &str, arg: &Path) -> io::Result<()> {
        Command::new("cmd")
            .args(["/c", "start", "cmd", "/k", program])
            .arg(arg)
            .spawn()?;
        Ok(())
    }
}

/// Everywhere else: a terminal emulator window running the program.
pub struct UnixTerminal {
    terminal: String,
}

impl UnixTerminal {
    pub fn new(terminal: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
        }
    }
}

impl Default for UnixTerminal {
    fn default() -> Self {
        Self::new("gnome-terminal")
    }
}

impl TerminalSpawner for UnixTerminal {
    fn spawn_in_terminal(&self, program: &str, arg: &Path) -> io::Result<()> {
        Command::new(&self.terminal)
            .arg("--")
            .arg(program)
            .arg(arg)
            .spawn()?;
        Ok(())
    }
}

/// Select the spawner for the host platform. Called once at startup.
pub fn platform_spawner() -> Box<dyn TerminalSpawner> {
    #[cfg(windows)]
    {
        Box::new(WindowsConsole)
    }
    #[cfg(not(windows))]
    {
        Box::new(UnixTerminal::default())
    }
}
