use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::Builder;

use super::TerminalSpawner;

/// Write `content` to a uniquely named temp file and open an interactive
/// terminal running `interpreter <path>` on it. Returns as soon as the
/// terminal is spawned; the script's exit code and output are never seen.
///
/// The temp file must outlive this call (the spawned interpreter reads it)
/// and is never deleted afterwards; the OS temp directory is the cleanup
/// convention.
pub fn run_script(
    content: &str,
    extension: &str,
    interpreter: &str,
    spawner: &dyn TerminalSpawner,
) -> io::Result<PathBuf> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut file = Builder::new().prefix("wren-").suffix(&suffix).tempfile()?;
    file.write_all(content.as_bytes())?;

    let path = file.into_temp_path().keep().map_err(io::Error::from)?;
    spawner.spawn_in_terminal(interpreter, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    /// Records spawn requests instead of launching anything.
    struct RecordingSpawner {
        calls: Mutex<Vec<(String, PathBuf)>>,
    }

    impl RecordingSpawner {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl TerminalSpawner for RecordingSpawner {
        fn spawn_in_terminal(&self, program: &str, arg: &Path) -> io::Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), arg.to_path_buf()));
            Ok(())
        }
    }

    struct FailingSpawner;

    impl TerminalSpawner for FailingSpawner {
        fn spawn_in_terminal(&self, _program: &str, _arg: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no terminal"))
        }
    }

    #[test]
    fn run_script_writes_content_and_spawns_once() {
        let spawner = RecordingSpawner::new();
        let path = run_script("print(1)", "py", "python3", &spawner).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "print(1)");

        let calls = spawner.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "python3");
        assert_eq!(calls[0].1, path);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn run_script_uses_configured_extension() {
        let spawner = RecordingSpawner::new();
        let path = run_script("", "py", "python3", &spawner).unwrap();
        assert_eq!(path.extension().unwrap(), "py");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn run_script_accepts_extension_with_leading_dot() {
        let spawner = RecordingSpawner::new();
        let path = run_script("", ".py", "python3", &spawner).unwrap();
        assert_eq!(path.extension().unwrap(), "py");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn distinct_runs_use_distinct_files() {
        let spawner = RecordingSpawner::new();
        let a = run_script("a", "py", "python3", &spawner).unwrap();
        let b = run_script("b", "py", "python3", &spawner).unwrap();
        assert_ne!(a, b);
        let _ = std::fs::remove_file(&a);
        let _ = std::fs::remove_file(&b);
    }

    #[test]
    fn spawn_failure_is_surfaced() {
        let err = run_script("print(1)", "py", "python3", &FailingSpawner);
        assert!(err.is_err());
    }
}
