use std::process::{Command, Stdio};

/// Result of a package installation.
#[derive(Debug)]
pub enum InstallOutcome {
    /// Installer exited zero.
    Completed,
    /// Installer ran and exited non-zero. Callers today discard this.
    Failed(Option<i32>),
    /// The installer process could not be started at all.
    Error(String),
}

impl InstallOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, InstallOutcome::Completed)
    }
}

/// Run `<manager> install <name>` and block until it exits. The installer's
/// output is not captured and its exit code is classified, not surfaced.
pub fn install_package(manager: &str, name: &str) -> InstallOutcome {
    let status = Command::new(manager)
        .arg("install")
        .arg(name)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(s) if s.success() => InstallOutcome::Completed,
        Ok(s) => InstallOutcome::Failed(s.code()),
        Err(e) => InstallOutcome::Error(format!("Failed to run {}: {}", manager, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_completed() {
        // `true` ignores its arguments and exits zero.
        let outcome = install_package("true", "anything");
        assert!(outcome.is_completed());
    }

    #[test]
    fn nonzero_exit_is_failed_not_error() {
        let outcome = install_package("false", "nonexistent-pkg-xyz");
        match outcome {
            InstallOutcome::Failed(code) => assert_ne!(code, Some(0)),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn missing_installer_is_error() {
        let outcome = install_package("wren-no-such-installer-xyz", "pkg");
        assert!(matches!(outcome, InstallOutcome::Error(_)));
    }

    #[cfg(unix)]
    #[test]
    fn install_blocks_until_installer_exits() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow-installer");
        {
            let mut f = std::fs::File::create(&script).unwrap();
            writeln!(f, "#!/bin/sh\nsleep 0.3\nexit 7").unwrap();
        }
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let start = std::time::Instant::now();
        let outcome = install_package(script.to_str().unwrap(), "pkg");
        assert!(start.elapsed() >= std::time::Duration::from_millis(250));
        assert!(matches!(outcome, InstallOutcome::Failed(Some(7))));
    }
}
