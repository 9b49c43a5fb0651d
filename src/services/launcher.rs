use crate::error::{RaiseError, Result};
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::info;

/// Запуск нового экземпляра приложения
pub trait Launcher {
    /// `detach = false` заменяет текущий процесс и при успехе не возвращается
    fn launch(&self, command: &str, args: &[String], detach: bool) -> Result<()>;
}

/// Находит исполняемый файл в PATH
pub fn resolve_command(command: &str) -> Result<PathBuf> {
    which::which(command).map_err(|_| RaiseError::CommandNotFound(command.to_string()))
}

pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &str, args: &[String], detach: bool) -> Result<()> {
        let path = resolve_command(command)?;
        let mut cmd = Command::new(&path);
        cmd.args(args);

        if detach {
            // Своя группа процессов: приложение не завершится вместе с нами
            let child = cmd.stdin(Stdio::null()).process_group(0).spawn()?;
            info!("Запущен {:?} (pid {})", path, child.id());
            Ok(())
        } else {
            info!("Заменяем текущий процесс на {:?}", path);
            Err(RaiseError::Io(cmd.exec()))
        }
    }
}

pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn launch(&self, command: &str, args: &[String], detach: bool) -> Result<()> {
        let path = resolve_command(command)?;
        info!(
            "[DRY RUN] Запуск {:?} с аргументами {:?} (detach: {})",
            path, args, detach
        );
        Ok(())
    }
}

/// Factory function to create an appropriate launcher based on the dry_run flag
pub fn create_launcher(dry_run: bool) -> Box<dyn Launcher> {
    if dry_run {
        Box::new(DryRunLauncher)
    } else {
        Box::new(ProcessLauncher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_is_not_found() {
        let result = resolve_command("definitely-not-installed-app-xyz");
        assert!(matches!(result, Err(RaiseError::CommandNotFound(ref c)) if c == "definitely-not-installed-app-xyz"));
    }

    #[test]
    fn test_detached_launch() {
        let launcher = ProcessLauncher;
        assert!(launcher.launch("true", &[], true).is_ok());
    }

    #[test]
    fn test_dry_run_checks_command() {
        let launcher = DryRunLauncher;
        assert!(launcher.launch("sh", &["-c".to_string()], false).is_ok());
        assert!(launcher.launch("definitely-not-installed-app-xyz", &[], true).is_err());
    }
}
