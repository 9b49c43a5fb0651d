use crate::error::Result;
use crate::trace_if_enabled;
use std::collections::HashSet;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::debug;

use super::r#trait::{command_matches, ProcessLocator};

/// Просмотр всей таблицы процессов, если pgrep недоступен
pub struct ScanLocator;

impl ScanLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLocator for ScanLocator {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn locate(&self, identifier: &str) -> Result<HashSet<u32>> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always),
        );

        let own_pid = std::process::id();
        let mut pids = HashSet::new();

        for (pid, process) in system.processes() {
            let pid = pid.as_u32();
            if pid == own_pid {
                continue;
            }

            let name = process.name().to_string_lossy();
            let command_line = process
                .cmd()
                .iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ");

            if name == identifier || command_matches(&command_line, identifier) {
                trace_if_enabled!("Совпадение: pid {} '{}'", pid, command_line);
                pids.insert(pid);
            }
        }

        debug!("Просмотр таблицы нашёл {} процессов '{}'", pids.len(), identifier);
        Ok(pids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    #[test]
    fn test_scan_finds_spawned_process() {
        let mut child = Command::new("sleep")
            .arg("10")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn test process");

        let pids = ScanLocator::new().locate("sleep").unwrap();
        let found = pids.contains(&child.id());

        let _ = child.kill();
        let _ = child.wait();
        assert!(found);
    }

    #[test]
    fn test_scan_never_reports_itself() {
        let pids = ScanLocator::new().locate("definitely-not-running-xyz").unwrap();
        assert!(!pids.contains(&std::process::id()));
    }
}
