use crate::config::Config;
use crate::engine::{decide, filter_windows, Decision};
use crate::error::{RaiseError, Result};
use crate::model::{Invocation, MatchCriteria, WindowRecord, WindowType};
use std::io::Write;
use tracing::{debug, info, warn};

use super::launcher::{create_launcher, Launcher};
use super::process_locator::{create_process_locator, ProcessLocator};
use super::window_manager::{create_window_manager, WindowManager};

/// Один проход run-or-raise: собрать снимок, принять решение, выполнить действие
pub struct RunOrRaise {
    interactable: Vec<WindowType>,
    window_manager: Box<dyn WindowManager>,
    process_locator: Box<dyn ProcessLocator>,
    launcher: Box<dyn Launcher>,
    local_hostname: String,
}

impl RunOrRaise {
    pub fn new(config: &Config, dry_run: bool) -> Self {
        info!("Инициализация RunOrRaise (dry_run: {})", dry_run);

        let local_hostname = sysinfo::System::host_name().unwrap_or_else(|| {
            warn!("Не удалось определить имя машины, совпадение по pid отключено");
            String::new()
        });

        Self::with_services(
            config.interactable_types().to_vec(),
            create_window_manager(config, dry_run),
            create_process_locator(config),
            create_launcher(dry_run),
            local_hostname,
        )
    }

    pub fn with_services(
        interactable: Vec<WindowType>,
        window_manager: Box<dyn WindowManager>,
        process_locator: Box<dyn ProcessLocator>,
        launcher: Box<dyn Launcher>,
        local_hostname: String,
    ) -> Self {
        Self {
            interactable,
            window_manager,
            process_locator,
            launcher,
            local_hostname,
        }
    }

    pub fn run<W: Write>(&self, invocation: &Invocation, out: &mut W) -> Result<()> {
        let process_name = invocation.process_name();
        let pids = self.process_locator.locate(process_name)?;
        debug!("Процессы '{}': {:?}", process_name, pids);

        let criteria = MatchCriteria::new(invocation.target_class(), invocation.app_name(), pids);
        let windows = self.window_manager.list_windows()?;

        let filtered = filter_windows(
            &windows,
            &criteria,
            &self.local_hostname,
            &self.interactable,
            |id| self.window_manager.window_types(id),
        )?;
        info!(
            "Класс '{}': подходящих окон {} из {}",
            criteria.target_class(),
            filtered.len(),
            windows.len()
        );

        let decision = decide(invocation, &filtered, criteria.target_pids(), || {
            self.window_manager.active_window()
        })?;
        debug!("Решение: {:?}", decision);

        match decision {
            Decision::List => print_windows(out, &filtered),
            Decision::Activate(id) => {
                info!("Активируем окно {}", id);
                self.window_manager.activate(id).map_err(|e| {
                    debug!("Ошибка активации: {}", e);
                    RaiseError::ActivationFailure {
                        app: invocation.app_name().to_string(),
                        window: id.to_string(),
                    }
                })
            }
            Decision::Launch => {
                info!("Запускаем новый экземпляр '{}'", invocation.command);
                self.launcher
                    .launch(&invocation.command, &invocation.args, invocation.detach())
            }
        }
    }
}

fn print_windows<W: Write>(out: &mut W, windows: &[&WindowRecord]) -> Result<()> {
    writeln!(out, "Найдено окон: {}", windows.len())?;
    for window in windows {
        writeln!(out, "{}", window)?;
    }
    Ok(())
}
