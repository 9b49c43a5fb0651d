use crate::config::Config;
use crate::error::{RaiseError, Result};
use tracing::{debug, info};

/// Проверить, что установлены утилиты, без которых работа невозможна
pub fn check_prerequisites(config: &Config) -> Result<()> {
    info!("Проверка необходимых утилит...");

    for tool in required_tools(config) {
        match which::which(tool) {
            Ok(path) => debug!("{} найден: {:?}", tool, path),
            Err(_) => return Err(RaiseError::PrerequisiteMissing(tool.to_string())),
        }
    }

    Ok(())
}

/// pgrep сюда не входит: без него используется просмотр таблицы процессов
pub fn required_tools(config: &Config) -> [&str; 2] {
    [config.tools.wmctrl.as_str(), config.tools.xprop.as_str()]
}
