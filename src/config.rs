use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::WindowType;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub tools: ToolsConfig,
    pub lookup: LookupConfig,
    pub filter: FilterConfig,
    // Разобранные типы окон - не сериализуются, строятся после загрузки
    #[serde(skip)]
    interactable: Vec<WindowType>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Имена внешних утилит (можно указать абсолютный путь)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    pub wmctrl: String,
    pub xprop: String,
    pub pgrep: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// auto | pgrep | scan
    pub process_lookup: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    pub interactable_types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "compact".to_string(),
            },
            tools: ToolsConfig {
                wmctrl: "wmctrl".to_string(),
                xprop: "xprop".to_string(),
                pgrep: "pgrep".to_string(),
            },
            lookup: LookupConfig {
                process_lookup: "auto".to_string(),
            },
            filter: FilterConfig {
                interactable_types: vec!["normal".to_string(), "dialog".to_string()],
            },
            interactable: Vec::new(),
        };
        config.build_indexes();
        config
    }
}

impl Config {
    /// Путь к файлу конфигурации по умолчанию: `<config_dir>/run-or-raise/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("run-or-raise").join("config.toml"))
    }

    /// Загрузка: значения по умолчанию <- TOML файл (если есть) <- переменные RAISE_*
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        let path = config_path.map(Path::to_path_buf).or_else(Self::default_path);
        if let Some(path) = &path {
            figment = figment.merge(Toml::file(path));
        }

        let mut config: Config = figment
            .merge(Env::prefixed("RAISE_").split("__"))
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", path))?;

        config.validate()?;
        config.build_indexes();

        Ok(config)
    }

    /// Разбирает строковые типы окон один раз после загрузки
    pub fn build_indexes(&mut self) {
        self.interactable = self
            .filter
            .interactable_types
            .iter()
            .map(|name| WindowType::from_name(name))
            .collect();
    }

    /// Типы окон, с которыми пользователь может взаимодействовать
    pub fn interactable_types(&self) -> &[WindowType] {
        &self.interactable
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "full" | "compact" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        for (name, value) in [
            ("wmctrl", &self.tools.wmctrl),
            ("xprop", &self.tools.xprop),
            ("pgrep", &self.tools.pgrep),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("Пустое имя утилиты tools.{}", name);
            }
        }

        match self.lookup.process_lookup.as_str() {
            "auto" | "pgrep" | "scan" => {}
            _ => anyhow::bail!(
                "Неверный режим поиска процессов: {}",
                self.lookup.process_lookup
            ),
        }

        if self.filter.interactable_types.is_empty() {
            anyhow::bail!("filter.interactable_types не может быть пустым");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_interactable_types() {
        let config = Config::default();
        assert_eq!(
            config.interactable_types(),
            &[WindowType::Normal, WindowType::Dialog]
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.lookup.process_lookup = "proc".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tools.xprop = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.filter.interactable_types.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rebuild_indexes_after_change() {
        let mut config = Config::default();
        config.filter.interactable_types = vec!["Utility".to_string()];
        config.build_indexes();
        assert_eq!(config.interactable_types(), &[WindowType::Utility]);
    }
}
