use std::path::Path;

/// Неизменяемые параметры одного запуска.
///
/// Строится один раз из аргументов командной строки и явно передаётся
/// во все компоненты, глобального изменяемого состояния нет.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub class_override: Option<String>,
    pub process_override: Option<String>,
    pub list: bool,
    pub force: bool,
    pub passthrough: bool,
    pub reverse: bool,
    pub no_fork: bool,
}

impl Invocation {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            ..Self::default()
        }
    }

    pub fn with_passthrough(mut self, passthrough: bool) -> Self {
        self.passthrough = passthrough;
        // passthrough подразумевает force
        self.force |= passthrough;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force || self.passthrough;
        self
    }

    /// Имя приложения: команда без пути (`/usr/bin/firefox` -> `firefox`)
    pub fn app_name(&self) -> &str {
        Path::new(&self.command)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.command)
    }

    pub fn target_class(&self) -> &str {
        self.class_override
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.app_name())
    }

    pub fn process_name(&self) -> &str {
        self.process_override
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.app_name())
    }

    /// Дополнительные аргументы при -p требуют нового экземпляра
    pub fn needs_passthrough(&self) -> bool {
        self.passthrough && !self.args.is_empty()
    }

    /// Без -n новый процесс уходит в фон, с -n заменяет текущий
    pub fn detach(&self) -> bool {
        !self.no_fork
    }
}
