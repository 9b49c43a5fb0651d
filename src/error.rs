use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaiseError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Не найдена необходимая утилита '{0}', установите её и повторите")]
    PrerequisiteMissing(String),

    #[error("Команда не найдена: {0}")]
    CommandNotFound(String),

    #[error("Не удалось активировать окно {window} приложения '{app}'")]
    ActivationFailure { app: String, window: String },

    #[error("Процесс '{0}' запущен, но подходящих окон нет (используйте -f для запуска нового экземпляра)")]
    ProcessRunningNoWindow(String),

    #[error("Ошибка внешней утилиты: {0}")]
    ToolFailed(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl RaiseError {
    pub fn tool_failed<T>(msg: impl Into<String>) -> Result<T> {
        Err(RaiseError::ToolFailed(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, RaiseError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! raise_error {
    (tool_failed, $($arg:tt)*) => {
        $crate::error::RaiseError::ToolFailed(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::RaiseError::Internal(format!($($arg)*))
    };
}
