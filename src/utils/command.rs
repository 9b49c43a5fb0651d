use crate::error::{RaiseError, Result};
use crate::raise_error;
use std::process::{Command, Output};
use tracing::debug;

/// Запускает внешнюю утилиту и дожидается её вывода
pub fn run_tool(program: &str, args: &[&str]) -> Result<Output> {
    debug!("Запуск: {} {}", program, args.join(" "));

    Command::new(program).args(args).output().map_err(|e| {
        debug!("{} не найден или не запускается: {}", program, e);
        raise_error!(tool_failed, "{} не запускается: {}", program, e)
    })
}

/// Как `run_tool`, но ненулевой код возврата считается ошибкой
pub fn run_tool_checked(program: &str, args: &[&str]) -> Result<String> {
    let output = run_tool(program, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("{} вернул ошибку: {}", program, stderr.trim());
        return RaiseError::tool_failed(format!(
            "{} {} вернул {}: {}",
            program,
            args.join(" "),
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
