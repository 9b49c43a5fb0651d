use crate::config::Config;
use crate::error::Result;
use std::collections::HashSet;
use tracing::{debug, info};

use super::pgrep::PgrepLocator;
use super::scan::ScanLocator;

/// Поиск pid процессов по имени команды
pub trait ProcessLocator {
    fn name(&self) -> &'static str;

    /// Процессы, у которых имя команды равно `identifier` или командная строка
    /// (без пути у первого слова) начинается с `identifier` на границе слова
    fn locate(&self, identifier: &str) -> Result<HashSet<u32>>;
}

/// Выбирает способ поиска один раз при старте
pub fn create_process_locator(config: &Config) -> Box<dyn ProcessLocator> {
    let locator: Box<dyn ProcessLocator> = match config.lookup.process_lookup.as_str() {
        "pgrep" => Box::new(PgrepLocator::new(&config.tools.pgrep)),
        "scan" => Box::new(ScanLocator::new()),
        _ => {
            if which::which(&config.tools.pgrep).is_ok() {
                Box::new(PgrepLocator::new(&config.tools.pgrep))
            } else {
                debug!("{} не найден, используем просмотр таблицы процессов", config.tools.pgrep);
                Box::new(ScanLocator::new())
            }
        }
    };

    info!("Поиск процессов: {}", locator.name());
    locator
}

/// Совпадает ли командная строка с `identifier`.
///
/// Путь у первого слова отбрасывается: `/usr/lib/firefox/firefox -P x` -> `firefox -P x`.
pub fn command_matches(command_line: &str, identifier: &str) -> bool {
    if identifier.is_empty() {
        return false;
    }

    let command_line = command_line.trim_start();
    let first_end = command_line
        .find(char::is_whitespace)
        .unwrap_or(command_line.len());
    let stripped_start = command_line[..first_end]
        .rfind('/')
        .map(|i| i + 1)
        .unwrap_or(0);
    let stripped = &command_line[stripped_start..];

    match stripped.strip_prefix(identifier) {
        Some(rest) => rest.chars().next().map_or(true, |c| !is_word_char(c)),
        None => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
