use crate::error::{RaiseError, Result};
use crate::utils::command::run_tool;
use std::collections::HashSet;
use tracing::debug;

use super::r#trait::ProcessLocator;

/// Быстрый поиск через pgrep
pub struct PgrepLocator {
    program: String,
}

impl PgrepLocator {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn query(&self, args: &[&str]) -> Result<HashSet<u32>> {
        let output = run_tool(&self.program, args)?;

        // 1 - ничего не найдено, это не ошибка
        match output.status.code() {
            Some(0) => Ok(parse_pids(&String::from_utf8_lossy(&output.stdout))),
            Some(1) => Ok(HashSet::new()),
            _ => RaiseError::tool_failed(format!(
                "{} вернул {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )),
        }
    }
}

impl ProcessLocator for PgrepLocator {
    fn name(&self) -> &'static str {
        "pgrep"
    }

    fn locate(&self, identifier: &str) -> Result<HashSet<u32>> {
        let mut pids = self.query(&["-x", "--", &escape_ere(identifier)])?;
        let pattern = command_line_pattern(identifier);
        pids.extend(self.query(&["-f", "--", &pattern])?);
        pids.remove(&std::process::id());

        debug!("pgrep нашёл {} процессов '{}'", pids.len(), identifier);
        Ok(pids)
    }
}

/// POSIX ERE для командной строки: необязательный путь, имя, граница слова
pub fn command_line_pattern(identifier: &str) -> String {
    format!(
        "^([^[:space:]]*/)?{}([^[:alnum:]_]|$)",
        escape_ere(identifier)
    )
}

fn escape_ere(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '.' | '[' | ']' | '(' | ')' | '*' | '+' | '?' | '{' | '}' | '|' | '^' | '$' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn parse_pids(stdout: &str) -> HashSet<u32> {
    stdout
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::scan::ScanLocator;
    use super::*;
    use std::process::{Command, Stdio};

    #[test]
    fn test_command_line_pattern() {
        assert_eq!(
            command_line_pattern("firefox"),
            "^([^[:space:]]*/)?firefox([^[:alnum:]_]|$)"
        );
        assert_eq!(
            command_line_pattern("g++.sh"),
            "^([^[:space:]]*/)?g\\+\\+\\.sh([^[:alnum:]_]|$)"
        );
    }

    #[test]
    fn test_escape_ere() {
        assert_eq!(escape_ere("s.eep"), "s\\.eep");
        assert_eq!(escape_ere("foo["), "foo\\[");
        assert_eq!(escape_ere("a(b)"), "a\\(b\\)");
        assert_eq!(escape_ere("firefox"), "firefox");
    }

    #[test]
    fn test_pgrep_and_scan_agree_on_special_characters() {
        let mut child = Command::new("sleep")
            .arg("30")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn test process");

        let pgrep = PgrepLocator::new("pgrep");
        let scan = ScanLocator::new();
        let lookup = |identifier: &str| {
            let by_pgrep = pgrep.locate(identifier).map(|pids| pids.contains(&child.id()));
            let by_scan = scan.locate(identifier).map(|pids| pids.contains(&child.id()));
            (by_pgrep, by_scan)
        };

        let plain = lookup("sleep");
        let dot = lookup("s.eep");
        let bracket = lookup("foo[");

        let _ = child.kill();
        let _ = child.wait();

        assert!(plain.0.unwrap());
        assert!(plain.1.unwrap());
        // точка не должна совпадать с любым символом
        assert!(!dot.0.unwrap());
        assert!(!dot.1.unwrap());
        // незакрытая скобка не ломает pgrep
        assert!(!bracket.0.unwrap());
        assert!(!bracket.1.unwrap());
    }

    #[test]
    fn test_parse_pids() {
        let pids = parse_pids("123\n456\n\nnot-a-pid\n123\n");
        assert_eq!(pids, HashSet::from([123, 456]));
    }
}
