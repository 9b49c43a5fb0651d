use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::error::RaiseError;
use crate::raise_error;

/// Идентификатор X11 окна
///
/// Хранится числом: `0x3a00007` от xprop и `0x03a00007` от wmctrl - одно и то же окно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl WindowId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl FromStr for WindowId {
    type Err = RaiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse::<u64>(),
        };
        parsed
            .map(WindowId)
            .map_err(|_| raise_error!(tool_failed, "Неверный идентификатор окна: '{}'", s))
    }
}

/// Тип окна по _NET_WM_WINDOW_TYPE
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowType {
    Normal,
    Dialog,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Desktop,
    Other(String),
}

/// Обычно у окна один-два типа, поэтому без аллокаций
pub type WindowTypes = SmallVec<[WindowType; 2]>;

impl WindowType {
    /// Принимает как короткое имя (`dialog`), так и атом (`_NET_WM_WINDOW_TYPE_DIALOG`)
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        let short = name
            .strip_prefix("_NET_WM_WINDOW_TYPE_")
            .unwrap_or(name)
            .to_lowercase();

        match short.as_str() {
            "normal" => WindowType::Normal,
            "dialog" => WindowType::Dialog,
            "dock" => WindowType::Dock,
            "toolbar" => WindowType::Toolbar,
            "menu" => WindowType::Menu,
            "utility" => WindowType::Utility,
            "splash" => WindowType::Splash,
            "desktop" => WindowType::Desktop,
            _ => WindowType::Other(short),
        }
    }
}

/// Снимок одного окна из списка оконного менеджера
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowRecord {
    pub id: WindowId,
    pub hostname: String,
    pub pid: Option<u32>,
    /// -1 для окон, видимых на всех рабочих столах
    pub desktop: i32,
    pub instance: String,
    pub class: String,
    pub title: String,
}

impl WindowRecord {
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            hostname: String::new(),
            pid: None,
            desktop: 0,
            instance: String::new(),
            class: String::new(),
            title: String::new(),
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Полное значение WM_CLASS в виде `instance.Class`
    pub fn wm_class(&self) -> String {
        if self.instance.is_empty() {
            self.class.clone()
        } else {
            format!("{}.{}", self.instance, self.class)
        }
    }
}

#[cfg(test)]
impl WindowRecord {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pid = self.pid.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} {:>2} {:>7} {} {} {}",
            self.id,
            self.desktop,
            pid,
            self.hostname,
            self.wm_class(),
            self.title
        )
    }
}
