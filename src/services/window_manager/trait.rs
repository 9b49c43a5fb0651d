use crate::config::Config;
use crate::error::Result;
use crate::model::{WindowId, WindowRecord, WindowTypes};

use super::dry_run::DryRunWindowManager;
use super::wmctrl::WmctrlClient;
use super::xprop::XpropClient;

/// Доступ к оконному менеджеру: список окон, активное окно, типы окон, активация
pub trait WindowManager {
    /// Все окна в порядке, который отдаёт оконный менеджер
    fn list_windows(&self) -> Result<Vec<WindowRecord>>;

    fn active_window(&self) -> Result<Option<WindowId>>;

    /// Пустой набор, если у окна нет подсказки типа
    fn window_types(&self, id: WindowId) -> Result<WindowTypes>;

    fn activate(&self, id: WindowId) -> Result<()>;
}

/// Реализация для X11: wmctrl для списка и активации, xprop для свойств
pub struct X11WindowManager {
    wmctrl: WmctrlClient,
    xprop: XpropClient,
}

impl X11WindowManager {
    pub fn new(config: &Config) -> Self {
        Self {
            wmctrl: WmctrlClient::new(&config.tools.wmctrl),
            xprop: XpropClient::new(&config.tools.xprop),
        }
    }
}

impl WindowManager for X11WindowManager {
    fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        self.wmctrl.list_windows()
    }

    fn active_window(&self) -> Result<Option<WindowId>> {
        self.xprop.active_window()
    }

    fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        self.xprop.window_types(id)
    }

    fn activate(&self, id: WindowId) -> Result<()> {
        self.wmctrl.activate(id)
    }
}

/// Factory function to create an appropriate window manager based on the dry_run flag
pub fn create_window_manager(config: &Config, dry_run: bool) -> Box<dyn WindowManager> {
    let real = X11WindowManager::new(config);
    if dry_run {
        Box::new(DryRunWindowManager::new(Box::new(real)))
    } else {
        Box::new(real)
    }
}
