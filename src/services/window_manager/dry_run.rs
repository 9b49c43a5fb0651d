use crate::error::Result;
use crate::model::{WindowId, WindowRecord, WindowTypes};
use tracing::info;

use super::r#trait::WindowManager;

/// Запросы выполняются по-настоящему, активация только логируется
pub struct DryRunWindowManager {
    inner: Box<dyn WindowManager>,
}

impl DryRunWindowManager {
    pub fn new(inner: Box<dyn WindowManager>) -> Self {
        Self { inner }
    }
}

impl WindowManager for DryRunWindowManager {
    fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        self.inner.list_windows()
    }

    fn active_window(&self) -> Result<Option<WindowId>> {
        self.inner.active_window()
    }

    fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        self.inner.window_types(id)
    }

    fn activate(&self, id: WindowId) -> Result<()> {
        info!("[DRY RUN] Активация окна {}", id);
        Ok(())
    }
}
