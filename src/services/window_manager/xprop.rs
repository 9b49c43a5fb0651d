use crate::error::Result;
use crate::model::{WindowId, WindowType, WindowTypes};
use crate::utils::command::run_tool_checked;
use crate::trace_if_enabled;

pub struct XpropClient {
    program: String,
}

impl XpropClient {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn active_window(&self) -> Result<Option<WindowId>> {
        let stdout = run_tool_checked(&self.program, &["-root", "_NET_ACTIVE_WINDOW"])?;
        parse_active_window(&stdout)
    }

    pub fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        let id = id.to_string();
        let stdout = run_tool_checked(&self.program, &["-id", &id, "_NET_WM_WINDOW_TYPE"])?;
        let types = parse_window_types(&stdout);
        trace_if_enabled!("Типы окна {}: {:?}", id, types);
        Ok(types)
    }
}

/// `_NET_ACTIVE_WINDOW(WINDOW): window id # 0x3a00007`; `0x0` означает отсутствие
pub fn parse_active_window(stdout: &str) -> Result<Option<WindowId>> {
    let Some((_, value)) = stdout.split_once('#') else {
        // "_NET_ACTIVE_WINDOW:  not found."
        return Ok(None);
    };

    let first = value.split(',').next().unwrap_or("").trim();
    if first.is_empty() {
        return Ok(None);
    }

    let id: WindowId = first.parse()?;
    Ok((id.value() != 0).then_some(id))
}

/// `_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_NORMAL, ...`
pub fn parse_window_types(stdout: &str) -> WindowTypes {
    match stdout.split_once('=') {
        Some((_, atoms)) => atoms
            .split(',')
            .map(str::trim)
            .filter(|atom| !atom.is_empty())
            .map(WindowType::from_name)
            .collect(),
        None => WindowTypes::new(),
    }
}
