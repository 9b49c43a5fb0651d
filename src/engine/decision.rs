use std::collections::HashSet;
use tracing::debug;

use super::selector::{select_window, Direction};
use crate::error::{RaiseError, Result};
use crate::model::{Invocation, WindowId, WindowRecord};
use crate::raise_error;

/// Итоговое действие одного запуска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Напечатать найденные окна и выйти
    List,
    Activate(WindowId),
    Launch,
}

/// Решает, что делать: показать список, активировать окно или запустить процесс.
///
/// Активное окно запрашивается лениво, только когда действительно есть что активировать.
pub fn decide<F>(
    invocation: &Invocation,
    windows: &[&WindowRecord],
    process_ids: &HashSet<u32>,
    active_window: F,
) -> Result<Decision>
where
    F: FnOnce() -> Result<Option<WindowId>>,
{
    if invocation.list {
        return Ok(Decision::List);
    }

    let needs_passthrough = invocation.needs_passthrough();

    if !windows.is_empty() && !needs_passthrough {
        let ids: Vec<WindowId> = windows.iter().map(|w| w.id).collect();
        let active = active_window()?;
        let direction = Direction::from_reverse(invocation.reverse);

        debug!(
            "Выбор окна: кандидатов {}, активное {:?}, направление {:?}",
            ids.len(),
            active,
            direction
        );

        return select_window(&ids, active, direction)
            .map(Decision::Activate)
            .ok_or_else(|| raise_error!(internal, "Пустой список окон"));
    }

    if !process_ids.is_empty() && !invocation.force && !needs_passthrough {
        return Err(RaiseError::ProcessRunningNoWindow(
            invocation.process_name().to_string(),
        ));
    }

    Ok(Decision::Launch)
}
