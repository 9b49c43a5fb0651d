use crate::debug_if_enabled;
use crate::error::Result;
use crate::model::{MatchCriteria, WindowId, WindowRecord, WindowType, WindowTypes};

/// Отбирает окна приложения, с которыми можно взаимодействовать.
///
/// Сначала дешёвое сопоставление в памяти (класс или pid), затем запрос типа
/// только для оставшихся окон. Порядок `windows` сохраняется.
pub fn filter_windows<'a, F>(
    windows: &'a [WindowRecord],
    criteria: &MatchCriteria,
    local_hostname: &str,
    interactable: &[WindowType],
    mut window_types: F,
) -> Result<Vec<&'a WindowRecord>>
where
    F: FnMut(WindowId) -> Result<WindowTypes>,
{
    let matched: Vec<&WindowRecord> = windows
        .iter()
        .filter(|window| criteria.matches(window, local_hostname))
        .collect();

    debug_if_enabled!(
        "Совпало окон по классу/pid: {} из {}",
        matched.len(),
        windows.len()
    );

    let mut result = Vec::with_capacity(matched.len());
    for window in matched {
        let types = window_types(window.id)?;
        if is_interactable(&types, interactable) {
            result.push(window);
        } else {
            debug_if_enabled!("Пропускаем окно {} с типами {:?}", window.id, types);
        }
    }

    Ok(result)
}

/// Окно без подсказки типа считается обычным
pub fn is_interactable(types: &[WindowType], interactable: &[WindowType]) -> bool {
    types.is_empty() || types.iter().any(|t| interactable.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    const DEFAULT_TYPES: &[WindowType] = &[WindowType::Normal, WindowType::Dialog];

    fn window(id: u64, class: &str, pid: u32) -> WindowRecord {
        WindowRecord::new(WindowId(id))
            .with_class(class)
            .with_pid(pid)
            .with_hostname("host")
    }

    fn no_types(_: WindowId) -> Result<WindowTypes> {
        Ok(WindowTypes::new())
    }

    #[test]
    fn test_class_and_pid_matching() {
        let windows = vec![
            window(1, "Firefox", 10),
            window(2, "xterm", 20),
            window(3, "Navigator", 30),
            window(4, "emacs", 40),
        ];
        let criteria = MatchCriteria::new("firefox", "firefox", HashSet::from([30]));

        let result = filter_windows(&windows, &criteria, "HOST", DEFAULT_TYPES, no_types).unwrap();
        let ids: Vec<u64> = result.iter().map(|w| w.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let windows = vec![
            window(30, "app", 1),
            window(5, "other", 1),
            window(20, "APP", 1),
            window(10, "app", 1),
        ];
        let criteria = MatchCriteria::new("app", "app", HashSet::new());

        let result = filter_windows(&windows, &criteria, "host", DEFAULT_TYPES, no_types).unwrap();
        let ids: Vec<u64> = result.iter().map(|w| w.id.value()).collect();
        assert_eq!(ids, vec![30, 20, 10]);

        // Результат - подпоследовательность исходного списка
        let mut positions = result
            .iter()
            .map(|w| windows.iter().position(|r| r.id == w.id).unwrap());
        let mut last = positions.next().unwrap();
        for pos in positions {
            assert!(pos > last);
            last = pos;
        }
    }

    #[test]
    fn test_type_filtering() {
        let windows = vec![
            window(1, "app", 1),
            window(2, "app", 1),
            window(3, "app", 1),
            window(4, "app", 1),
        ];
        let types: HashMap<u64, WindowTypes> = HashMap::from([
            (1, smallvec![WindowType::Normal]),
            (2, smallvec![WindowType::Dock]),
            (3, WindowTypes::new()),
            (4, smallvec![WindowType::Toolbar, WindowType::Dialog]),
        ]);
        let criteria = MatchCriteria::new("app", "app", HashSet::new());

        let result = filter_windows(&windows, &criteria, "host", DEFAULT_TYPES, |id| {
            Ok(types[&id.value()].clone())
        })
        .unwrap();
        let ids: Vec<u64> = result.iter().map(|w| w.id.value()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_type_query_only_for_matched_windows() {
        let windows = vec![window(1, "app", 1), window(2, "other", 2), window(3, "other", 3)];
        let criteria = MatchCriteria::new("app", "app", HashSet::new());
        let queried = RefCell::new(Vec::new());

        let result = filter_windows(&windows, &criteria, "host", DEFAULT_TYPES, |id| {
            queried.borrow_mut().push(id.value());
            Ok(WindowTypes::new())
        })
        .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(*queried.borrow(), vec![1]);
    }

    #[test]
    fn test_type_query_error_propagates() {
        let windows = vec![window(1, "app", 1)];
        let criteria = MatchCriteria::new("app", "app", HashSet::new());

        let result = filter_windows(&windows, &criteria, "host", DEFAULT_TYPES, |_| {
            crate::error::RaiseError::tool_failed("xprop")
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_result_is_valid() {
        let windows = vec![window(1, "other", 1)];
        let criteria = MatchCriteria::new("app", "app", HashSet::new());
        let result = filter_windows(&windows, &criteria, "host", DEFAULT_TYPES, no_types).unwrap();
        assert!(result.is_empty());
    }
}
