use crate::model::WindowId;

/// Направление циклического перебора окон
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// Выбирает окно для активации, как alt-tab.
///
/// Вперёд - следующее после активного, назад - предыдущее, с переходом через край.
/// Если активное окно не из списка: вперёд - первое, назад - последнее.
/// `None` только для пустого списка.
pub fn select_window(
    ids: &[WindowId],
    active: Option<WindowId>,
    direction: Direction,
) -> Option<WindowId> {
    let len = ids.len();
    if len == 0 {
        return None;
    }

    let position = active.and_then(|active| ids.iter().position(|&id| id == active));

    let index = match (direction, position) {
        (Direction::Forward, Some(i)) => (i + 1) % len,
        (Direction::Forward, None) => 0,
        (Direction::Reverse, Some(i)) => (i + len - 1) % len,
        (Direction::Reverse, None) => len - 1,
    };

    Some(ids[index])
}
