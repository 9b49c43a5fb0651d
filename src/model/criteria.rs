use std::collections::HashSet;

use super::window::WindowRecord;

/// Критерии сопоставления окон с приложением, строятся один раз за запуск
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    target_class_lower: String,
    target_pids: HashSet<u32>,
}

impl MatchCriteria {
    /// `fallback` используется, если класс пустой - класс никогда не бывает пустым
    pub fn new(target_class: &str, fallback: &str, target_pids: HashSet<u32>) -> Self {
        let class = if target_class.trim().is_empty() {
            fallback
        } else {
            target_class
        };

        Self {
            target_class_lower: class.trim().to_lowercase(),
            target_pids,
        }
    }

    pub fn target_class(&self) -> &str {
        &self.target_class_lower
    }

    pub fn target_pids(&self) -> &HashSet<u32> {
        &self.target_pids
    }

    /// Сравнивается и весь класс, и его часть после последней точки
    /// (`Org.gnome.Nautilus` подходит и для `nautilus`)
    pub fn matches_class(&self, window: &WindowRecord) -> bool {
        let class = window.class.to_lowercase();
        class == self.target_class_lower
            || class
                .rsplit_once('.')
                .is_some_and(|(_, last)| last == self.target_class_lower)
    }

    /// pid имеет смысл только для окон с этой же машины
    pub fn matches_pid(&self, window: &WindowRecord, local_hostname: &str) -> bool {
        window.hostname.eq_ignore_ascii_case(local_hostname)
            && window.pid.is_some_and(|pid| self.target_pids.contains(&pid))
    }

    pub fn matches(&self, window: &WindowRecord, local_hostname: &str) -> bool {
        self.matches_class(window) || self.matches_pid(window, local_hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowId;

    #[test]
    fn test_class_match_is_case_insensitive() {
        let criteria = MatchCriteria::new("Firefox", "firefox", HashSet::new());
        let window = WindowRecord::new(WindowId(1)).with_class("FIREFOX");
        assert!(criteria.matches_class(&window));
    }

    #[test]
    fn test_dotted_class_matches_last_segment() {
        let window = WindowRecord::new(WindowId(1)).with_class("Org.gnome.Nautilus");

        for target in ["nautilus", "org.gnome.nautilus", "Nautilus"] {
            let criteria = MatchCriteria::new(target, target, HashSet::new());
            assert!(criteria.matches_class(&window), "{}", target);
        }

        let criteria = MatchCriteria::new("gnome", "gnome", HashSet::new());
        assert!(!criteria.matches_class(&window));
    }

    #[test]
    fn test_empty_class_falls_back() {
        let criteria = MatchCriteria::new("  ", "alacritty", HashSet::new());
        assert_eq!(criteria.target_class(), "alacritty");
    }

    #[test]
    fn test_pid_match_requires_local_host() {
        let criteria = MatchCriteria::new("nomatch", "nomatch", HashSet::from([100]));
        let local = WindowRecord::new(WindowId(1))
            .with_class("Emacs")
            .with_pid(100)
            .with_hostname("Workstation");
        let remote = local.clone().with_hostname("server");
        let unknown_pid = WindowRecord::new(WindowId(2)).with_hostname("workstation");

        assert!(criteria.matches(&local, "workstation"));
        assert!(!criteria.matches(&remote, "workstation"));
        assert!(!criteria.matches(&unknown_pid, "workstation"));
    }
}
