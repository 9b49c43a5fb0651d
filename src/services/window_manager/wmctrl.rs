use crate::error::Result;
use crate::raise_error;
use crate::model::{WindowId, WindowRecord};
use crate::utils::command::run_tool_checked;
use tracing::debug;

pub struct WmctrlClient {
    program: String,
}

impl WmctrlClient {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// `wmctrl -l -p -x`: id, рабочий стол, pid, WM_CLASS, машина, заголовок
    pub fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let stdout = run_tool_checked(&self.program, &["-l", "-p", "-x"])?;
        let windows = parse_window_list(&stdout)?;
        debug!("wmctrl вернул {} окон", windows.len());
        Ok(windows)
    }

    pub fn activate(&self, id: WindowId) -> Result<()> {
        let id = id.to_string();
        run_tool_checked(&self.program, &["-i", "-a", &id])?;
        Ok(())
    }
}

pub fn parse_window_list(stdout: &str) -> Result<Vec<WindowRecord>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_window_line)
        .collect()
}

pub fn parse_window_line(line: &str) -> Result<WindowRecord> {
    let bad_line = || raise_error!(tool_failed, "Неожиданная строка wmctrl: '{}'", line);

    let (id, rest) = next_field(line).ok_or_else(bad_line)?;
    let (desktop, rest) = next_field(rest).ok_or_else(bad_line)?;
    let (pid, rest) = next_field(rest).ok_or_else(bad_line)?;
    let (wm_class, rest) = next_field(rest).ok_or_else(bad_line)?;
    let (hostname, rest) = next_field(rest).ok_or_else(bad_line)?;

    let desktop: i32 = desktop.parse().map_err(|_| bad_line())?;
    let pid: u32 = pid.parse().map_err(|_| bad_line())?;
    let (instance, class) = split_wm_class(wm_class);

    let mut window = WindowRecord::new(id.parse()?)
        .with_hostname(hostname)
        .with_title(rest.trim());
    // wmctrl пишет 0, если у окна нет _NET_WM_PID
    window.pid = (pid != 0).then_some(pid);
    window.desktop = desktop;
    window.instance = instance.to_string();
    window.class = class.to_string();

    Ok(window)
}

fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}

/// Делит `instance.Class` на части.
///
/// В обеих частях могут быть точки (`org.gnome.Nautilus.Org.gnome.Nautilus`),
/// поэтому сначала ищем симметричное деление, иначе режем по последней точке.
/// Класс сохраняется целиком, часть после последней точки учитывает `MatchCriteria`.
pub fn split_wm_class(wm_class: &str) -> (&str, &str) {
    if wm_class == "N/A" {
        return ("", "");
    }

    let symmetric = wm_class
        .match_indices('.')
        .map(|(i, _)| i)
        .find(|&i| wm_class[..i].eq_ignore_ascii_case(&wm_class[i + 1..]));

    match symmetric.or_else(|| wm_class.rfind('.')) {
        Some(i) => (&wm_class[..i], &wm_class[i + 1..]),
        None => ("", wm_class),
    }
}
