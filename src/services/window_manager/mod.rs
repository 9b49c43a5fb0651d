//! Window manager access: responsibility and boundaries
//!
//! This module and its submodules ONLY query the window manager (window list,
//! active window, window types) and ask it to activate a window. Matching,
//! filtering and selection live in the engine and never call these tools directly.

mod dry_run;
mod wmctrl;
mod xprop;
mod r#trait;

pub use self::r#trait::{create_window_manager, WindowManager};
