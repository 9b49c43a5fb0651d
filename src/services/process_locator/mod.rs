mod pgrep;
mod scan;
mod r#trait;

pub use self::r#trait::{create_process_locator, ProcessLocator};
