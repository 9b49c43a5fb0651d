pub mod launcher;
pub mod process_locator;
pub mod run_or_raise;
pub mod window_manager;

pub use run_or_raise::RunOrRaise;
