//! Window resolution engine: responsibility and boundaries
//!
//! Pure functions over the snapshot gathered at the start of one invocation.
//! Nothing here talks to the window manager or the process table directly;
//! external queries arrive as already-collected records or as closures.

pub mod decision;
pub mod filter;
pub mod selector;

pub use decision::{decide, Decision};
pub use filter::filter_windows;
