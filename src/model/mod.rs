pub mod criteria;
pub mod invocation;
pub mod window;

pub use criteria::MatchCriteria;
pub use invocation::Invocation;
pub use window::{WindowId, WindowRecord, WindowType, WindowTypes};
