pub mod repositories;
pub mod time;
pub mod util;

pub use repositories::{InMemorySlugStore, KeyAssignable, SharedHistory};
pub use time::SystemClock;
pub use util::DefaultSlugifier;
