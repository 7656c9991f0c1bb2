//! The TTL cache and its building blocks.
//!
//! [`TimedCache`] is the concrete store; [`Cache`] is the trait it implements,
//! and [`Clock`] is the time source it checks deadlines against.

pub mod clock;
pub mod item;
pub mod timed_cache;
pub mod traits;

pub use clock::{Clock, ManualClock, SystemClock};
pub use item::Item;
pub use timed_cache::TimedCache;
pub use traits::Cache;
