pub mod cache;
pub use cache::*;

pub mod entry;
pub use entry::*;

pub mod stats;
pub use stats::*;

pub mod store;
pub use store::*;
