pub mod buckets;
pub use buckets::*;

pub mod key;
pub use key::*;

pub mod mapping;
pub use mapping::*;
