pub mod action;
pub use action::*;

pub mod position;
pub use position::*;

pub mod spot;
pub use spot::*;
