pub mod bridge;
pub use bridge::*;

pub mod config;
pub use config::*;

pub mod invocation;
pub use invocation::*;

pub mod output;
pub use output::*;

pub mod precomputed;
pub use precomputed::*;

pub mod runner;
pub use runner::*;

pub mod solution;
pub use solution::*;

pub mod strategy;
pub use strategy::*;
