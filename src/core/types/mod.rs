pub mod config;
mod error;
mod report;

pub use error::*;
pub use report::*;
