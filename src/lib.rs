pub mod core;

// Re-export key items for easy importing in this crate
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::badge;
pub use crate::core::main_shared::run_main;
pub use crate::core::metrics::Metrics;
pub use crate::core::reporter::{BadgeReporter, Reporter};
