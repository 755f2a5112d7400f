pub mod badge;
pub mod cli;
pub mod logging;
pub mod main_shared;
pub mod metrics;
pub mod reporter;
pub mod types;
