pub mod classify;
pub mod render;

pub use classify::{SeverityTier, classify};
pub use render::{Badge, format_score, render_badge, render_badge_escaped};
