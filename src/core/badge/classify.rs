use strum::{Display, EnumIter};

/// Scores strictly above this are good
pub const GOOD_SCORE: f64 = 75.0;
/// Scores strictly above this (and not good) are okay
pub const OKAY_SCORE: f64 = 65.0;

pub const GREEN: &str = "#97ca00";
pub const YELLOW: &str = "#dfb317";
pub const RED: &str = "#e04444";

/// Score band shown by the badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SeverityTier {
    Good,
    Okay,
    Poor,
}

impl SeverityTier {
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Good => GREEN,
            SeverityTier::Okay => YELLOW,
            SeverityTier::Poor => RED,
        }
    }
}

/// Classify a mutation score percentage.
///
/// Any value is accepted. NaN compares false against both thresholds and so
/// ends up as [`SeverityTier::Poor`].
pub fn classify(score: f64) -> SeverityTier {
    if score > GOOD_SCORE {
        SeverityTier::Good
    } else if score > OKAY_SCORE {
        SeverityTier::Okay
    } else {
        SeverityTier::Poor
    }
}
