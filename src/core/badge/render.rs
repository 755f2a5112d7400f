use std::borrow::Cow;

use crate::core::badge::classify::{SeverityTier, classify};

/// Text shown on the left half of every badge
pub const BADGE_LABEL: &str = "mutation score";

pub const BADGE_WIDTH: u32 = 128;
pub const BADGE_HEIGHT: u32 = 20;
pub const LABEL_WIDTH: u32 = 93;
pub const VALUE_WIDTH: u32 = BADGE_WIDTH - LABEL_WIDTH;
pub const CORNER_RADIUS: u32 = 3;
pub const LABEL_FILL: &str = "#555";

// Text coordinates are expressed at 10x scale, see `transform="scale(.1)"`
const LABEL_TEXT_X: u32 = 475;
const LABEL_TEXT_LENGTH: u32 = 830;
const VALUE_TEXT_X: u32 = 1095;
const VALUE_TEXT_LENGTH: u32 = 250;

/// Render the badge document.
///
/// `label`, `value` and `color` are interpolated verbatim; the caller must make
/// sure none of them carries markup. The visible label always reads
/// [`BADGE_LABEL`], only the shadow layer and the title echo `label`.
pub fn render_badge(label: &str, value: &str, color: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{BADGE_WIDTH}" height="{BADGE_HEIGHT}" role="img" aria-label="{label}: {value}">
    <title>{label}: {value}</title>
    <linearGradient id="s" x2="0" y2="100%">
        <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
        <stop offset="1" stop-opacity=".1"/>
    </linearGradient>
    <clipPath id="r">
        <rect width="{BADGE_WIDTH}" height="{BADGE_HEIGHT}" rx="{CORNER_RADIUS}" fill="#fff"/>
    </clipPath>
    <g clip-path="url(#r)">
        <rect width="{LABEL_WIDTH}" height="{BADGE_HEIGHT}" fill="{LABEL_FILL}"/>
        <rect x="{LABEL_WIDTH}" width="{VALUE_WIDTH}" height="{BADGE_HEIGHT}" fill="{color}"/>
        <rect width="{BADGE_WIDTH}" height="{BADGE_HEIGHT}" fill="url(#s)"/>
    </g>
    <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif"
       text-rendering="geometricPrecision" font-size="110">
        <text aria-hidden="true" x="{LABEL_TEXT_X}" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)"
              textLength="{LABEL_TEXT_LENGTH}">{label}
        </text>
        <text x="{LABEL_TEXT_X}" y="140" transform="scale(.1)" fill="#fff" textLength="{LABEL_TEXT_LENGTH}">{BADGE_LABEL}</text>
        <text aria-hidden="true" x="{VALUE_TEXT_X}" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)"
              textLength="{VALUE_TEXT_LENGTH}">{value}
        </text>
        <text x="{VALUE_TEXT_X}" y="140" transform="scale(.1)" fill="#fff" textLength="{VALUE_TEXT_LENGTH}">{value}</text>
    </g>
</svg>"##
    )
}

/// Same document as [`render_badge`], with every interpolated string
/// XML-escaped first. Output differs from `render_badge` only when an input
/// contains one of `& < > " '`.
pub fn render_badge_escaped(label: &str, value: &str, color: &str) -> String {
    render_badge(
        &escape_markup(label),
        &escape_markup(value),
        &escape_markup(color),
    )
}

pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Floor the score to a whole percentage and append `%`.
pub fn format_score(score: f64) -> String {
    let floored = score.floor();
    if floored.is_nan() {
        "NaN%".to_string()
    } else if floored.is_infinite() {
        if floored > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        }
    } else {
        // adding 0.0 turns -0 into 0
        format!("{}%", floored + 0.0)
    }
}

/// A badge for one mutation score, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
    pub value: String,
    pub tier: SeverityTier,
}

impl Badge {
    pub fn for_score(score: f64) -> Self {
        Self {
            label: BADGE_LABEL.to_string(),
            value: format_score(score),
            tier: classify(score),
        }
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    pub fn render(&self, escape: bool) -> String {
        if escape {
            render_badge_escaped(&self.label, &self.value, self.color())
        } else {
            render_badge(&self.label, &self.value, self.color())
        }
    }
}
