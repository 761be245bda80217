//! Skills catalog — declared proficiency levels and fill-width clamping.

use serde::{Deserialize, Serialize};

const MAX_PERCENT: f64 = 100.0;

/// A named skill with a declared proficiency percentage.
///
/// The percentage keeps its declared string form; rendering goes through
/// [`Skill::fill_percent`] so malformed catalog entries degrade to an empty
/// bar instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// Declared percentage, e.g. `"85"`. Optional and unvalidated.
    #[serde(default)]
    pub percent: Option<String>,
}

impl Skill {
    /// Fill width in percent, clamped to `[0, 100]`.
    ///
    /// Missing or non-numeric declarations yield 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fill_percent(&self) -> u8 {
        self.percent
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
            .clamp(0.0, MAX_PERCENT)
            .round() as u8
    }
}

/// Parse a skills catalog from its embedded JSON representation.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the document is not a
/// valid catalog.
pub fn catalog_from_json(json: &str) -> Result<Vec<Skill>, serde_json::Error> {
    serde_json::from_str(json)
}
