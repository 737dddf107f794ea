//! Player source port.
//!
//! The scoring provider sits outside the core: it fetches raw data, runs the
//! regression pipeline and hands over one value score per player. The core
//! only sees the records described here and never learns which model
//! produced a score.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;

/// One scored player as delivered by the scoring provider, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRecord {
    /// Unique player identifier.
    pub id: u32,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Position code (`GK`, `DEF`, `MID`, `FWD`) or element type `1..=4`.
    #[serde(alias = "element_type", deserialize_with = "position_code")]
    pub position: String,

    /// Club identifier.
    pub team: String,

    /// Price in currency units.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Predicted value score.
    #[serde(alias = "expected_points", with = "rust_decimal::serde::float")]
    pub score: Decimal,
}

/// Accept the position either as a string code or as a bare number.
fn position_code<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Code(String),
        ElementType(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Code(code) => code,
        Raw::ElementType(n) => n.to_string(),
    })
}

/// Supplies the scored player pool for one request.
pub trait PlayerSource: Send + Sync {
    /// Return the source name for logging.
    fn name(&self) -> &str;

    /// Load every scored player record.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or decoded.
    fn load(&self) -> Result<Vec<PlayerRecord>>;
}
