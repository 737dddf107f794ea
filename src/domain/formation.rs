//! Starting-eleven shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::position::Position;

/// Outfield slots in every formation; the goalkeeper makes eleven.
pub const OUTFIELD_SLOTS: u32 = 10;

/// A (DEF, MID, FWD) count triple plus one goalkeeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Formation {
    def: u32,
    mid: u32,
    fwd: u32,
}

/// Canonical formation order. Earlier entries win total-score ties.
pub const DEFAULT_FORMATIONS: [Formation; 5] = [
    Formation::new(3, 4, 3),
    Formation::new(3, 5, 2),
    Formation::new(4, 4, 2),
    Formation::new(4, 3, 3),
    Formation::new(5, 3, 2),
];

impl Formation {
    /// Create a formation from outfield counts.
    #[must_use]
    pub const fn new(def: u32, mid: u32, fwd: u32) -> Self {
        Self { def, mid, fwd }
    }

    /// Number of starters required at a position.
    #[must_use]
    pub const fn slots(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => 1,
            Position::Defender => self.def,
            Position::Midfielder => self.mid,
            Position::Forward => self.fwd,
        }
    }

    /// Total outfield players.
    #[must_use]
    pub const fn outfield(&self) -> u32 {
        self.def + self.mid + self.fwd
    }

    /// Total starters including the goalkeeper.
    #[must_use]
    pub const fn starters(&self) -> u32 {
        self.outfield() + 1
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.def, self.mid, self.fwd)
    }
}

/// Error parsing a `D-M-F` formation string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid formation '{0}', expected D-M-F such as 4-4-2")]
pub struct ParseFormationError(String);

impl FromStr for Formation {
    type Err = ParseFormationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts: Vec<u32> = s
            .trim()
            .split('-')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseFormationError(s.to_string()))?;

        match counts.as_slice() {
            [def, mid, fwd] => Ok(Self::new(*def, *mid, *fwd)),
            _ => Err(ParseFormationError(s.to_string())),
        }
    }
}

impl Serialize for Formation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Formation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
