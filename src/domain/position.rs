//! Player position classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The four position classes a player can occupy.
///
/// Declaration order is the canonical display order (GK, DEF, MID, FWD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// All positions in canonical order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Outfield positions in formation order (DEF, MID, FWD).
    pub const OUTFIELD: [Position; 3] = [
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Short code used on the wire and in output.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }

    /// Dense index in `0..4`, matching [`Position::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Goalkeeper => 0,
            Self::Defender => 1,
            Self::Midfielder => 2,
            Self::Forward => 3,
        }
    }

    /// Map the upstream numeric element type (1=GK .. 4=FWD).
    pub fn from_element_type(element_type: u8) -> Result<Self, DomainError> {
        match element_type {
            1 => Ok(Self::Goalkeeper),
            2 => Ok(Self::Defender),
            3 => Ok(Self::Midfielder),
            4 => Ok(Self::Forward),
            other => Err(DomainError::UnknownPosition {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "GK" | "GKP" => Ok(Self::Goalkeeper),
            "DEF" => Ok(Self::Defender),
            "MID" => Ok(Self::Midfielder),
            "FWD" => Ok(Self::Forward),
            _ => match trimmed.parse::<u8>() {
                Ok(element_type) => Self::from_element_type(element_type),
                Err(_) => Err(DomainError::UnknownPosition {
                    value: trimmed.to_string(),
                }),
            },
        }
    }
}

/// A small fixed map keyed by [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerPosition<T> {
    pub gk: T,
    pub def: T,
    pub mid: T,
    pub fwd: T,
}

impl<T: Copy> PerPosition<T> {
    /// Create a map with the same value at every position.
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self {
            gk: value,
            def: value,
            mid: value,
            fwd: value,
        }
    }

    /// Read the value for a position.
    #[must_use]
    pub fn get(&self, position: Position) -> T {
        match position {
            Position::Goalkeeper => self.gk,
            Position::Defender => self.def,
            Position::Midfielder => self.mid,
            Position::Forward => self.fwd,
        }
    }

    /// Mutable access to the value for a position.
    pub fn get_mut(&mut self, position: Position) -> &mut T {
        match position {
            Position::Goalkeeper => &mut self.gk,
            Position::Defender => &mut self.def,
            Position::Midfielder => &mut self.mid,
            Position::Forward => &mut self.fwd,
        }
    }
}
