use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::WireId;

/// One of the two computation participants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Alice,
    Bob,
}

impl FromStr for Party {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alice" => Ok(Party::Alice),
            "Bob" => Ok(Party::Bob),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Alice => f.write_str("Alice"),
            Party::Bob => f.write_str("Bob"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    Output,
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Direction::Input),
            "output" => Ok(Direction::Output),
            _ => Err(()),
        }
    }
}

/// Named multi-bit value bound to an ordered list of wires, one per bit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub party: Party,
    pub direction: Direction,
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub wires: Vec<WireId>,
}

impl Variable {
    pub fn width(&self) -> usize {
        self.wires.len()
    }

    /// Same binding with every wire passed through `f`
    #[must_use]
    pub fn map_wires(&self, f: impl Fn(WireId) -> WireId) -> Self {
        Self {
            wires: self.wires.iter().map(|wire| f(*wire)).collect(),
            ..self.clone()
        }
    }
}
