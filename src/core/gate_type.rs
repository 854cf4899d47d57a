use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural role of a gate, decided from its own arity and table only.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    Input = 0,
    Constant = 1, // arity 0, affirms a fixed value
    Passthru = 2, // arity 1, table [0 1]
    Not = 3,      // arity 1, table [1 0]
    General = 4,
}

impl GateKind {
    pub const ALL: [GateKind; 5] = [
        GateKind::Input,
        GateKind::Constant,
        GateKind::Passthru,
        GateKind::Not,
        GateKind::General,
    ];

    /// Whether the resolver may drop a gate of this kind
    pub fn is_eliminable(&self) -> bool {
        matches!(self, Self::Passthru)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Input => "input",
            GateKind::Constant => "constant",
            GateKind::Passthru => "passthru",
            GateKind::Not => "not",
            GateKind::General => "general",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind tally, indexed by `GateKind as usize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCount(pub [u64; 5]);

impl GateCount {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, kind: GateKind) {
        self.0[kind as usize] += 1;
    }

    pub fn get(&self, kind: GateKind) -> u64 {
        self.0[kind as usize]
    }

    pub fn total_gate_count(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Gates that carry a computation in the destination format
    pub fn computing_gate_count(&self) -> u64 {
        self.get(GateKind::Not) + self.get(GateKind::General)
    }
}

impl<'g> FromIterator<&'g crate::Gate> for GateCount {
    fn from_iter<I: IntoIterator<Item = &'g crate::Gate>>(iter: I) -> Self {
        let mut count = Self::zero();
        iter.into_iter().for_each(|gate| count.handle(gate.kind()));
        count
    }
}

impl fmt::Display for GateCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in GateKind::ALL {
            write!(f, "{kind}={} ", self.get(kind))?;
        }
        write!(f, "total={}", self.total_gate_count())
    }
}
