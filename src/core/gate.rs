use serde::{Deserialize, Serialize};

pub use crate::GateKind;
use crate::WireId;

/// Largest arity the destination lookup primitives can express
pub const MAX_ARITY: usize = 3;

/// One wire's defining computation.
///
/// Primary inputs carry no table and no inputs. Every other gate holds a
/// truth table of exactly `2^arity` entries, indexed by its input bits read
/// as a binary number with `inputs[0]` as the most significant bit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub wire: WireId,
    pub is_input: bool,
    pub is_output: bool,
    pub table: Vec<bool>,
    pub inputs: Vec<WireId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Gate {
    #[must_use]
    pub fn input(wire: WireId) -> Self {
        Self {
            wire,
            is_input: true,
            is_output: false,
            table: Vec::new(),
            inputs: Vec::new(),
            comment: None,
        }
    }

    #[must_use]
    pub fn new(wire: WireId, table: Vec<bool>, inputs: Vec<WireId>) -> Self {
        debug_assert_eq!(table.len(), 1 << inputs.len());
        Self {
            wire,
            is_input: false,
            is_output: false,
            table,
            inputs,
            comment: None,
        }
    }

    #[must_use]
    pub fn constant(wire: WireId, value: bool) -> Self {
        Self::new(wire, vec![value], vec![])
    }

    #[must_use]
    pub fn passthru(wire: WireId, input: WireId) -> Self {
        Self::new(wire, vec![false, true], vec![input])
    }

    #[must_use]
    pub fn not(wire: WireId, input: WireId) -> Self {
        Self::new(wire, vec![true, false], vec![input])
    }

    #[must_use]
    pub fn with_output(mut self) -> Self {
        self.is_output = true;
        self
    }

    /// Number of input wires, `None` for a primary input
    pub fn arity(&self) -> Option<usize> {
        (!self.is_input).then_some(self.inputs.len())
    }

    /// Does the gate restrict its wire to a fixed value?
    pub fn is_constant(&self) -> bool {
        self.arity() == Some(0)
    }

    /// Does the gate copy its single input bit unchanged?
    pub fn is_passthru(&self) -> bool {
        self.arity() == Some(1) && self.table == [false, true]
    }

    /// Does the gate output the complement of its single input bit?
    pub fn is_not(&self) -> bool {
        self.arity() == Some(1) && self.table == [true, false]
    }

    pub fn kind(&self) -> GateKind {
        if self.is_input {
            GateKind::Input
        } else if self.is_constant() {
            GateKind::Constant
        } else if self.is_passthru() {
            GateKind::Passthru
        } else if self.is_not() {
            GateKind::Not
        } else {
            GateKind::General
        }
    }

    /// Look up the table entry selected by `values`, given in `inputs` order.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        debug_assert!(!self.is_input);
        debug_assert_eq!(values.len(), self.inputs.len());

        let index = values
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));

        self.table[index]
    }
}
