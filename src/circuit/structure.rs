use indexmap::IndexMap;

use super::{errors::CircuitError, evaluation};
use crate::{core::serialization::read_gates, Gate, GateCount, WireId};

/// Gates of one circuit file keyed by the wire they define.
///
/// Insertion order is file order, which the compiler emits topologically:
/// every gate only reads wires defined on earlier lines.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    gates: IndexMap<WireId, Gate>,
    gate_count: GateCount,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a circuit from the lines of a circuit file and check that every
    /// gate only reads wires defined before it.
    pub fn from_lines<I>(lines: I) -> Result<Self, CircuitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let circuit = Self::assemble(lines)?;
        circuit.validate()?;
        Ok(circuit)
    }

    /// Parse and insert every non-blank line, failing on the first bad line or
    /// repeated wire.
    pub fn assemble<I>(lines: I) -> Result<Self, CircuitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut circuit = Self::new();

        for record in read_gates(lines) {
            let (lineno, gate) = record?;
            circuit.insert(lineno, gate)?;
        }

        log::info!(
            "assemble: gates={} inputs={} outputs={}",
            circuit.len(),
            circuit.input_wires().count(),
            circuit.output_wires().count()
        );

        Ok(circuit)
    }

    fn insert(&mut self, lineno: usize, gate: Gate) -> Result<(), CircuitError> {
        if self.gates.contains_key(&gate.wire) {
            return Err(CircuitError::DuplicateWire {
                lineno,
                wire: gate.wire,
            });
        }

        self.gate_count.handle(gate.kind());
        self.gates.insert(gate.wire, gate);
        Ok(())
    }

    /// Append a gate; a duplicate is reported at its 1-based position.
    pub fn add_gate(&mut self, gate: Gate) -> Result<(), CircuitError> {
        self.insert(self.len() + 1, gate)
    }

    /// Check referential integrity: every input names a wire defined strictly
    /// earlier in file order.
    pub fn validate(&self) -> Result<(), CircuitError> {
        for (position, gate) in self.gates.values().enumerate() {
            for &input in &gate.inputs {
                match self.gates.get_index_of(&input) {
                    None => {
                        return Err(CircuitError::DanglingInput {
                            wire: gate.wire,
                            missing_input: input,
                        })
                    }
                    Some(defined_at) if defined_at >= position => {
                        return Err(CircuitError::ForwardReference {
                            wire: gate.wire,
                            input,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }

    pub fn get(&self, wire: WireId) -> Option<&Gate> {
        self.gates.get(&wire)
    }

    pub fn contains(&self, wire: WireId) -> bool {
        self.gates.contains_key(&wire)
    }

    /// Gates in file order
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.values()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn input_wires(&self) -> impl Iterator<Item = WireId> + '_ {
        self.gates().filter(|g| g.is_input).map(|g| g.wire)
    }

    pub fn output_wires(&self) -> impl Iterator<Item = WireId> + '_ {
        self.gates().filter(|g| g.is_output).map(|g| g.wire)
    }

    pub fn gate_count(&self) -> &GateCount {
        &self.gate_count
    }

    /// Evaluate the circuit on plain booleans, returning every output wire's
    /// value in file order.
    pub fn simple_evaluate(
        &self,
        get_input: impl Fn(WireId) -> Option<bool>,
    ) -> Result<Vec<(WireId, bool)>, evaluation::Error> {
        evaluation::simple_evaluate(self.gates(), get_input)
    }
}
