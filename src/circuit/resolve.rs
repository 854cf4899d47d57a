use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::{errors::CircuitError, evaluation, remap::RemapTable, structure::Circuit};
use crate::{Gate, GateCount, WireId};

/// Circuit with every eliminable passthru gate removed.
///
/// Retained gates keep file order and only read canonical wires. A wire that
/// received an output designation from an eliminated passthru is marked
/// `is_output` here even if its own line did not say so.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedCircuit {
    #[serde(serialize_with = "serialize_gates")]
    gates: IndexMap<WireId, Gate>,
    remap: RemapTable,
}

fn serialize_gates<S: Serializer>(
    gates: &IndexMap<WireId, Gate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(gates.values())
}

impl Circuit {
    /// Remove passthru gates in a single pass over file order.
    ///
    /// Each gate's inputs are first rewritten to canonical wires. A passthru
    /// gate is then dropped and its wire remapped to its input, carrying any
    /// output designation over to that input. The exception is an output
    /// passthru whose input is already an output: both outputs are kept.
    pub fn resolve(&self) -> Result<ResolvedCircuit, CircuitError> {
        log::debug!("resolve: start gates={}", self.len());

        let mut remap = RemapTable::new();
        let mut retained: IndexMap<WireId, Gate> = IndexMap::with_capacity(self.len());

        for gate in self.gates() {
            let mut gate = gate.clone();

            for input in gate.inputs.iter_mut() {
                let canonical = remap.resolve(*input);

                if !retained.contains_key(&canonical) {
                    return Err(if self.contains(*input) {
                        CircuitError::ForwardReference {
                            wire: gate.wire,
                            input: *input,
                        }
                    } else {
                        CircuitError::DanglingInput {
                            wire: gate.wire,
                            missing_input: *input,
                        }
                    });
                }

                *input = canonical;
            }

            if !gate.kind().is_eliminable() {
                retained.insert(gate.wire, gate);
                continue;
            }

            let src = gate.inputs[0];
            let Some(src_gate) = retained.get_mut(&src) else {
                return Err(CircuitError::DanglingInput {
                    wire: gate.wire,
                    missing_input: src,
                });
            };

            if gate.is_output && src_gate.is_output {
                log::debug!("resolve: keep output passthru {}<-{}", gate.wire, src);
                retained.insert(gate.wire, gate);
                continue;
            }

            if gate.is_output {
                log::debug!("resolve: output {} moves to {}", gate.wire, src);
                src_gate.is_output = true;
            }

            log::debug!("resolve: eliminate passthru {}->{}", gate.wire, src);
            remap.insert(gate.wire, src);
        }

        log::info!(
            "resolve: complete retained={} eliminated={}",
            retained.len(),
            remap.len()
        );

        Ok(ResolvedCircuit {
            gates: retained,
            remap,
        })
    }
}

impl ResolvedCircuit {
    /// Retained gates in file order
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.values()
    }

    pub fn get(&self, wire: WireId) -> Option<&Gate> {
        self.gates.get(&wire)
    }

    pub fn contains(&self, wire: WireId) -> bool {
        self.gates.contains_key(&wire)
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn remap(&self) -> &RemapTable {
        &self.remap
    }

    /// Wire that carries `wire`'s value after resolution
    pub fn canonical(&self, wire: WireId) -> WireId {
        self.remap.resolve(wire)
    }

    pub fn input_wires(&self) -> impl Iterator<Item = WireId> + '_ {
        self.gates().filter(|g| g.is_input).map(|g| g.wire)
    }

    pub fn output_wires(&self) -> impl Iterator<Item = WireId> + '_ {
        self.gates().filter(|g| g.is_output).map(|g| g.wire)
    }

    pub fn num_inputs(&self) -> usize {
        self.input_wires().count()
    }

    pub fn num_outputs(&self) -> usize {
        self.output_wires().count()
    }

    pub fn gate_count(&self) -> GateCount {
        self.gates().collect()
    }

    pub fn simple_evaluate(
        &self,
        get_input: impl Fn(WireId) -> Option<bool>,
    ) -> Result<Vec<(WireId, bool)>, evaluation::Error> {
        evaluation::simple_evaluate(self.gates(), get_input)
    }
}
