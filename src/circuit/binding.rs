use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{errors::CircuitError, resolve::ResolvedCircuit};
use crate::{Direction, Variable};

/// What to do when two variable lines share a name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// Fail with [`CircuitError::DuplicateVariableName`]
    #[default]
    Unique,
    /// The later binding replaces the earlier one, keeping its position
    LastWriteWins,
}

/// Named input/output interface of a resolved circuit, keyed by variable
/// name in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Interface {
    variables: IndexMap<String, Variable>,
}

impl ResolvedCircuit {
    /// Rewrite every variable's wires to canonical wires of this circuit.
    pub fn bind<I>(&self, variables: I, policy: NamePolicy) -> Result<Interface, CircuitError>
    where
        I: IntoIterator<Item = Variable>,
    {
        let mut interface = Interface::default();

        for variable in variables {
            let bound = variable.map_wires(|wire| self.canonical(wire));

            if let Some(&wire) = bound.wires.iter().find(|wire| !self.contains(**wire)) {
                return Err(CircuitError::UnknownVariableWire {
                    name: bound.name,
                    wire,
                });
            }

            if interface.variables.contains_key(&bound.name) {
                match policy {
                    NamePolicy::Unique => {
                        return Err(CircuitError::DuplicateVariableName { name: bound.name })
                    }
                    NamePolicy::LastWriteWins => {
                        log::warn!("bind: variable {:?} redefined, keeping the last", bound.name)
                    }
                }
            }

            log::debug!(
                "bind: {} {:?} {:?} width={}",
                bound.party,
                bound.direction,
                bound.name,
                bound.width()
            );
            interface.variables.insert(bound.name.clone(), bound);
        }

        log::info!("bind: complete variables={}", interface.len());

        Ok(interface)
    }
}

impl Interface {
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Variable> {
        self.variables()
            .filter(|variable| variable.direction == Direction::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Variable> {
        self.variables()
            .filter(|variable| variable.direction == Direction::Output)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
