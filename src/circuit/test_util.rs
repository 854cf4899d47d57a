use std::collections::HashMap;

use rand::{Rng, SeedableRng};

use crate::{Circuit, WireId};

pub fn trng() -> rand::rngs::StdRng {
    rand::rngs::StdRng::from_seed([42u8; 32])
}

pub fn circuit_of(lines: &[&str]) -> Circuit {
    Circuit::from_lines(lines).unwrap_or_else(|err| panic!("Can't assemble with {err:#?}"))
}

impl Circuit {
    /// Resolve, then check on `rounds` random assignments that every unresolved
    /// output reads the same value from its canonical wire.
    pub fn check_resolution_equivalence(&self, rng: &mut impl Rng, rounds: usize) {
        let resolved = self
            .resolve()
            .unwrap_or_else(|err| panic!("Can't resolve with {err:#?}"));

        for _ in 0..rounds {
            let inputs = self
                .input_wires()
                .map(|wire| (wire, rng.random::<bool>()))
                .collect::<HashMap<WireId, bool>>();

            let expected = self
                .simple_evaluate(|w| inputs.get(&w).copied())
                .unwrap_or_else(|err| panic!("Can't eval unresolved with {err:#?}"));

            let actual = resolved
                .simple_evaluate(|w| inputs.get(&w).copied())
                .unwrap_or_else(|err| panic!("Can't eval resolved with {err:#?}"))
                .into_iter()
                .collect::<HashMap<_, _>>();

            for (wire_id, value) in expected {
                let canonical = resolved.canonical(wire_id);
                assert_eq!(
                    actual.get(&canonical),
                    Some(&value),
                    "{wire_id} (canonical {canonical}) not found or not equal"
                );
            }
        }
    }
}
