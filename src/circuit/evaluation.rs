use crate::{Gate, WireError, WireId, WireValues};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Wire access failed: {0}")]
    WhileSetWire(#[from] WireError),
    #[error("Circuit input missing: wire {0} value not provided")]
    LostInput(WireId),
    #[error("Gate {wire} requires unevaluated wire {input}")]
    WrongGateOrder { wire: WireId, input: WireId },
}

/// Evaluate gates in order on plain booleans and collect the output wires.
pub fn simple_evaluate<'g>(
    gates: impl IntoIterator<Item = &'g Gate>,
    get_input: impl Fn(WireId) -> Option<bool>,
) -> Result<Vec<(WireId, bool)>, Error> {
    let mut values = WireValues::default();
    let mut outputs = Vec::new();
    let mut operands = Vec::with_capacity(crate::core::gate::MAX_ARITY);

    for gate in gates {
        let value = if gate.is_input {
            get_input(gate.wire).ok_or(Error::LostInput(gate.wire))?
        } else {
            operands.clear();
            for &input in &gate.inputs {
                let bit = values.get(input).map_err(|_| Error::WrongGateOrder {
                    wire: gate.wire,
                    input,
                })?;
                operands.push(bit);
            }
            gate.evaluate(&operands)
        };

        log::trace!("evaluate: {} <- {} ({})", gate.wire, value, gate.kind());

        values.init(gate.wire, value)?;

        if gate.is_output {
            outputs.push((gate.wire, value));
        }
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_adder() {
        let gates = [
            Gate::input(WireId(0)),
            Gate::input(WireId(1)),
            Gate::new(WireId(2), vec![false, true, true, false], vec![WireId(0), WireId(1)])
                .with_output(),
            Gate::new(WireId(3), vec![false, false, false, true], vec![WireId(0), WireId(1)])
                .with_output(),
        ];

        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let outputs = simple_evaluate(&gates, |w| match w.0 {
                0 => Some(a),
                1 => Some(b),
                _ => None,
            })
            .unwrap();

            assert_eq!(outputs, vec![(WireId(2), a ^ b), (WireId(3), a & b)]);
        }
    }

    #[test]
    fn test_huge_wire_ids() {
        let circuit = crate::Circuit::from_lines([
            "1000000000000 input",
            "18446744073709551615 output gate arity 0 table [ 1 ] inputs [ ]",
            "18446744073709551614 output gate arity 2 table [ 0 1 1 0 ] inputs [ 1000000000000 18446744073709551615 ]",
        ])
        .unwrap();

        let outputs = circuit
            .simple_evaluate(|w| (w == WireId(1_000_000_000_000)).then_some(false))
            .unwrap();

        assert_eq!(
            outputs,
            vec![(WireId(usize::MAX), true), (WireId(usize::MAX - 1), true)]
        );
    }

    #[test]
    fn test_lost_input() {
        let gates = [Gate::input(WireId(0))];

        assert_eq!(
            simple_evaluate(&gates, |_| None),
            Err(Error::LostInput(WireId(0)))
        );
    }

    #[test]
    fn test_wrong_gate_order() {
        let gates = [Gate::not(WireId(1), WireId(0)), Gate::input(WireId(0))];

        assert_eq!(
            simple_evaluate(&gates, |_| Some(true)),
            Err(Error::WrongGateOrder {
                wire: WireId(1),
                input: WireId(0)
            })
        );
    }
}
