use serde::Serialize;

use crate::{
    parse_variables, Circuit, CircuitError, Interface, NamePolicy, ResolvedCircuit, WireId,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub name_policy: NamePolicy,
}

/// Everything an emitter needs: retained gates with canonical inputs, the
/// remap table, and the variables bound to canonical wires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Normalized {
    #[serde(flatten)]
    pub circuit: ResolvedCircuit,
    pub variables: Interface,
    pub input_wires: Vec<WireId>,
    pub output_wires: Vec<WireId>,
    pub num_inputs: usize,
    pub num_outputs: usize,
}

/// Assemble, validate, resolve and bind in one go.
pub fn convert<G, V>(
    gate_lines: G,
    variable_lines: V,
    options: ConvertOptions,
) -> Result<Normalized, CircuitError>
where
    G: IntoIterator,
    G::Item: AsRef<str>,
    V: IntoIterator,
    V::Item: AsRef<str>,
{
    let circuit = Circuit::from_lines(gate_lines)?;
    log::info!("convert: parsed {}", circuit.gate_count());

    let variables = parse_variables(variable_lines)?;

    let resolved = circuit.resolve()?;
    log::info!("convert: resolved {}", resolved.gate_count());

    let interface = resolved.bind(variables, options.name_policy)?;

    Ok(Normalized {
        input_wires: resolved.input_wires().collect(),
        output_wires: resolved.output_wires().collect(),
        num_inputs: resolved.num_inputs(),
        num_outputs: resolved.num_outputs(),
        circuit: resolved,
        variables: interface,
    })
}
