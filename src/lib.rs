mod circuit;
mod convert;
mod core;

pub use crate::core::{
    gate::{Gate, MAX_ARITY},
    gate_type::{GateCount, GateKind},
    serialization::{parse_variables, read_gates, read_variables, LineReader, ParseError},
    variable::{Direction, Party, Variable},
    wire::{WireError, WireId, WireValues},
};

pub use circuit::{
    evaluation::{simple_evaluate, Error as EvaluationError},
    Circuit, CircuitError, Interface, NamePolicy, RemapTable, ResolvedCircuit,
};
pub use convert::{convert, ConvertOptions, Normalized};
