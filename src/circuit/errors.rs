use crate::{ParseError, WireId};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CircuitError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Duplicate wire {wire} on line {lineno}")]
    DuplicateWire { lineno: usize, wire: WireId },
    #[error("Gate {wire} reads wire {missing_input} which no gate defines")]
    DanglingInput { wire: WireId, missing_input: WireId },
    #[error("Gate {wire} reads wire {input} before it is defined")]
    ForwardReference { wire: WireId, input: WireId },
    #[error("Duplicate variable name {name:?}")]
    DuplicateVariableName { name: String },
    #[error("Variable {name:?} is bound to wire {wire} which no retained gate defines")]
    UnknownVariableWire { name: String, wire: WireId },
}
