pub mod gate;
pub mod gate_type;
pub mod serialization;
pub mod variable;
pub mod wire;
