//! # Circuit Normalization
//!
//! Whole-circuit passes over an SHDL gate list, as emitted by the FairPlay
//! SFDL compiler, turning it into a gate list that an arithmetization
//! emitter can consume without executing identity gates.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐    ┌────────────────┐                    ┌─────────────┐
//! │   Circuit   │───▶│ ResolvedCircuit│───────────────────▶│  Interface  │
//! │ (Assembly)  │    │  (Passthrus)   │      bind()        │ (Variables) │
//! └─────────────┘    └────────────────┘                    └─────────────┘
//!       │                     │                                  │
//!   • wire -> Gate,       • retained gates,                  • name -> Variable
//!     file order            canonical inputs                 • canonical wires
//!   • no duplicates       • RemapTable
//!   • no dangling inputs  • moved output marks
//! ```
//!
//! ## Gate classes
//!
//! | Kind       | Shape                         | Resolution          |
//! |------------|-------------------------------|---------------------|
//! | input      | `<w> input`                   | kept                |
//! | constant   | arity 0, `table [ b ]`        | kept                |
//! | passthru   | arity 1, `table [ 0 1 ]`      | eliminated, remapped|
//! | not        | arity 1, `table [ 1 0 ]`      | kept                |
//! | general    | anything else up to arity 3   | kept                |
//!
//! A passthru is eliminated by pointing every later reader at its input
//! instead. When the passthru was an output, its input becomes an output.
//! The one exception is a passthru from an output into another output: the
//! two names share a value but both must stay addressable, so it is kept.

pub mod binding;
pub mod errors;
pub mod evaluation;
pub mod remap;
pub mod resolve;
pub mod structure;
#[cfg(test)]
pub mod test_util;

pub use binding::{Interface, NamePolicy};
pub use errors::CircuitError;
pub use remap::RemapTable;
pub use resolve::ResolvedCircuit;
pub use structure::Circuit;
