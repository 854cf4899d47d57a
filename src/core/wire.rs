use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

/// Errors that can occur during wire operations
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Wire with the given ID has no value yet
    #[error("Wire with id {0} not evaluated")]
    NotEvaluated(WireId),
    /// Wire with the given ID is already initialized
    #[error("Wire with id {0} already initialized")]
    WireAlreadyInitialized(WireId),
}
pub type WireError = Error;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WireId(pub usize);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for WireId {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for WireId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(WireId)
    }
}

mod wire_values {
    use bitvec::vec::BitVec;
    use indexmap::IndexSet;

    use super::{WireError, WireId};

    /// Boolean value per wire.
    ///
    /// Wire ids are opaque and may be sparse or huge, so each wire gets the
    /// next dense slot in `values` on first write.
    #[derive(Debug, Default, Clone)]
    pub struct WireValues {
        slots: IndexSet<WireId>,
        values: BitVec,
    }

    impl WireValues {
        pub fn with_capacity(num_wires: usize) -> Self {
            Self {
                slots: IndexSet::with_capacity(num_wires),
                values: BitVec::with_capacity(num_wires),
            }
        }

        pub fn get(&self, wire_id: WireId) -> Result<bool, WireError> {
            self.slots
                .get_index_of(&wire_id)
                .map(|slot| self.values[slot])
                .ok_or(WireError::NotEvaluated(wire_id))
        }

        pub fn init(&mut self, wire_id: WireId, value: bool) -> Result<(), WireError> {
            if !self.slots.insert(wire_id) {
                return Err(WireError::WireAlreadyInitialized(wire_id));
            }

            self.values.push(value);
            Ok(())
        }

        pub fn is_initialized(&self, wire_id: WireId) -> bool {
            self.slots.contains(&wire_id)
        }

        pub fn len(&self) -> usize {
            self.slots.len()
        }

        pub fn is_empty(&self) -> bool {
            self.slots.is_empty()
        }
    }
}
pub use wire_values::WireValues;
