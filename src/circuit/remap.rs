use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::WireId;

/// Eliminated wire -> wire that now carries its value.
///
/// Targets are always canonical at insertion time, so there are no cycles
/// and [`RemapTable::resolve`] terminates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemapTable(IndexMap<WireId, WireId>);

impl RemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the table until reaching a wire that was not eliminated
    pub fn resolve(&self, mut wire: WireId) -> WireId {
        while let Some(&next) = self.0.get(&wire) {
            wire = next;
        }
        wire
    }

    pub(crate) fn insert(&mut self, eliminated: WireId, canonical: WireId) {
        debug_assert_ne!(eliminated, canonical);
        debug_assert!(!self.0.contains_key(&canonical));
        self.0.insert(eliminated, canonical);
    }

    pub fn get(&self, wire: WireId) -> Option<WireId> {
        self.0.get(&wire).copied()
    }

    pub fn is_eliminated(&self, wire: WireId) -> bool {
        self.0.contains_key(&wire)
    }

    /// Entries in elimination order
    pub fn iter(&self) -> impl Iterator<Item = (WireId, WireId)> + '_ {
        self.0.iter().map(|(from, to)| (*from, *to))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
