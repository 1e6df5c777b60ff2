//! Serializable registry snapshots.

use serde::{Deserialize, Serialize};

use super::Cid;

/// One resolvable contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Contract id string.
    pub contract_id: String,
    /// The CID it resolves to.
    pub cid: Cid,
}

/// A serializable snapshot of what a registry can build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Names of the loaded modules, in load order.
    pub modules: Vec<String>,
    /// Every registered CID, sorted.
    pub cids: Vec<Cid>,
    /// Every contract id, sorted by id.
    pub contracts: Vec<ManifestEntry>,
}

impl Manifest {
    /// Renders the manifest as pretty JSON.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
