//! Static module descriptions.

use super::{Cid, Constructor, Status};

/// Binds a CID to the constructor that builds it.
#[derive(Clone, Copy)]
pub struct CidEntry {
    /// Class identifier.
    pub cid: Cid,
    /// Factory for the class.
    pub constructor: Constructor,
}

/// Binds a contract id string to a CID.
#[derive(Clone, Copy, Debug)]
pub struct ContractEntry {
    /// Human-readable contract id, e.g. `@mozilla.org/widget/clipboard;1`.
    pub contract_id: &'static str,
    /// The class it resolves to.
    pub cid: Cid,
}

/// A static description of the factories a module contributes, plus the
/// hooks run when the module is loaded into and unloaded from a registry.
#[derive(Clone, Copy)]
pub struct Module {
    /// Module name, for diagnostics.
    pub name: &'static str,
    /// CID to constructor table.
    pub cids: &'static [CidEntry],
    /// Contract id to CID table.
    pub contracts: &'static [ContractEntry],
    /// Runs once, before any of the module's factories become visible.
    pub load: Option<fn() -> Result<(), Status>>,
    /// Runs once, when the registry shuts down.
    pub unload: Option<fn()>,
}

impl core::fmt::Debug for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("cids", &self.cids.len())
            .field("contracts", &self.contracts.len())
            .field("load", &self.load.is_some())
            .field("unload", &self.unload.is_some())
            .finish()
    }
}
