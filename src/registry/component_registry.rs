//! `ComponentRegistry` — resolves CIDs and contract ids to factories.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Cid, Component, Constructor, InterfaceId, Manifest, ManifestEntry, Module, Status};
use crate::{contract_assert, DebugOnly};

/// A table of component factories assembled from [`Module`]s.
///
/// Registration takes `&mut self`; creating instances only needs `&self`, so
/// a fully loaded registry can be shared behind an `Arc` or a lock.
pub struct ComponentRegistry {
    factories: HashMap<Cid, Constructor>,
    contracts: BTreeMap<String, Cid>,
    modules: Vec<&'static Module>,
    shut_down: bool,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            contracts: BTreeMap::new(),
            modules: Vec::new(),
            shut_down: false,
        }
    }

    /// Loads `module`: runs its `load` hook, then publishes its factories.
    ///
    /// A contract id already claimed by an earlier module is re-pointed at the
    /// new CID.
    ///
    /// # Errors
    /// - [`Status::NotInitialized`] after [`shutdown`](Self::shutdown).
    /// - [`Status::DuplicateCid`] if any CID is already registered (or listed
    ///   twice); nothing is registered and the hook does not run.
    /// - [`Status::FactoryNotRegistered`] if a contract names a CID that is
    ///   neither in `module` nor already registered; nothing is registered
    ///   and the hook does not run.
    /// - Whatever the `load` hook returns; nothing is registered.
    pub fn register_module(&mut self, module: &'static Module) -> Result<(), Status> {
        if self.shut_down {
            return Err(Status::NotInitialized);
        }

        let mut seen = HashSet::with_capacity(module.cids.len());
        for entry in module.cids {
            if self.factories.contains_key(&entry.cid) || !seen.insert(entry.cid) {
                warn!(module = module.name, cid = %entry.cid, "duplicate CID");
                return Err(Status::DuplicateCid(entry.cid));
            }
        }
        for entry in module.contracts {
            if !seen.contains(&entry.cid) && !self.factories.contains_key(&entry.cid) {
                warn!(
                    module = module.name,
                    contract_id = entry.contract_id,
                    cid = %entry.cid,
                    "contract names an unknown CID"
                );
                return Err(Status::FactoryNotRegistered);
            }
        }

        if let Some(load) = module.load {
            load()?;
        }

        for entry in module.cids {
            self.factories.insert(entry.cid, entry.constructor);
        }
        for entry in module.contracts {
            if let Some(previous) = self.contracts.insert(entry.contract_id.to_owned(), entry.cid) {
                if previous != entry.cid {
                    warn!(
                        module = module.name,
                        contract_id = entry.contract_id,
                        %previous,
                        cid = %entry.cid,
                        "contract id re-registered"
                    );
                }
            }
        }
        self.modules.push(module);

        info!(
            module = module.name,
            cids = module.cids.len(),
            contracts = module.contracts.len(),
            "module registered"
        );
        Ok(())
    }

    /// Builds the component registered under `cid`.
    ///
    /// # Errors
    /// [`Status::NotInitialized`] after shutdown, [`Status::FactoryNotRegistered`]
    /// for an unknown CID, or whatever the constructor reports.
    pub fn create_instance(
        &self,
        cid: &Cid,
        outer: Option<&dyn Component>,
        iid: &InterfaceId,
    ) -> Result<Arc<dyn Component>, Status> {
        if self.shut_down {
            return Err(Status::NotInitialized);
        }
        let constructor = self.factories.get(cid).ok_or(Status::FactoryNotRegistered)?;
        let result = constructor(outer, iid);
        match &result {
            Ok(component) => debug!(%cid, %iid, class = component.class_name(), "instance created"),
            Err(status) => debug!(%cid, %iid, %status, "instance creation failed"),
        }
        result
    }

    /// Builds the component a contract id resolves to.
    ///
    /// # Errors
    /// As [`create_instance`](Self::create_instance).
    pub fn create_instance_by_contract_id(
        &self,
        contract_id: &str,
        outer: Option<&dyn Component>,
        iid: &InterfaceId,
    ) -> Result<Arc<dyn Component>, Status> {
        let cid = self.contract_id_to_cid(contract_id)?;
        self.create_instance(&cid, outer, iid)
    }

    /// Resolves a contract id.
    ///
    /// # Errors
    /// [`Status::FactoryNotRegistered`] for an unknown contract id.
    pub fn contract_id_to_cid(&self, contract_id: &str) -> Result<Cid, Status> {
        self.contracts
            .get(contract_id)
            .copied()
            .ok_or(Status::FactoryNotRegistered)
    }

    /// `true` if a factory exists for `cid`.
    pub fn is_cid_registered(&self, cid: &Cid) -> bool {
        self.factories.contains_key(cid)
    }

    /// `true` if `contract_id` resolves.
    pub fn is_contract_id_registered(&self, contract_id: &str) -> bool {
        self.contracts.contains_key(contract_id)
    }

    /// Number of registered CIDs.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// `true` once [`shutdown`](Self::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Snapshot of everything the registry can build.
    pub fn manifest(&self) -> Manifest {
        let mut cids: Vec<Cid> = self.factories.keys().copied().collect();
        cids.sort_unstable();
        Manifest {
            modules: self.modules.iter().map(|m| m.name.to_owned()).collect(),
            cids,
            contracts: self
                .contracts
                .iter()
                .map(|(contract_id, cid)| ManifestEntry {
                    contract_id: contract_id.clone(),
                    cid: *cid,
                })
                .collect(),
        }
    }

    /// Runs every module's `unload` hook, most recently loaded first.
    ///
    /// Idempotent; also runs on drop. Afterwards no instances can be created.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        let mut unloaded: DebugOnly<usize> = DebugOnly::new(0);
        for module in self.modules.iter().rev() {
            if let Some(unload) = module.unload {
                debug!(module = module.name, "running unload hook");
                unload();
                unloaded.increment();
            }
        }
        contract_assert!(*unloaded <= self.modules.len());
        info!(modules = self.modules.len(), "registry shut down");
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ComponentRegistry {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl core::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("cids", &self.factories.len())
            .field("contracts", &self.contracts.len())
            .field("modules", &self.modules)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}
