//! Contract-keyed component registry.
//!
//! A [`Module`] is a static table of `(CID -> constructor)` and
//! `(contract id -> CID)` entries plus optional load/unload hooks. Modules are
//! loaded into a [`ComponentRegistry`], which then builds components on
//! request, by CID or by contract id.
//!
//! Every constructor refuses aggregation: a request that supplies an outer
//! object fails with [`Status::NoAggregation`] before anything is built.

pub mod cid;
pub mod component;
pub mod component_registry;
pub mod manifest;
pub mod module;
mod status;


pub use cid::{Cid, InterfaceId, ISUPPORTS};
pub use component::{construct_component, query_existing, AsAny, Component, Constructor};
pub use component_registry::ComponentRegistry;
pub use manifest::{Manifest, ManifestEntry};
pub use module::{CidEntry, ContractEntry, Module};
pub use status::Status;
