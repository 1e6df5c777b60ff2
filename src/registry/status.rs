use core::fmt;

use super::Cid;

/// Failure codes for component creation and registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An outer object was supplied; no component supports aggregation.
    NoAggregation,
    /// The component does not implement the requested interface.
    NoInterface,
    /// Nothing is registered under the requested CID or contract id.
    FactoryNotRegistered,
    /// A subsystem was used before its initialization hook ran (or after shutdown).
    NotInitialized,
    /// An initialization hook ran twice.
    AlreadyInitialized,
    /// Two factories claim the same CID.
    DuplicateCid(Cid),
    /// A CID string could not be parsed.
    InvalidCid,
    /// A component's own initialization failed.
    Failure(&'static str),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAggregation => f.write_str("component does not support aggregation"),
            Self::NoInterface => f.write_str("interface not supported"),
            Self::FactoryNotRegistered => f.write_str("no factory registered"),
            Self::NotInitialized => f.write_str("not initialized"),
            Self::AlreadyInitialized => f.write_str("already initialized"),
            Self::DuplicateCid(cid) => write!(f, "duplicate factory for {cid}"),
            Self::InvalidCid => f.write_str("malformed class id"),
            Self::Failure(why) => write!(f, "component failure: {why}"),
        }
    }
}

impl std::error::Error for Status {}
