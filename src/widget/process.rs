//! The role the running process plays.
//!
//! Set once at startup (from the command line, the environment, or by the
//! embedder) and read by factories whose concrete type depends on it.

use core::fmt;
use core::str::FromStr;
use std::env::VarError;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`ProcessType::from_env`].
pub const PROCESS_TYPE_ENV: &str = "WIDGETRY_PROCESS_TYPE";

/// Process roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ProcessType {
    /// The parent (chrome) process.
    #[default]
    Default = 0,
    /// A plugin host.
    Plugin = 1,
    /// A sandboxed content process.
    Content = 2,
    /// IPDL unit-test child.
    IpdlUnitTest = 3,
    /// Jetpack add-on host.
    Jetpack = 4,
}

impl ProcessType {
    const ALL: [Self; 5] = [
        Self::Default,
        Self::Plugin,
        Self::Content,
        Self::IpdlUnitTest,
        Self::Jetpack,
    ];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Plugin => "plugin",
            Self::Content => "content",
            Self::IpdlUnitTest => "ipdlunittest",
            Self::Jetpack => "jetpack",
        }
    }

    /// Reads [`PROCESS_TYPE_ENV`]; unset means [`ProcessType::Default`].
    ///
    /// # Errors
    /// The variable is set to something unrecognised or not valid Unicode.
    pub fn from_env() -> Result<Self, UnknownProcessType> {
        Self::env_override().map(Option::unwrap_or_default)
    }

    fn env_override() -> Result<Option<Self>, UnknownProcessType> {
        match std::env::var(PROCESS_TYPE_ENV) {
            Ok(v) => v.parse().map(Some),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(UnknownProcessType(raw.to_string_lossy().into_owned())),
        }
    }

    fn from_u8(v: u8) -> Self {
        Self::ALL.get(usize::from(v)).copied().unwrap_or_default()
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessType {
    type Err = UnknownProcessType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            // "tab" is how content children are named on the command line.
            "tab" => Ok(Self::Content),
            other => Self::ALL
                .into_iter()
                .find(|t| t.as_str() == other)
                .ok_or_else(|| UnknownProcessType(s.to_owned())),
        }
    }
}

/// A process type name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProcessType(pub String);

impl fmt::Display for UnknownProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown process type {:?}", self.0)
    }
}

impl std::error::Error for UnknownProcessType {}

// Nothing has read or set the role yet.
const UNSET: u8 = u8::MAX;

static PROCESS_TYPE: AtomicU8 = AtomicU8::new(UNSET);

fn env_or_warn() -> Option<ProcessType> {
    match ProcessType::env_override() {
        Ok(ty) => ty,
        Err(err) => {
            tracing::warn!(%err, var = PROCESS_TYPE_ENV, "ignoring process type from environment");
            None
        }
    }
}

/// The current process role.
///
/// The first call seeds the role from [`PROCESS_TYPE_ENV`] unless
/// [`set_process_type`] got there first.
pub fn process_type() -> ProcessType {
    let raw = PROCESS_TYPE.load(Ordering::Acquire);
    if raw != UNSET {
        return ProcessType::from_u8(raw);
    }
    let seeded = env_or_warn().unwrap_or_default();
    match PROCESS_TYPE.compare_exchange(UNSET, seeded as u8, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => seeded,
        Err(raced) => ProcessType::from_u8(raced),
    }
}

/// Applies [`PROCESS_TYPE_ENV`] if it is set, returning the resulting role.
///
/// Runs when the widget module loads, so a role configured in the
/// environment is in place before any factory asks for it. An unset or
/// unparsable variable leaves the current role alone.
pub fn apply_process_type_from_env() -> ProcessType {
    match env_or_warn() {
        Some(ty) => {
            set_process_type(ty);
            ty
        }
        None => process_type(),
    }
}

/// Sets the process role, returning the previous one.
pub fn set_process_type(ty: ProcessType) -> ProcessType {
    let raw = PROCESS_TYPE.swap(ty as u8, Ordering::AcqRel);
    let previous = if raw == UNSET {
        ProcessType::Default
    } else {
        ProcessType::from_u8(raw)
    };
    if previous != ty {
        tracing::debug!(%previous, current = %ty, "process type changed");
    }
    previous
}
