//! The application shell singleton and the module lifecycle hooks.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::registry::{query_existing, Component, InterfaceId, Status};

use super::ids::NS_IAPPSHELL;
use super::look_and_feel::LookAndFeel;
use super::process::apply_process_type_from_env;

/// Drives the platform event loop. One per process, created by
/// [`app_shell_init`].
#[derive(Debug)]
pub struct AppShell {
    generation: u64,
    pending: AtomicUsize,
}

impl AppShell {
    /// Which `app_shell_init` produced this shell, counting from 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Asks the event loop to wake and process native events.
    pub fn schedule_native_event_callback(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
    }

    /// Takes the number of wakeups requested since the last call.
    pub fn drain_native_event_callbacks(&self) -> usize {
        self.pending.swap(0, Ordering::AcqRel)
    }
}

impl Component for AppShell {
    fn class_name(&self) -> &'static str {
        "AppShell"
    }

    fn interfaces(&self) -> &'static [InterfaceId] {
        &[NS_IAPPSHELL]
    }
}

static APP_SHELL: Mutex<Option<Arc<AppShell>>> = Mutex::new(None);
static GENERATION: AtomicU64 = AtomicU64::new(0);

fn slot() -> MutexGuard<'static, Option<Arc<AppShell>>> {
    APP_SHELL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creates the application shell. Runs as the widget module's load hook.
///
/// # Errors
/// [`Status::AlreadyInitialized`] if a shell already exists.
pub fn app_shell_init() -> Result<(), Status> {
    let mut slot = slot();
    if slot.is_some() {
        return Err(Status::AlreadyInitialized);
    }
    let process = apply_process_type_from_env();
    let generation = GENERATION.fetch_add(1, Ordering::Relaxed) + 1;
    *slot = Some(Arc::new(AppShell {
        generation,
        pending: AtomicUsize::new(0),
    }));
    info!(generation, %process, "app shell initialized");
    Ok(())
}

/// Releases the application shell. Outstanding `Arc`s stay valid.
pub fn app_shell_shutdown() {
    if let Some(shell) = slot().take() {
        info!(generation = shell.generation, "app shell shut down");
    }
}

/// The current shell, if initialized.
pub fn app_shell() -> Option<Arc<AppShell>> {
    slot().clone()
}

/// Factory for the app-shell CID: always returns the singleton.
///
/// # Errors
/// [`Status::NoAggregation`], [`Status::NotInitialized`] before
/// [`app_shell_init`] or after shutdown, or [`Status::NoInterface`].
pub fn app_shell_constructor(
    outer: Option<&dyn Component>,
    iid: &InterfaceId,
) -> Result<Arc<dyn Component>, Status> {
    if outer.is_some() {
        return Err(Status::NoAggregation);
    }
    let shell = app_shell().ok_or(Status::NotInitialized)?;
    query_existing(None, iid, shell)
}

/// The widget module's unload hook.
pub fn widget_module_shutdown() {
    debug!("widget module shutting down");
    LookAndFeel::shutdown();
    app_shell_shutdown();
}
