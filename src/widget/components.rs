//! Platform component types handed out by the widget module.
//!
//! These are placeholders for the real windowing, clipboard, printing and
//! input implementations: the module only needs them to be constructible and
//! to answer the interfaces they are registered for.

use crate::generic_factory_constructor;
use crate::registry::{Component, InterfaceId, Status};

use super::ids::*;
use super::process::process_type;

macro_rules! impl_component {
    ($ty:ident => [$($iid:expr),* $(,)?]) => {
        impl Component for $ty {
            fn class_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn interfaces(&self) -> &'static [InterfaceId] {
                &[$($iid),*]
            }
        }
    };
}

/// A top-level or child window.
#[derive(Debug, Default)]
pub struct Window;

/// Widget toolkit handle.
#[derive(Debug, Default)]
pub struct Toolkit;

/// Enumerates the device's screens.
#[derive(Debug, Default)]
pub struct ScreenManager;

/// Reports user idle time.
#[derive(Debug, Default)]
pub struct IdleService;

/// A bundle of data offered in several flavors.
#[derive(Debug, Default)]
pub struct Transferable;

/// The system clipboard.
#[derive(Debug, Default)]
pub struct Clipboard;

/// Convenience wrapper for copying plain strings.
#[derive(Debug, Default)]
pub struct ClipboardHelper;

/// Print settings service.
#[derive(Debug, Default)]
pub struct PrintOptions {
    initialized: bool,
}

impl PrintOptions {
    /// Loads default print settings.
    ///
    /// # Errors
    /// Never fails on this platform.
    pub fn init(&mut self) -> Result<(), Status> {
        self.initialized = true;
        Ok(())
    }

    /// `true` once `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// A print job session.
#[derive(Debug, Default)]
pub struct PrintSession {
    initialized: bool,
}

impl PrintSession {
    /// Prepares the session.
    ///
    /// # Errors
    /// Never fails on this platform.
    pub fn init(&mut self) -> Result<(), Status> {
        self.initialized = true;
        Ok(())
    }

    /// `true` once `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// Print device description.
#[derive(Debug, Default)]
pub struct DeviceContextSpec;

/// Converts between HTML and plain-text clipboard flavors.
#[derive(Debug, Default)]
pub struct HtmlFormatConverter;

/// Lets the user pick an input method.
#[derive(Debug, Default)]
pub struct ImePicker;

/// Script-visible bridge into the platform's Java side.
#[derive(Debug, Default)]
pub struct AndroidBridge;

/// Graphics driver and feature information.
#[derive(Debug, Default)]
pub struct GfxInfo {
    adapter_description: Option<String>,
}

impl GfxInfo {
    /// Queries the adapter.
    ///
    /// # Errors
    /// Never fails on this platform.
    pub fn init(&mut self) -> Result<(), Status> {
        self.adapter_description = Some(String::from("Android GLES adapter"));
        Ok(())
    }

    /// Adapter description, set by `init`.
    pub fn adapter_description(&self) -> Option<&str> {
        self.adapter_description.as_deref()
    }
}

/// File picker for the parent process.
#[derive(Debug, Default)]
pub struct FilePicker;

/// File picker for content processes; forwards to the parent.
#[derive(Debug, Default)]
pub struct FilePickerProxy;

impl_component!(Window => [NS_IWIDGET]);
impl_component!(Toolkit => [NS_ITOOLKIT]);
impl_component!(ScreenManager => [NS_ISCREENMANAGER]);
impl_component!(IdleService => [NS_IIDLESERVICE]);
impl_component!(Transferable => [NS_ITRANSFERABLE]);
impl_component!(Clipboard => [NS_ICLIPBOARD]);
impl_component!(ClipboardHelper => [NS_ICLIPBOARDHELPER]);
impl_component!(PrintOptions => [NS_IPRINTSETTINGSSERVICE, NS_IPRINTOPTIONS]);
impl_component!(PrintSession => [NS_IPRINTSESSION]);
impl_component!(DeviceContextSpec => [NS_IDEVICECONTEXTSPEC]);
impl_component!(HtmlFormatConverter => [NS_IFORMATCONVERTER]);
impl_component!(ImePicker => [NS_IIMEPICKER]);
impl_component!(AndroidBridge => [NS_IANDROIDBRIDGE]);
impl_component!(GfxInfo => [NS_IGFXINFO]);
impl_component!(FilePicker => [NS_IFILEPICKER]);
impl_component!(FilePickerProxy => [NS_IFILEPICKER]);

generic_factory_constructor!(pub window_constructor = Window);
generic_factory_constructor!(pub toolkit_constructor = Toolkit);
generic_factory_constructor!(pub screen_manager_constructor = ScreenManager);
generic_factory_constructor!(pub idle_service_constructor = IdleService);
generic_factory_constructor!(pub transferable_constructor = Transferable);
generic_factory_constructor!(pub clipboard_constructor = Clipboard);
generic_factory_constructor!(pub clipboard_helper_constructor = ClipboardHelper);
generic_factory_constructor!(pub print_options_constructor = PrintOptions, init);
generic_factory_constructor!(pub print_session_constructor = PrintSession, init);
generic_factory_constructor!(pub device_context_spec_constructor = DeviceContextSpec);
generic_factory_constructor!(pub html_format_converter_constructor = HtmlFormatConverter);
generic_factory_constructor!(pub ime_picker_constructor = ImePicker);
generic_factory_constructor!(pub android_bridge_constructor = AndroidBridge);
generic_factory_constructor!(pub gfx_info_constructor = GfxInfo, init);

/// Builds the file picker suited to the current process role.
///
/// Content processes get a [`FilePickerProxy`]; every other role gets a
/// [`FilePicker`].
///
/// # Errors
/// [`Status::NoAggregation`] for an outer object, [`Status::NoInterface`] if
/// `iid` is not a file-picker interface.
pub fn file_picker_constructor(
    outer: Option<&dyn Component>,
    iid: &InterfaceId,
) -> Result<std::sync::Arc<dyn Component>, Status> {
    match process_type() {
        super::ProcessType::Content => {
            crate::registry::construct_component(outer, iid, || Ok(FilePickerProxy))
        }
        _ => crate::registry::construct_component(outer, iid, || Ok(FilePicker)),
    }
}
