//! The mobile widget module.
//!
//! Registers the platform's window, clipboard, printing, idle, file-picker,
//! input-method, graphics-info and bridge components, and owns the two
//! lifecycle hooks that bracket them: [`app_shell_init`] on load and
//! [`widget_module_shutdown`] (look-and-feel cache, then the app shell) on
//! unload.
//!
//! ```rust
//! use widgetry::registry::{Component, ComponentRegistry};
//! use widgetry::widget::{self, ids};
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register_module(&widget::WIDGET_MODULE).unwrap();
//!
//! let clipboard = registry
//!     .create_instance_by_contract_id(ids::CLIPBOARD_CONTRACTID, None, &ids::NS_ICLIPBOARD)
//!     .unwrap();
//! assert_eq!(clipboard.class_name(), "Clipboard");
//!
//! registry.shutdown();
//! assert!(widget::app_shell().is_none());
//! ```

pub mod app_shell;
pub mod components;
pub mod ids;
pub mod look_and_feel;
pub mod process;


pub use app_shell::{
    app_shell, app_shell_constructor, app_shell_init, app_shell_shutdown, widget_module_shutdown,
    AppShell,
};
pub use components::*;
pub use look_and_feel::{ColorId, IntMetric, LookAndFeel};
pub use process::{
    apply_process_type_from_env, process_type, set_process_type, ProcessType, UnknownProcessType,
    PROCESS_TYPE_ENV,
};

use crate::registry::{CidEntry, ContractEntry, Module};
use ids::*;

const WIDGET_CIDS: &[CidEntry] = &[
    CidEntry { cid: NS_WINDOW_CID, constructor: window_constructor },
    CidEntry { cid: NS_CHILD_CID, constructor: window_constructor },
    CidEntry { cid: NS_APPSHELL_CID, constructor: app_shell_constructor },
    CidEntry { cid: NS_TOOLKIT_CID, constructor: toolkit_constructor },
    CidEntry { cid: NS_SCREENMANAGER_CID, constructor: screen_manager_constructor },
    CidEntry { cid: NS_IDLE_SERVICE_CID, constructor: idle_service_constructor },
    CidEntry { cid: NS_TRANSFERABLE_CID, constructor: transferable_constructor },
    CidEntry { cid: NS_CLIPBOARD_CID, constructor: clipboard_constructor },
    CidEntry { cid: NS_CLIPBOARDHELPER_CID, constructor: clipboard_helper_constructor },
    CidEntry { cid: NS_PRINTSETTINGSSERVICE_CID, constructor: print_options_constructor },
    CidEntry { cid: NS_PRINTSESSION_CID, constructor: print_session_constructor },
    CidEntry { cid: NS_DEVICE_CONTEXT_SPEC_CID, constructor: device_context_spec_constructor },
    CidEntry { cid: NS_FILEPICKER_CID, constructor: file_picker_constructor },
    CidEntry { cid: NS_HTMLFORMATCONVERTER_CID, constructor: html_format_converter_constructor },
    CidEntry { cid: NS_IMEPICKER_CID, constructor: ime_picker_constructor },
    CidEntry { cid: NS_ANDROIDBRIDGE_CID, constructor: android_bridge_constructor },
    CidEntry { cid: NS_GFXINFO_CID, constructor: gfx_info_constructor },
];

const WIDGET_CONTRACTS: &[ContractEntry] = &[
    ContractEntry { contract_id: WINDOW_CONTRACTID, cid: NS_WINDOW_CID },
    ContractEntry { contract_id: CHILD_WINDOW_CONTRACTID, cid: NS_CHILD_CID },
    ContractEntry { contract_id: APPSHELL_CONTRACTID, cid: NS_APPSHELL_CID },
    ContractEntry { contract_id: TOOLKIT_CONTRACTID, cid: NS_TOOLKIT_CID },
    ContractEntry { contract_id: SCREENMANAGER_CONTRACTID, cid: NS_SCREENMANAGER_CID },
    ContractEntry { contract_id: IDLE_SERVICE_CONTRACTID, cid: NS_IDLE_SERVICE_CID },
    ContractEntry { contract_id: TRANSFERABLE_CONTRACTID, cid: NS_TRANSFERABLE_CID },
    ContractEntry { contract_id: CLIPBOARD_CONTRACTID, cid: NS_CLIPBOARD_CID },
    ContractEntry { contract_id: CLIPBOARDHELPER_CONTRACTID, cid: NS_CLIPBOARDHELPER_CID },
    ContractEntry { contract_id: PRINTSETTINGSSERVICE_CONTRACTID, cid: NS_PRINTSETTINGSSERVICE_CID },
    ContractEntry { contract_id: PRINTSESSION_CONTRACTID, cid: NS_PRINTSESSION_CID },
    ContractEntry { contract_id: DEVICE_CONTEXT_SPEC_CONTRACTID, cid: NS_DEVICE_CONTEXT_SPEC_CID },
    ContractEntry { contract_id: FILEPICKER_CONTRACTID, cid: NS_FILEPICKER_CID },
    ContractEntry { contract_id: HTMLFORMATCONVERTER_CONTRACTID, cid: NS_HTMLFORMATCONVERTER_CID },
    ContractEntry { contract_id: IMEPICKER_CONTRACTID, cid: NS_IMEPICKER_CID },
    ContractEntry { contract_id: ANDROIDBRIDGE_CONTRACTID, cid: NS_ANDROIDBRIDGE_CID },
    ContractEntry { contract_id: GFXINFO_CONTRACTID, cid: NS_GFXINFO_CID },
];

/// The widget module, ready for [`ComponentRegistry::register_module`](crate::registry::ComponentRegistry::register_module).
pub static WIDGET_MODULE: Module = Module {
    name: "widget-android",
    cids: WIDGET_CIDS,
    contracts: WIDGET_CONTRACTS,
    load: Some(app_shell_init),
    unload: Some(widget_module_shutdown),
};
