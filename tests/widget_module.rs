//! End-to-end: load the widget module into a registry, use it, tear it down.

use std::sync::{Mutex, MutexGuard, PoisonError};

use widgetry::registry::{Cid, Component, ComponentRegistry, Status, ISUPPORTS};
use widgetry::widget::{self, ids, LookAndFeel, ProcessType, UnknownProcessType, PROCESS_TYPE_ENV};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_full_lifecycle() {
    let _guard = serial();
    let mut registry = ComponentRegistry::new();
    registry.register_module(&widget::WIDGET_MODULE).unwrap();
    assert!(widget::app_shell().is_some());

    let helper = registry
        .create_instance_by_contract_id(ids::CLIPBOARDHELPER_CONTRACTID, None, &ids::NS_ICLIPBOARDHELPER)
        .unwrap();
    assert_eq!(helper.class_name(), "ClipboardHelper");

    let caret = LookAndFeel::int_metric(widget::IntMetric::CaretBlinkTime);
    assert!(caret > 0);

    drop(registry);
    assert!(widget::app_shell().is_none());
    assert!(!LookAndFeel::is_cached());
}

#[test]
fn test_manifest_lists_every_contract() {
    let _guard = serial();
    let mut registry = ComponentRegistry::new();
    registry.register_module(&widget::WIDGET_MODULE).unwrap();

    let manifest = registry.manifest();
    assert_eq!(manifest.modules, vec!["widget-android".to_owned()]);
    assert_eq!(manifest.cids.len(), 17);
    assert_eq!(manifest.contracts.len(), 17);

    let json = manifest.to_json().unwrap();
    assert!(json.contains("@mozilla.org/filepicker;1"));
    assert!(json.contains(&ids::NS_FILEPICKER_CID.to_string()));
}

#[test]
fn test_cid_lookup_round_trips_through_text() {
    let _guard = serial();
    let mut registry = ComponentRegistry::new();
    registry.register_module(&widget::WIDGET_MODULE).unwrap();

    let cid = registry.contract_id_to_cid(ids::IDLE_SERVICE_CONTRACTID).unwrap();
    let reparsed: Cid = cid.to_string().parse().unwrap();
    let svc = registry.create_instance(&reparsed, None, &ISUPPORTS).unwrap();
    assert!(svc.is::<widget::IdleService>());
}

#[test]
fn test_unknown_contract() {
    let _guard = serial();
    let mut registry = ComponentRegistry::new();
    registry.register_module(&widget::WIDGET_MODULE).unwrap();
    let r = registry.create_instance_by_contract_id("@mozilla.org/widget/dragservice;1", None, &ISUPPORTS);
    assert_eq!(r.err(), Some(Status::FactoryNotRegistered));
}

#[test]
fn test_process_type_from_env() {
    let _guard = serial();

    std::env::remove_var(PROCESS_TYPE_ENV);
    assert_eq!(ProcessType::from_env(), Ok(ProcessType::Default));

    std::env::set_var(PROCESS_TYPE_ENV, "tab");
    assert_eq!(ProcessType::from_env(), Ok(ProcessType::Content));

    std::env::set_var(PROCESS_TYPE_ENV, "gpu");
    assert_eq!(
        ProcessType::from_env(),
        Err(UnknownProcessType("gpu".to_owned()))
    );
    std::env::remove_var(PROCESS_TYPE_ENV);
}

#[test]
fn test_content_process_gets_proxy_picker() {
    let _guard = serial();
    let mut registry = ComponentRegistry::new();
    registry.register_module(&widget::WIDGET_MODULE).unwrap();

    let previous = widget::set_process_type(ProcessType::Content);
    let picker = registry
        .create_instance_by_contract_id(ids::FILEPICKER_CONTRACTID, None, &ids::NS_IFILEPICKER)
        .unwrap();
    widget::set_process_type(previous);

    assert_eq!(picker.class_name(), "FilePickerProxy");
}

#[test]
fn test_content_role_from_environment_reaches_file_picker() {
    let _guard = serial();
    let previous = widget::set_process_type(ProcessType::Default);
    std::env::set_var(PROCESS_TYPE_ENV, "content");

    let mut registry = ComponentRegistry::new();
    registry.register_module(&widget::WIDGET_MODULE).unwrap();
    let picker = registry
        .create_instance_by_contract_id(ids::FILEPICKER_CONTRACTID, None, &ids::NS_IFILEPICKER)
        .unwrap();
    let seen = widget::process_type();

    drop(registry);
    std::env::remove_var(PROCESS_TYPE_ENV);
    widget::set_process_type(previous);

    assert_eq!(seen, ProcessType::Content);
    assert_eq!(picker.class_name(), "FilePickerProxy");
}

#[test]
fn test_unparsable_environment_keeps_current_role() {
    let _guard = serial();
    let previous = widget::set_process_type(ProcessType::Plugin);
    std::env::set_var(PROCESS_TYPE_ENV, "gpu");
    let applied = widget::apply_process_type_from_env();
    std::env::remove_var(PROCESS_TYPE_ENV);
    widget::set_process_type(previous);

    assert_eq!(applied, ProcessType::Plugin);
}

#[test]
#[cfg(unix)]
fn test_non_unicode_environment_is_reported() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let _guard = serial();
    std::env::set_var(PROCESS_TYPE_ENV, OsString::from_vec(vec![b'c', 0xff]));
    let result = ProcessType::from_env();
    std::env::remove_var(PROCESS_TYPE_ENV);

    assert_eq!(result, Err(UnknownProcessType("c\u{fffd}".to_owned())));
}
