//! Class ids, contract ids and interface ids of the widget module.

#![allow(missing_docs)]

use crate::registry::{Cid, InterfaceId};

const fn widget_cid(low: u8) -> Cid {
    Cid::from_parts(0x2d96_b3d0, 0xc051, 0x11d1, [0xa8, 0x27, 0x00, 0x40, 0x95, 0x9a, 0x28, low])
}

pub const NS_WINDOW_CID: Cid = widget_cid(0xc9);
pub const NS_CHILD_CID: Cid = widget_cid(0xca);
pub const NS_APPSHELL_CID: Cid = widget_cid(0xcb);
pub const NS_TOOLKIT_CID: Cid = widget_cid(0xcc);
pub const NS_SCREENMANAGER_CID: Cid = widget_cid(0xcd);
pub const NS_IDLE_SERVICE_CID: Cid = widget_cid(0xce);
pub const NS_TRANSFERABLE_CID: Cid = widget_cid(0xcf);
pub const NS_CLIPBOARD_CID: Cid = widget_cid(0xd0);
pub const NS_CLIPBOARDHELPER_CID: Cid = widget_cid(0xd1);
pub const NS_PRINTSETTINGSSERVICE_CID: Cid = widget_cid(0xd2);
pub const NS_PRINTSESSION_CID: Cid = widget_cid(0xd3);
pub const NS_DEVICE_CONTEXT_SPEC_CID: Cid = widget_cid(0xd4);
pub const NS_FILEPICKER_CID: Cid = widget_cid(0xd5);
pub const NS_HTMLFORMATCONVERTER_CID: Cid = widget_cid(0xd6);
pub const NS_IMEPICKER_CID: Cid = widget_cid(0xd7);
pub const NS_GFXINFO_CID: Cid = widget_cid(0xd8);
pub const NS_ANDROIDBRIDGE_CID: Cid = widget_cid(0xd9);

pub const WINDOW_CONTRACTID: &str = "@mozilla.org/widgets/window/android;1";
pub const CHILD_WINDOW_CONTRACTID: &str = "@mozilla.org/widgets/child_window/android;1";
pub const APPSHELL_CONTRACTID: &str = "@mozilla.org/widget/appshell/android;1";
pub const TOOLKIT_CONTRACTID: &str = "@mozilla.org/widget/toolkit/android;1";
pub const SCREENMANAGER_CONTRACTID: &str = "@mozilla.org/gfx/screenmanager;1";
pub const IDLE_SERVICE_CONTRACTID: &str = "@mozilla.org/widget/idleservice;1";
pub const TRANSFERABLE_CONTRACTID: &str = "@mozilla.org/widget/transferable;1";
pub const CLIPBOARD_CONTRACTID: &str = "@mozilla.org/widget/clipboard;1";
pub const CLIPBOARDHELPER_CONTRACTID: &str = "@mozilla.org/widget/clipboardhelper;1";
pub const PRINTSETTINGSSERVICE_CONTRACTID: &str = "@mozilla.org/gfx/printsettings-service;1";
pub const PRINTSESSION_CONTRACTID: &str = "@mozilla.org/gfx/printsession;1";
pub const DEVICE_CONTEXT_SPEC_CONTRACTID: &str = "@mozilla.org/gfx/devicecontextspec;1";
pub const FILEPICKER_CONTRACTID: &str = "@mozilla.org/filepicker;1";
pub const HTMLFORMATCONVERTER_CONTRACTID: &str = "@mozilla.org/widget/htmlformatconverter;1";
pub const IMEPICKER_CONTRACTID: &str = "@mozilla.org/imepicker;1";
pub const ANDROIDBRIDGE_CONTRACTID: &str = "@mozilla.org/android/bridge;1";
pub const GFXINFO_CONTRACTID: &str = "@mozilla.org/gfx/info;1";

pub const NS_IWIDGET: InterfaceId = InterfaceId::new("nsIWidget");
pub const NS_IAPPSHELL: InterfaceId = InterfaceId::new("nsIAppShell");
pub const NS_ITOOLKIT: InterfaceId = InterfaceId::new("nsIToolkit");
pub const NS_ISCREENMANAGER: InterfaceId = InterfaceId::new("nsIScreenManager");
pub const NS_IIDLESERVICE: InterfaceId = InterfaceId::new("nsIIdleService");
pub const NS_ITRANSFERABLE: InterfaceId = InterfaceId::new("nsITransferable");
pub const NS_ICLIPBOARD: InterfaceId = InterfaceId::new("nsIClipboard");
pub const NS_ICLIPBOARDHELPER: InterfaceId = InterfaceId::new("nsIClipboardHelper");
pub const NS_IPRINTSETTINGSSERVICE: InterfaceId = InterfaceId::new("nsIPrintSettingsService");
pub const NS_IPRINTOPTIONS: InterfaceId = InterfaceId::new("nsIPrintOptions");
pub const NS_IPRINTSESSION: InterfaceId = InterfaceId::new("nsIPrintSession");
pub const NS_IDEVICECONTEXTSPEC: InterfaceId = InterfaceId::new("nsIDeviceContextSpec");
pub const NS_IFILEPICKER: InterfaceId = InterfaceId::new("nsIFilePicker");
pub const NS_IFORMATCONVERTER: InterfaceId = InterfaceId::new("nsIFormatConverter");
pub const NS_IIMEPICKER: InterfaceId = InterfaceId::new("nsIIMEPicker");
pub const NS_IANDROIDBRIDGE: InterfaceId = InterfaceId::new("nsIAndroidBridge");
pub const NS_IGFXINFO: InterfaceId = InterfaceId::new("nsIGfxInfo");
