//! Parameter types for ADB MCP tools
//!
//! Field names are camelCase on the wire. Optional fields carry literal
//! defaults so handlers never see an unset flag.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::adb::DeviceTarget;

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDevicesParams {
    #[schemars(description = "Show device details (-l)")]
    #[serde(default = "default_true")]
    pub show_details: bool,
}

impl Default for GetDevicesParams {
    fn default() -> Self {
        Self { show_details: true }
    }
}

// Device selection shared by the single-device tools. Kept as a plain comment:
// a doc comment would become the description of every schema flattening it.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSelection {
    #[schemars(
        description = "Target specific device by ID (takes precedence over useUsb and useEmulator)"
    )]
    #[serde(default)]
    pub device_id: Option<String>,

    #[schemars(description = "Target USB connected device (-d)")]
    #[serde(default)]
    pub use_usb: bool,

    #[schemars(description = "Target emulator instance (-e)")]
    #[serde(default)]
    pub use_emulator: bool,
}

impl DeviceSelection {
    pub fn target(&self) -> DeviceTarget {
        DeviceTarget::from_options(self.device_id.as_deref(), self.use_usb, self.use_emulator)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPackagesParams {
    #[serde(flatten)]
    pub device: DeviceSelection,

    #[schemars(description = "Show the APK file path for each package (-f)")]
    #[serde(default)]
    pub show_path: bool,

    #[schemars(description = "Filter to only show disabled packages (-d)")]
    #[serde(default)]
    pub show_disabled: bool,

    #[schemars(description = "Filter to only show enabled packages (-e)")]
    #[serde(default)]
    pub show_enabled: bool,

    #[schemars(description = "Filter to only show system packages (-s)")]
    #[serde(default)]
    pub show_system: bool,

    #[schemars(description = "Filter to only show third party packages (-3)")]
    #[serde(default)]
    pub show_third_party: bool,

    #[schemars(description = "Show the installer for each package (-i)")]
    #[serde(default)]
    pub show_installer: bool,

    #[schemars(description = "Include uninstalled packages (-u)")]
    #[serde(default)]
    pub include_uninstalled: bool,
}

impl ListPackagesParams {
    /// `pm list packages` flags for the enabled filters, in declaration order
    pub fn flags(&self) -> Vec<&'static str> {
        [
            (self.show_path, "-f"),
            (self.show_disabled, "-d"),
            (self.show_enabled, "-e"),
            (self.show_system, "-s"),
            (self.show_third_party, "-3"),
            (self.show_installer, "-i"),
            (self.include_uninstalled, "-u"),
        ]
        .into_iter()
        .filter_map(|(enabled, flag)| enabled.then_some(flag))
        .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputTextParams {
    #[serde(flatten)]
    pub device: DeviceSelection,

    #[schemars(description = "Text to input to the device")]
    pub text: String,
}
