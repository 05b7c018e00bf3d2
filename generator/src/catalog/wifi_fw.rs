//! Catalog of nRF70 Series Wi-Fi firmware variants.
//!
//! Every variant ships the same file name under its own directory below
//! `nrf_wifi/fw_bins`.

use super::{ArtifactDescriptor, Catalog};

/// Template variable that receives the firmware records.
pub const CONTEXT_KEY: &str = "firmwares";

/// Upstream directory holding the firmware variants.
pub const REMOTE_PREFIX: &str = "nrf_wifi/fw_bins";

/// File name of each firmware image.
pub const FW_BIN_NAME: &str = "nrf70.bin";

/// Firmware variants, in manifest order.
pub const VARIANTS: [&str; 4] = ["default", "scan_only", "radio_test", "system_with_raw"];

/// Build the Wi-Fi firmware catalog.
///
/// # Examples
///
/// ```
/// use module_manifest::catalog::wifi_fw;
///
/// let catalog = wifi_fw::catalog();
/// assert_eq!(catalog.artifacts()[0].rpath(), "default/nrf70.bin");
/// assert_eq!(catalog.artifacts()[0].lpath(), "wifi_fw_bins/default/nrf70.bin");
/// ```
#[must_use]
pub fn catalog() -> Catalog {
    let artifacts = VARIANTS
        .iter()
        .map(|variant| {
            ArtifactDescriptor::new(
                *variant,
                *variant,
                format!("{variant}/{FW_BIN_NAME}"),
                format!("wifi_fw_bins/{variant}/{FW_BIN_NAME}"),
            )
        })
        .collect();
    Catalog::new("nrf70-wifi-firmware", CONTEXT_KEY, REMOTE_PREFIX, artifacts)
}
