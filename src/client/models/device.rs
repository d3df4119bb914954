//! Device models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Device claimed into a network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device serial number
    pub serial: String,

    /// MAC address in colon-hex form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lan_ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    /// Fields not modeled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_with_missing_optional_fields() {
        let dev: Device = serde_json::from_str(
            r#"{"serial": "Q2XX-AAAA-BBBB", "mac": "00:18:0a:12:34:56", "model": "MX67C"}"#,
        )
        .unwrap();

        assert_eq!(dev.serial, "Q2XX-AAAA-BBBB");
        assert_eq!(dev.mac.as_deref(), Some("00:18:0a:12:34:56"));
        assert!(dev.lan_ip.is_none());
        assert!(dev.lat.is_none());
    }
}
