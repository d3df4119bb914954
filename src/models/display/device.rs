//! Device display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use merakiop::Device;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DeviceDisplay {
    #[tabled(rename = "SERIAL")]
    pub serial: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MODEL")]
    pub model: String,

    #[tabled(rename = "MAC")]
    pub mac: String,

    #[tabled(rename = "LAN IP")]
    pub lan_ip: String,
}

impl DeviceDisplay {
    /// Field/value pairs for single-device output
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Serial", self.serial.clone()),
            ("Name", self.name.clone()),
            ("Model", self.model.clone()),
            ("MAC", self.mac.clone()),
            ("LAN IP", self.lan_ip.clone()),
        ]
    }
}

impl From<Device> for DeviceDisplay {
    fn from(device: Device) -> Self {
        Self {
            name: or_dash(device.name.as_deref()),
            model: or_dash(device.model.as_deref()),
            mac: or_dash(device.mac.as_deref()),
            lan_ip: or_dash(device.lan_ip.as_deref()),
            serial: device.serial,
        }
    }
}
