//! Network and template display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, tags_of};
use merakiop::{ConfigTemplate, Network};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NetworkDisplay {
    #[tabled(rename = "NETWORK ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub network_type: String,

    #[tabled(rename = "TIME ZONE")]
    pub time_zone: String,

    #[tabled(rename = "TAGS")]
    pub tags: String,
}

impl From<Network> for NetworkDisplay {
    fn from(network: Network) -> Self {
        Self {
            tags: tags_of(&network.extra),
            network_type: or_dash(network.network_type.as_deref()),
            time_zone: or_dash(network.time_zone.as_deref()),
            id: network.id,
            name: network.name,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TemplateDisplay {
    #[tabled(rename = "TEMPLATE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<ConfigTemplate> for TemplateDisplay {
    fn from(template: ConfigTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_display() {
        let network: Network = serde_json::from_value(json!({
            "id": "N_1",
            "name": "Branch 12",
            "type": "appliance",
            "tags": " lte "
        }))
        .unwrap();

        let display = NetworkDisplay::from(network);

        assert_eq!(display.network_type, "appliance");
        assert_eq!(display.time_zone, "--");
        assert_eq!(display.tags, "lte");
    }

    #[test]
    fn test_template_display() {
        let template: ConfigTemplate =
            serde_json::from_value(json!({"id": "L_9", "name": "Retail"})).unwrap();

        let display = TemplateDisplay::from(template);
        assert_eq!(display.id, "L_9");
        assert_eq!(display.name, "Retail");
    }
}
