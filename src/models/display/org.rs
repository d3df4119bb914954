//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use merakiop::Organization;

/// Organization row; `SELECTED` marks the scoped organization
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SELECTED")]
    #[serde(skip)]
    pub selected: String,
}

impl OrgDisplay {
    /// Mark this row when its id equals `selected`
    pub fn marked(org: &Organization, selected: Option<&str>) -> Self {
        let mut display = Self::from(org);
        if selected == Some(display.id.as_str()) {
            display.selected = "*".to_string();
        }
        display
    }
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id.to_string(),
            name: org.name.clone(),
            selected: String::new(),
        }
    }
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self::from(&org)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_display_from_numeric_id() {
        let display = OrgDisplay::from(Organization::new(2930418u64, "Acme"));

        assert_eq!(display.id, "2930418");
        assert_eq!(display.name, "Acme");
        assert!(display.selected.is_empty());
    }

    #[test]
    fn test_org_display_marks_selection() {
        let org = Organization::new("123", "Acme");

        assert_eq!(OrgDisplay::marked(&org, Some("123")).selected, "*");
        assert!(OrgDisplay::marked(&org, Some("456")).selected.is_empty());
        assert!(OrgDisplay::marked(&org, None).selected.is_empty());
    }
}
