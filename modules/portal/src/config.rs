//! Portal configuration.
//!
//! The founder access-code table used to live as module-level constants;
//! it is injected here instead so tests and deployments can substitute it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::contract::model::UserRole;

/// Identity behind one access code: a founder who never went through
/// registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessProfile {
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalConfig {
    /// Fixed secret string -> predetermined privileged identity.
    #[serde(default = "default_access_codes")]
    pub access_codes: HashMap<String, AccessProfile>,
    /// Minimum registration name length, in characters.
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,
    /// Minimum registration password length, in characters.
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
    /// Login name that produces an ephemeral guest session, matched
    /// case-insensitively. Stored uppercase.
    #[serde(default = "default_guest_marker")]
    pub guest_marker: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            access_codes: default_access_codes(),
            min_name_len: default_min_name_len(),
            min_password_len: default_min_password_len(),
            guest_marker: default_guest_marker(),
        }
    }
}

fn default_min_name_len() -> usize {
    3
}

fn default_min_password_len() -> usize {
    4
}

fn default_guest_marker() -> String {
    "ГОСТЬ".to_string()
}

fn default_access_codes() -> HashMap<String, AccessProfile> {
    let profile = |name: &str, role: UserRole, avatar: &str| AccessProfile {
        name: name.to_string(),
        role,
        avatar: avatar.to_string(),
    };
    HashMap::from([
        (
            "RMP_LDR_MERCEDES_777_X".to_string(),
            profile(
                "Mercedes_Mangushcar",
                UserRole::Admin,
                "https://api.dicebear.com/7.x/avataaars/svg?seed=Mercedes",
            ),
        ),
        (
            "RMP_DEP_KOCHERGA_555_Y".to_string(),
            profile(
                "Kocherga_Rampage",
                UserRole::Executive,
                "https://api.dicebear.com/7.x/avataaars/svg?seed=Kocherga",
            ),
        ),
        (
            "RMP_DEP_LORD_111_Z".to_string(),
            profile(
                "Lord_Rampage",
                UserRole::Executive,
                "https://api.dicebear.com/7.x/avataaars/svg?seed=Lord",
            ),
        ),
        (
            "RMP_DEP_DOMINIC_222_W".to_string(),
            profile(
                "Dominic_Delgado",
                UserRole::Executive,
                "https://api.dicebear.com/7.x/pixel-art/svg?seed=chicken",
            ),
        ),
        (
            "RMP_DEV_INDUSTRIAL_SITE_999".to_string(),
            profile(
                "Industrial_Rampage",
                UserRole::Admin,
                "https://api.dicebear.com/7.x/avataaars/svg?seed=Industrial",
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_carries_the_five_founders() {
        let config = PortalConfig::default();
        assert_eq!(config.access_codes.len(), 5);
        let leader = &config.access_codes["RMP_LDR_MERCEDES_777_X"];
        assert_eq!(leader.name, "Mercedes_Mangushcar");
        assert_eq!(leader.role, UserRole::Admin);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: PortalConfig = serde_json::from_str("{}").expect("decode empty config");
        assert_eq!(config.min_name_len, 3);
        assert_eq!(config.min_password_len, 4);
        assert_eq!(config.guest_marker, "ГОСТЬ");
        assert_eq!(config.access_codes.len(), 5);
    }

    #[test]
    fn injected_table_replaces_defaults() {
        let raw = r#"{
            "access_codes": {},
            "min_name_len": 5
        }"#;
        let config: PortalConfig = serde_json::from_str(raw).expect("decode config");
        assert!(config.access_codes.is_empty());
        assert_eq!(config.min_name_len, 5);
    }
}
