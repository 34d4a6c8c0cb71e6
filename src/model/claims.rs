//! Auxiliary identity documents. Each is generic over the key type of the user or role it
//! points at, so a context can bind them to whatever key its users use.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reflect::{described_template, GenericDefinition};

pub const IDENTITY_USER_CLAIM: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityUserClaim"), 1);
pub const IDENTITY_USER_ROLE: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityUserRole"), 1);
pub const IDENTITY_USER_LOGIN: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityUserLogin"), 1);
pub const IDENTITY_ROLE_CLAIM: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityRoleClaim"), 1);
pub const IDENTITY_USER_TOKEN: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityUserToken"), 1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserClaim<K> {
    pub user_id: K,
    pub claim_type: String,
    pub claim_value: Option<String>,
}

/// Join document between a user and one of its roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserRole<K> {
    pub user_id: K,
    pub role_id: K,
}

/// External login (provider + provider key) linked to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserLogin<K> {
    pub login_provider: String,
    pub provider_key: String,
    pub provider_display_name: Option<String>,
    pub user_id: K,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRoleClaim<K> {
    pub role_id: K,
    pub claim_type: String,
    pub claim_value: Option<String>,
}

/// Authentication token issued by a login provider, keyed by provider and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserToken<K> {
    pub user_id: K,
    pub login_provider: String,
    pub name: String,
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

described_template!(IDENTITY_USER_CLAIM => IdentityUserClaim<K>);
described_template!(IDENTITY_USER_ROLE => IdentityUserRole<K>);
described_template!(IDENTITY_USER_LOGIN => IdentityUserLogin<K>);
described_template!(IDENTITY_ROLE_CLAIM => IdentityRoleClaim<K>);
described_template!(IDENTITY_USER_TOKEN => IdentityUserToken<K>);
