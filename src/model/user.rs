use serde::{Deserialize, Serialize};

use crate::data::ObjectId;
use crate::reflect::{Described, GenericDefinition, TypeDescriptor};
use crate::store::Entity;

/// Template every user type must extend, directly or through intermediate types, to be
/// accepted by the store resolver.
pub const IDENTITY_USER: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityUser"), 0);

/// Base user document. Application user types embed it and declare it as their base with
/// `described!(AppUser: IdentityUser)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_name: String,
    pub normalized_user_name: String,
    pub email: Option<String>,
    pub normalized_email: Option<String>,
    #[serde(default)]
    pub email_confirmed: bool,
    pub password_hash: Option<String>,
    pub security_stamp: Option<String>,
    pub concurrency_stamp: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone_number_confirmed: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    /// Seconds since the unix epoch.
    pub lockout_end: Option<u64>,
    #[serde(default)]
    pub lockout_enabled: bool,
    #[serde(default)]
    pub access_failed_count: u32,
}

impl IdentityUser {
    pub fn new(id: ObjectId, user_name: impl Into<String>) -> Self {
        let user_name = user_name.into();
        Self {
            id,
            normalized_user_name: user_name.to_uppercase(),
            user_name,
            email: None,
            normalized_email: None,
            email_confirmed: false,
            password_hash: None,
            security_stamp: None,
            concurrency_stamp: None,
            phone_number: None,
            phone_number_confirmed: false,
            two_factor_enabled: false,
            lockout_end: None,
            lockout_enabled: false,
            access_failed_count: 0,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.normalized_email = Some(email.to_uppercase());
        self.email = Some(email);
        self
    }
}

impl Described for IdentityUser {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().instance_of(IDENTITY_USER, Vec::new())
    }
}

impl Entity for IdentityUser {
    type Key = ObjectId;

    fn id(&self) -> &ObjectId {
        &self.id
    }
}
