use serde::{Deserialize, Serialize};

use crate::data::ObjectId;
use crate::reflect::{Described, GenericDefinition, TypeDescriptor};
use crate::store::Entity;

/// Template every role type must extend to be accepted by the store resolver.
pub const IDENTITY_ROLE: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityRole"), 0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRole {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub normalized_name: String,
    pub concurrency_stamp: Option<String>,
}

impl IdentityRole {
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            normalized_name: name.to_uppercase(),
            name,
            concurrency_stamp: None,
        }
    }
}

impl Described for IdentityRole {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().instance_of(IDENTITY_ROLE, Vec::new())
    }
}

impl Entity for IdentityRole {
    type Key = ObjectId;

    fn id(&self) -> &ObjectId {
        &self.id
    }
}
