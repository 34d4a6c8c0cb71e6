//! Service registry filled during initialization.
//!
//! The registry is a plain owned value: the host creates it, hands it by `&mut` to the
//! store resolver and then shares it read-only with the serving layer. Each [`Contract`]
//! is bound at most once and the first registration wins.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::reflect::{Described, TypeDescriptor};
use crate::resolver::StoreShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLifetime {
    Singleton,
    #[default]
    Scoped,
    Transient,
}

/// Abstract store a caller depends on, identified by the document type it manages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Contract {
    UserStore(TypeDescriptor),
    RoleStore(TypeDescriptor),
}

impl Contract {
    pub fn user_store<U: Described>() -> Self {
        Self::UserStore(U::describe())
    }

    pub fn role_store<R: Described>() -> Self {
        Self::RoleStore(R::describe())
    }

    /// The user or role type the contract is about.
    pub fn subject(&self) -> &TypeDescriptor {
        match self {
            Self::UserStore(subject) | Self::RoleStore(subject) => subject,
        }
    }
}

impl Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserStore(user) => write!(f, "UserStore<{}>", user),
            Self::RoleStore(role) => write!(f, "RoleStore<{}>", role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    contract: Contract,
    implementation: StoreShape,
    lifetime: ServiceLifetime,
}

impl Registration {
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn implementation(&self) -> &StoreShape {
        &self.implementation
    }

    pub fn lifetime(&self) -> ServiceLifetime {
        self.lifetime
    }
}

#[derive(Debug, Default)]
pub struct ServiceRegistry {
    registrations: Vec<Registration>,
    index: HashMap<Contract, usize>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `implementation` to `contract` unless the contract is already bound. Returns
    /// whether the registration was added; an existing binding is left untouched.
    pub fn try_add(&mut self, contract: Contract, implementation: StoreShape, lifetime: ServiceLifetime) -> bool {
        if self.index.contains_key(&contract) {
            return false;
        }
        self.index.insert(contract.clone(), self.registrations.len());
        self.registrations.push(Registration { contract, implementation, lifetime });
        true
    }

    pub fn get(&self, contract: &Contract) -> Option<&Registration> {
        self.index.get(contract).map(|&position| &self.registrations[position])
    }

    pub fn contains(&self, contract: &Contract) -> bool {
        self.index.contains_key(contract)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registrations in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IdentityRole, IdentityUser};

    struct Db;
    crate::described!(Db);

    fn user_only() -> StoreShape {
        StoreShape::UserOnlyStoreDefault { user: IdentityUser::describe(), context: Db::describe() }
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = ServiceRegistry::new();
        assert!(registry.try_add(Contract::user_store::<IdentityUser>(), user_only(), ServiceLifetime::Scoped));

        let other = StoreShape::UserRoleStoreDefault {
            user: IdentityUser::describe(),
            role: IdentityRole::describe(),
            context: Db::describe(),
        };
        assert!(!registry.try_add(Contract::user_store::<IdentityUser>(), other, ServiceLifetime::Singleton));

        let registration = registry.get(&Contract::user_store::<IdentityUser>()).unwrap();
        assert_eq!(registration.implementation(), &user_only());
        assert_eq!(registration.lifetime(), ServiceLifetime::Scoped);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_contracts_are_keyed_by_kind_and_subject() {
        let mut registry = ServiceRegistry::new();
        assert!(registry.is_empty());
        registry.try_add(Contract::user_store::<IdentityUser>(), user_only(), ServiceLifetime::Scoped);
        assert!(registry.contains(&Contract::user_store::<IdentityUser>()));
        assert!(!registry.contains(&Contract::role_store::<IdentityUser>()));
        assert!(!registry.contains(&Contract::user_store::<IdentityRole>()));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut registry = ServiceRegistry::new();
        let role_store = StoreShape::RoleStoreDefault { role: IdentityRole::describe(), context: Db::describe() };
        registry.try_add(Contract::role_store::<IdentityRole>(), role_store, ServiceLifetime::Transient);
        registry.try_add(Contract::user_store::<IdentityUser>(), user_only(), ServiceLifetime::Transient);
        let contracts = registry.iter().map(|registration| registration.contract().to_string()).collect::<Vec<_>>();
        assert_eq!(contracts, vec!["RoleStore<IdentityRole>", "UserStore<IdentityUser>"]);
        assert!(registry.get(&Contract::user_store::<IdentityUser>()).unwrap().contract().subject().is::<IdentityUser>());
    }
}
