//! Store resolution and registration.
//!
//! Given a user type, an optional role type and a document context, the resolver checks
//! the user and role against the identity markers, reads whatever auxiliary document
//! types the context exposes and binds the matching store shape to the `UserStore` and
//! `RoleStore` contracts.

use std::iter;

use tracing::{debug, info};

use crate::config::StoreOptions;
use crate::model::context::{
    CONTEXT_KEY, CONTEXT_ROLE_CLAIM, CONTEXT_USER_CLAIM, CONTEXT_USER_LOGIN, CONTEXT_USER_ROLE, CONTEXT_USER_TOKEN,
    USER_CONTEXT_KEY, USER_CONTEXT_USER_CLAIM, USER_CONTEXT_USER_LOGIN, USER_CONTEXT_USER_TOKEN,
};
use crate::model::{IDENTITY_CONTEXT, IDENTITY_ROLE, IDENTITY_USER, IDENTITY_USER_CONTEXT};
use crate::reflect::{find_generic_base, TypeDescriptor};
use crate::registry::{Contract, ServiceRegistry};

mod builder;
mod error;
mod shape;

pub use builder::IdentityBuilder;
pub use error::ConfigurationError;
pub use shape::*;

/// Outcome of resolution: the store bound to each contract, not yet registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStores {
    user_store: (Contract, StoreShape),
    role_store: Option<(Contract, StoreShape)>,
}

impl ResolvedStores {
    pub fn user_store(&self) -> &StoreShape {
        &self.user_store.1
    }

    pub fn role_store(&self) -> Option<&StoreShape> {
        self.role_store.as_ref().map(|(_, shape)| shape)
    }

    pub fn into_registrations(self) -> impl Iterator<Item = (Contract, StoreShape)> {
        iter::once(self.user_store).chain(self.role_store)
    }
}

/// Picks the store shapes for `user`, `role` and `context` without touching a registry.
///
/// The user is checked before the role. A context that extends neither identity context
/// template is not an error: the stores fall back to the shapes that only need the user,
/// role and context types.
pub fn resolve_stores(
    user: &TypeDescriptor,
    role: Option<&TypeDescriptor>,
    context: &TypeDescriptor,
) -> Result<ResolvedStores, ConfigurationError> {
    if find_generic_base(user, &IDENTITY_USER).is_none() {
        return Err(ConfigurationError::NotIdentityUser { user: user.name() });
    }

    let Some(role) = role else {
        let user_store = user_only_store(user, context);
        debug!(user = %user, context = %context, store = %user_store, "resolved user store without roles");
        return Ok(ResolvedStores {
            user_store: (Contract::UserStore(user.clone()), user_store),
            role_store: None,
        });
    };

    if find_generic_base(role, &IDENTITY_ROLE).is_none() {
        return Err(ConfigurationError::NotIdentityRole { role: role.name() });
    }

    let (user_store, role_store) = match find_generic_base(context, &IDENTITY_CONTEXT) {
        Some(identity_context) => {
            let arguments = identity_context.type_arguments();
            let argument = |position: usize| arguments[position].clone();
            let user_store = StoreShape::UserRoleStoreFull {
                user: user.clone(),
                role: role.clone(),
                context: context.clone(),
                key: argument(CONTEXT_KEY),
                user_claim: argument(CONTEXT_USER_CLAIM),
                user_role: argument(CONTEXT_USER_ROLE),
                user_login: argument(CONTEXT_USER_LOGIN),
                user_token: argument(CONTEXT_USER_TOKEN),
                role_claim: argument(CONTEXT_ROLE_CLAIM),
            };
            let role_store = StoreShape::RoleStoreFull {
                role: role.clone(),
                context: context.clone(),
                key: argument(CONTEXT_KEY),
                user_role: argument(CONTEXT_USER_ROLE),
                role_claim: argument(CONTEXT_ROLE_CLAIM),
            };
            (user_store, role_store)
        }
        // Custom context: only the default documents can be assumed
        None => (
            StoreShape::UserRoleStoreDefault {
                user: user.clone(),
                role: role.clone(),
                context: context.clone(),
            },
            StoreShape::RoleStoreDefault {
                role: role.clone(),
                context: context.clone(),
            },
        ),
    };
    debug!(
        user = %user,
        role = %role,
        context = %context,
        user_store = %user_store,
        role_store = %role_store,
        "resolved user and role stores"
    );

    Ok(ResolvedStores {
        user_store: (Contract::UserStore(user.clone()), user_store),
        role_store: Some((Contract::RoleStore(role.clone()), role_store)),
    })
}

fn user_only_store(user: &TypeDescriptor, context: &TypeDescriptor) -> StoreShape {
    match find_generic_base(context, &IDENTITY_USER_CONTEXT) {
        Some(user_context) => {
            let arguments = user_context.type_arguments();
            StoreShape::UserOnlyStoreFull {
                user: user.clone(),
                context: context.clone(),
                key: arguments[USER_CONTEXT_KEY].clone(),
                user_claim: arguments[USER_CONTEXT_USER_CLAIM].clone(),
                user_login: arguments[USER_CONTEXT_USER_LOGIN].clone(),
                user_token: arguments[USER_CONTEXT_USER_TOKEN].clone(),
            }
        }
        None => StoreShape::UserOnlyStoreDefault {
            user: user.clone(),
            context: context.clone(),
        },
    }
}

/// Resolves the stores for `user`, `role` and `context` and binds them in `registry`.
///
/// Contracts that are already bound keep their existing registration, so calling this
/// again with the same types is a no-op. On error the registry is left untouched.
pub fn add_stores(
    registry: &mut ServiceRegistry,
    options: &StoreOptions,
    user: &TypeDescriptor,
    role: Option<&TypeDescriptor>,
    context: &TypeDescriptor,
) -> Result<(), ConfigurationError> {
    let resolved = resolve_stores(user, role, context)?;

    for (contract, implementation) in resolved.into_registrations() {
        if registry.contains(&contract) {
            debug!(contract = %contract, "contract already bound, keeping existing store");
            continue;
        }
        info!(
            contract = %contract,
            implementation = %implementation,
            lifetime = ?options.lifetime,
            "registered identity store"
        );
        registry.try_add(contract, implementation, options.lifetime);
    }

    Ok(())
}
