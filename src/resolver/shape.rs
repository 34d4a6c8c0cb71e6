use std::fmt::Display;

use crate::reflect::{GenericDefinition, TypeDescriptor};

pub const USER_STORE: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::UserStore"), 3);
pub const USER_STORE_FULL: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::UserStore"), 9);
pub const USER_ONLY_STORE: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::UserOnlyStore"), 2);
pub const USER_ONLY_STORE_FULL: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::UserOnlyStore"), 6);
pub const ROLE_STORE: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::RoleStore"), 2);
pub const ROLE_STORE_FULL: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::RoleStore"), 5);

/// Store implementation picked by the resolver, with the type arguments it is bound to.
///
/// The `*Default` variants are used when the context does not extend one of the identity
/// context templates and only the user, role and context types are known. The `*Full`
/// variants carry the auxiliary document types read off the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreShape {
    UserRoleStoreDefault {
        user: TypeDescriptor,
        role: TypeDescriptor,
        context: TypeDescriptor,
    },
    UserRoleStoreFull {
        user: TypeDescriptor,
        role: TypeDescriptor,
        context: TypeDescriptor,
        key: TypeDescriptor,
        user_claim: TypeDescriptor,
        user_role: TypeDescriptor,
        user_login: TypeDescriptor,
        user_token: TypeDescriptor,
        role_claim: TypeDescriptor,
    },
    UserOnlyStoreDefault {
        user: TypeDescriptor,
        context: TypeDescriptor,
    },
    UserOnlyStoreFull {
        user: TypeDescriptor,
        context: TypeDescriptor,
        key: TypeDescriptor,
        user_claim: TypeDescriptor,
        user_login: TypeDescriptor,
        user_token: TypeDescriptor,
    },
    RoleStoreDefault {
        role: TypeDescriptor,
        context: TypeDescriptor,
    },
    RoleStoreFull {
        role: TypeDescriptor,
        context: TypeDescriptor,
        key: TypeDescriptor,
        user_role: TypeDescriptor,
        role_claim: TypeDescriptor,
    },
}

impl StoreShape {
    pub fn definition(&self) -> GenericDefinition {
        match self {
            Self::UserRoleStoreDefault { .. } => USER_STORE,
            Self::UserRoleStoreFull { .. } => USER_STORE_FULL,
            Self::UserOnlyStoreDefault { .. } => USER_ONLY_STORE,
            Self::UserOnlyStoreFull { .. } => USER_ONLY_STORE_FULL,
            Self::RoleStoreDefault { .. } => ROLE_STORE,
            Self::RoleStoreFull { .. } => ROLE_STORE_FULL,
        }
    }

    /// Type arguments in the positional order the store template declares them.
    ///
    /// `UserRoleStoreFull` lists the user token before the role claim, which is the
    /// opposite of their order on `IdentityContext`.
    pub fn type_arguments(&self) -> Vec<&TypeDescriptor> {
        match self {
            Self::UserRoleStoreDefault { user, role, context } => vec![user, role, context],
            Self::UserRoleStoreFull {
                user,
                role,
                context,
                key,
                user_claim,
                user_role,
                user_login,
                user_token,
                role_claim,
            } => vec![user, role, context, key, user_claim, user_role, user_login, user_token, role_claim],
            Self::UserOnlyStoreDefault { user, context } => vec![user, context],
            Self::UserOnlyStoreFull { user, context, key, user_claim, user_login, user_token } => {
                vec![user, context, key, user_claim, user_login, user_token]
            }
            Self::RoleStoreDefault { role, context } => vec![role, context],
            Self::RoleStoreFull { role, context, key, user_role, role_claim } => {
                vec![role, context, key, user_role, role_claim]
            }
        }
    }
}

impl Display for StoreShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<", self.definition().name())?;
        for (index, argument) in self.type_arguments().into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultIdentityUserContext, IdentityUser};
    use crate::reflect::Described;

    #[test]
    fn test_arguments_match_arity() {
        let user = IdentityUser::describe();
        let context = DefaultIdentityUserContext::describe();
        let shape = StoreShape::UserOnlyStoreDefault { user: user.clone(), context: context.clone() };
        assert_eq!(shape.type_arguments().len(), shape.definition().arity());
        assert_eq!(shape.type_arguments(), vec![&user, &context]);
    }

    #[test]
    fn test_default_and_full_are_distinct_templates() {
        assert_ne!(USER_STORE, USER_STORE_FULL);
        assert_eq!(USER_STORE.name(), USER_STORE_FULL.name());
        assert_ne!(ROLE_STORE, ROLE_STORE_FULL);
        assert_ne!(USER_ONLY_STORE, USER_ONLY_STORE_FULL);
    }

    #[test]
    fn test_display() {
        let shape = StoreShape::UserOnlyStoreDefault {
            user: IdentityUser::describe(),
            context: String::describe(),
        };
        assert_eq!(shape.to_string(), "UserOnlyStore<IdentityUser, String>");
    }
}
