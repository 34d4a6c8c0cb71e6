use std::marker::PhantomData;

use crate::data::ObjectId;
use crate::model::{
    IdentityRole, IdentityRoleClaim, IdentityUser, IdentityUserClaim, IdentityUserLogin, IdentityUserRole,
    IdentityUserToken,
};
use crate::reflect::{described_template, Described, GenericDefinition, TypeDescriptor};

/// Document database context the identity stores read from and write to. The driver
/// side lives outside this crate; here it only needs to be describable so the resolver
/// can inspect what it extends.
pub trait DocumentContext: Described + Send + Sync {}

/// Context base exposing every auxiliary identity document type:
/// `IdentityContext<User, Role, Key, UserClaim, UserRole, UserLogin, RoleClaim, UserToken>`.
pub const IDENTITY_CONTEXT: GenericDefinition = GenericDefinition::new(concat!(module_path!(), "::IdentityContext"), 8);

/// Context base for applications without roles:
/// `IdentityUserContext<User, Key, UserClaim, UserLogin, UserToken>`.
pub const IDENTITY_USER_CONTEXT: GenericDefinition =
    GenericDefinition::new(concat!(module_path!(), "::IdentityUserContext"), 5);

// Argument positions within IdentityContext
pub(crate) const CONTEXT_KEY: usize = 2;
pub(crate) const CONTEXT_USER_CLAIM: usize = 3;
pub(crate) const CONTEXT_USER_ROLE: usize = 4;
pub(crate) const CONTEXT_USER_LOGIN: usize = 5;
pub(crate) const CONTEXT_ROLE_CLAIM: usize = 6;
pub(crate) const CONTEXT_USER_TOKEN: usize = 7;

// Argument positions within IdentityUserContext
pub(crate) const USER_CONTEXT_KEY: usize = 1;
pub(crate) const USER_CONTEXT_USER_CLAIM: usize = 2;
pub(crate) const USER_CONTEXT_USER_LOGIN: usize = 3;
pub(crate) const USER_CONTEXT_USER_TOKEN: usize = 4;

#[allow(clippy::type_complexity)]
pub struct IdentityContext<U, R, K, UC, UR, UL, RC, UT> {
    _marker: PhantomData<fn() -> (U, R, K, UC, UR, UL, RC, UT)>,
}

#[allow(clippy::type_complexity)]
pub struct IdentityUserContext<U, K, UC, UL, UT> {
    _marker: PhantomData<fn() -> (U, K, UC, UL, UT)>,
}

described_template!(IDENTITY_USER_CONTEXT => IdentityUserContext<U, K, UC, UL, UT>);

// The full context extends the user-only one, so it also satisfies resolution without roles
impl<U, R, K, UC, UR, UL, RC, UT> Described for IdentityContext<U, R, K, UC, UR, UL, RC, UT>
where
    U: Described,
    R: Described,
    K: Described,
    UC: Described,
    UR: Described,
    UL: Described,
    RC: Described,
    UT: Described,
{
    fn describe() -> TypeDescriptor {
        let arguments = vec![
            U::describe(),
            R::describe(),
            K::describe(),
            UC::describe(),
            UR::describe(),
            UL::describe(),
            RC::describe(),
            UT::describe(),
        ];
        TypeDescriptor::of::<Self>()
            .instance_of(IDENTITY_CONTEXT, arguments)
            .extends(<IdentityUserContext<U, K, UC, UL, UT>>::describe())
    }
}

impl<U, R, K, UC, UR, UL, RC, UT> DocumentContext for IdentityContext<U, R, K, UC, UR, UL, RC, UT>
where
    U: Described,
    R: Described,
    K: Described,
    UC: Described,
    UR: Described,
    UL: Described,
    RC: Described,
    UT: Described,
{
}

impl<U, K, UC, UL, UT> DocumentContext for IdentityUserContext<U, K, UC, UL, UT>
where
    U: Described,
    K: Described,
    UC: Described,
    UL: Described,
    UT: Described,
{
}

/// Context bound to the built-in documents and [`ObjectId`] keys.
pub type DefaultIdentityContext = IdentityContext<
    IdentityUser,
    IdentityRole,
    ObjectId,
    IdentityUserClaim<ObjectId>,
    IdentityUserRole<ObjectId>,
    IdentityUserLogin<ObjectId>,
    IdentityRoleClaim<ObjectId>,
    IdentityUserToken<ObjectId>,
>;

pub type DefaultIdentityUserContext = IdentityUserContext<
    IdentityUser,
    ObjectId,
    IdentityUserClaim<ObjectId>,
    IdentityUserLogin<ObjectId>,
    IdentityUserToken<ObjectId>,
>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_positions() {
        let context = DefaultIdentityContext::describe();
        let arguments = context.type_arguments();
        assert_eq!(context.definition(), Some(&IDENTITY_CONTEXT));
        assert!(arguments[CONTEXT_KEY].is::<ObjectId>());
        assert!(arguments[CONTEXT_USER_CLAIM].is::<IdentityUserClaim<ObjectId>>());
        assert!(arguments[CONTEXT_USER_ROLE].is::<IdentityUserRole<ObjectId>>());
        assert!(arguments[CONTEXT_USER_LOGIN].is::<IdentityUserLogin<ObjectId>>());
        assert!(arguments[CONTEXT_ROLE_CLAIM].is::<IdentityRoleClaim<ObjectId>>());
        assert!(arguments[CONTEXT_USER_TOKEN].is::<IdentityUserToken<ObjectId>>());
    }

    #[test]
    fn test_default_user_context_positions() {
        let context = DefaultIdentityUserContext::describe();
        let arguments = context.type_arguments();
        assert_eq!(context.definition(), Some(&IDENTITY_USER_CONTEXT));
        assert!(arguments[USER_CONTEXT_KEY].is::<ObjectId>());
        assert!(arguments[USER_CONTEXT_USER_CLAIM].is::<IdentityUserClaim<ObjectId>>());
        assert!(arguments[USER_CONTEXT_USER_LOGIN].is::<IdentityUserLogin<ObjectId>>());
        assert!(arguments[USER_CONTEXT_USER_TOKEN].is::<IdentityUserToken<ObjectId>>());
    }

    #[test]
    fn test_full_context_extends_user_context() {
        let context = DefaultIdentityContext::describe();
        let base = context.base().unwrap();
        assert!(base.is::<DefaultIdentityUserContext>());
        assert!(context.derives_from(&IDENTITY_USER_CONTEXT));
        assert!(!DefaultIdentityUserContext::describe().derives_from(&IDENTITY_CONTEXT));
    }
}
