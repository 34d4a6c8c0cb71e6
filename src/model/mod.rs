pub mod claims;
pub mod context;
pub mod role;
pub mod user;

pub use claims::{IdentityRoleClaim, IdentityUserClaim, IdentityUserLogin, IdentityUserRole, IdentityUserToken};
pub use context::{
    DefaultIdentityContext, DefaultIdentityUserContext, DocumentContext, IdentityContext, IdentityUserContext,
    IDENTITY_CONTEXT, IDENTITY_USER_CONTEXT,
};
pub use role::{IdentityRole, IDENTITY_ROLE};
pub use user::{IdentityUser, IDENTITY_USER};
