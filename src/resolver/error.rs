
/// Raised when the types handed to the resolver cannot back identity stores. Either one
/// aborts initialization; nothing is registered when it is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("user type `{user}` is not an identity user")]
    NotIdentityUser { user: &'static str },

    #[error("role type `{role}` is not an identity role")]
    NotIdentityRole { role: &'static str },
}
