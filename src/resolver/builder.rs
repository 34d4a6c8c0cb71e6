use crate::config::StoreOptions;
use crate::model::DocumentContext;
use crate::reflect::{Described, TypeDescriptor};
use crate::registry::ServiceRegistry;
use crate::resolver::{add_stores, ConfigurationError};

/// Collects the identity types of an application and registers document stores for them.
///
/// ```ignore
/// let mut registry = ServiceRegistry::new();
/// IdentityBuilder::new::<AppUser>(&mut registry)
///     .with_role::<AppRole>()
///     .add_document_stores::<AppContext>()?;
/// ```
pub struct IdentityBuilder<'r> {
    registry: &'r mut ServiceRegistry,
    user: TypeDescriptor,
    role: Option<TypeDescriptor>,
    options: StoreOptions,
}

impl<'r> IdentityBuilder<'r> {
    pub fn new<U: Described>(registry: &'r mut ServiceRegistry) -> Self {
        Self {
            registry,
            user: U::describe(),
            role: None,
            options: StoreOptions::default(),
        }
    }

    pub fn with_role<R: Described>(mut self) -> Self {
        self.role = Some(R::describe());
        self
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn user_type(&self) -> &TypeDescriptor {
        &self.user
    }

    pub fn role_type(&self) -> Option<&TypeDescriptor> {
        self.role.as_ref()
    }

    pub fn add_document_stores<C: DocumentContext>(mut self) -> Result<Self, ConfigurationError> {
        add_stores(&mut *self.registry, &self.options, &self.user, self.role.as_ref(), &C::describe())?;
        Ok(self)
    }
}
