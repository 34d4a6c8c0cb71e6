//! Resolution and registration of identity document stores.
//!
//! An application describes its user type, optionally a role type, and the document
//! context it persists them through. The resolver checks those types against the identity
//! markers, works out which store shape fits the context and binds it to the abstract
//! `UserStore`/`RoleStore` contracts in an explicit [`ServiceRegistry`].

pub mod config;
pub mod data;
pub mod model;
pub mod reflect;
pub mod registry;
pub mod resolver;
pub mod store;

pub use config::StoreOptions;
pub use reflect::{find_generic_base, Described, GenericDefinition, TypeDescriptor};
pub use registry::{Contract, Registration, ServiceLifetime, ServiceRegistry};
pub use resolver::{add_stores, resolve_stores, ConfigurationError, IdentityBuilder, ResolvedStores, StoreShape};
