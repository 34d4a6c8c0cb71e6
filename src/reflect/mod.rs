//! Opt-in type metadata.
//!
//! Rust has neither inheritance nor runtime reflection, so a type takes part in store
//! resolution by implementing [`Described`]. Its [`TypeDescriptor`] names the generic
//! template it instantiates (if any), the bound type arguments of that template and the
//! descriptor of the type it extends. The chain of `base` links is the ancestor chain
//! [`find_generic_base`] inspects.

use std::any::TypeId;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::Arc;

mod walker;

pub use walker::find_generic_base;

/// Identity of a generic template. Two templates are the same only when both the path
/// and the arity match, mirroring `Store<_, _>` and `Store<_, _, _>` being distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericDefinition {
    path: &'static str,
    arity: usize,
}

impl GenericDefinition {
    pub const fn new(path: &'static str, arity: usize) -> Self {
        Self { path, arity }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub const fn arity(&self) -> usize {
        self.arity
    }

    pub fn name(&self) -> &'static str {
        short_name(self.path)
    }
}

impl Display for GenericDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())?;
        if self.arity > 0 {
            write!(f, "<{}>", vec!["_"; self.arity].join(", "))?;
        }
        Ok(())
    }
}

/// Handle to a described type. Equality and hashing only consider the underlying
/// [`TypeId`], the remaining fields are metadata attached by the type's [`Described`] impl.
#[derive(Clone)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    definition: Option<GenericDefinition>,
    arguments: Vec<TypeDescriptor>,
    base: Option<Arc<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// Descriptor of a root type: no template, no ancestor.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            definition: None,
            arguments: Vec::new(),
            base: None,
        }
    }

    /// Marks the type as an instantiation of `definition` bound to `arguments`.
    ///
    /// # Panics
    ///
    /// When the number of arguments does not match the template arity. Descriptors are
    /// built from static type information, so a mismatch is a bug in a `Described` impl.
    pub fn instance_of(mut self, definition: GenericDefinition, arguments: Vec<TypeDescriptor>) -> Self {
        assert_eq!(
            definition.arity(),
            arguments.len(),
            "{} bound with {} type arguments",
            definition,
            arguments.len(),
        );
        self.definition = Some(definition);
        self.arguments = arguments;
        self
    }

    /// Sets the direct ancestor of the type.
    pub fn extends(mut self, base: TypeDescriptor) -> Self {
        self.base = Some(Arc::new(base));
        self
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn definition(&self) -> Option<&GenericDefinition> {
        self.definition.as_ref()
    }

    pub fn type_arguments(&self) -> &[TypeDescriptor] {
        &self.arguments
    }

    pub fn base(&self) -> Option<&TypeDescriptor> {
        self.base.as_deref()
    }

    /// The type itself followed by every ancestor, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        iter::successors(Some(self), |ty| ty.base())
    }

    pub fn derives_from(&self, marker: &GenericDefinition) -> bool {
        find_generic_base(self, marker).is_some()
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.definition {
            Some(definition) if !self.arguments.is_empty() => {
                write!(f, "{}<", definition.name())?;
                for (index, argument) in self.arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                f.write_str(">")
            }
            _ => f.write_str(short_name(self.name)),
        }
    }
}

/// A type that can describe itself, and its ancestry, at configuration time.
pub trait Described: 'static {
    fn describe() -> TypeDescriptor;
}

/// Implements [`Described`] for a type, optionally naming the type it extends.
///
/// ```ignore
/// described!(AppUser: IdentityUser);
/// described!(AppContext: IdentityContext<AppUser, AppRole, ObjectId, /* ... */>);
/// described!(AuditEntry);
/// ```
#[macro_export]
macro_rules! described {
    ($ty:ty : $base:ty) => {
        impl $crate::reflect::Described for $ty {
            fn describe() -> $crate::reflect::TypeDescriptor {
                $crate::reflect::TypeDescriptor::of::<$ty>()
                    .extends(<$base as $crate::reflect::Described>::describe())
            }
        }
    };
    ($ty:ty) => {
        impl $crate::reflect::Described for $ty {
            fn describe() -> $crate::reflect::TypeDescriptor {
                $crate::reflect::TypeDescriptor::of::<$ty>()
            }
        }
    };
}

/// Implements [`Described`] for a generic template so each instantiation carries its
/// bound arguments.
macro_rules! described_template {
    ($definition:expr => $name:ident < $($param:ident),+ >) => {
        impl<$($param: $crate::reflect::Described),+> $crate::reflect::Described for $name<$($param),+> {
            fn describe() -> $crate::reflect::TypeDescriptor {
                $crate::reflect::TypeDescriptor::of::<Self>()
                    .instance_of($definition, vec![$($param::describe()),+])
            }
        }
    };
}

pub(crate) use described_template;

described!(String);
described!(u32);
described!(u64);
described!(i32);
described!(i64);

fn short_name(path: &str) -> &str {
    // Only the leading path is stripped; generic arguments keep their full paths
    let head = path.split('<').next().unwrap_or(path);
    match head.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}
