mod error;
mod repository;

/// A stored document addressed by a unique key.
pub trait Entity
where
    Self: Sized + Send + Sync + 'static
{
    type Key: Clone + Eq + Send + Sync + 'static;

    fn id(&self) -> &Self::Key;
}

#[async_trait::async_trait]
pub trait Store
where
    Self: Sized + Send + Sync + 'static
{
    type Error: Into<StoreError> + Sized + Send + Sync + 'static;
}

pub use error::StoreError;
pub use repository::*;
