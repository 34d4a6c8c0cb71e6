use std::sync::Arc;

use crate::store::{Entity, Store};

/// Caller supplied predicate over documents of type `E`. The repository treats it as
/// opaque and only ever asks whether a document matches.
pub struct Filter<E> {
    predicate: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E: 'static> Filter<E> {
    pub fn new(predicate: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        Self { predicate: Arc::new(predicate) }
    }

    /// Matches every document.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, entity: &E) -> bool {
        (self.predicate)(entity)
    }

    pub fn and(self, other: Filter<E>) -> Self {
        Self::new(move |entity| self.matches(entity) && other.matches(entity))
    }

    pub fn or(self, other: Filter<E>) -> Self {
        Self::new(move |entity| self.matches(entity) || other.matches(entity))
    }

    pub fn not(self) -> Self {
        Self::new(move |entity| !self.matches(entity))
    }
}

impl<E> Clone for Filter<E> {
    fn clone(&self) -> Self {
        Self { predicate: Arc::clone(&self.predicate) }
    }
}

/// Lazy, read-only view over the documents a filter selected. Nothing is tracked: changes
/// made to yielded documents are not written back.
pub struct Query<E> {
    inner: Box<dyn Iterator<Item = E> + Send>,
}

impl<E> Query<E> {
    pub fn new(inner: impl Iterator<Item = E> + Send + 'static) -> Self {
        Self { inner: Box::new(inner) }
    }

    pub fn empty() -> Self
    where
        E: Send + 'static,
    {
        Self::new(std::iter::empty())
    }
}

impl<E> Iterator for Query<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.inner.next()
    }
}

/// Repository over one document collection, layered on top of a document driver.
#[async_trait::async_trait]
pub trait DocumentRepository<E: Entity>: Store {
    async fn get(&self, id: &E::Key) -> Result<E, Self::Error>;
    async fn insert(&self, entity: E) -> Result<(), Self::Error>;
    async fn remove(&self, id: &E::Key) -> Result<(), Self::Error>;

    /// Documents matching `filter`, without change tracking.
    fn query(&self, filter: &Filter<E>) -> Result<Query<E>, Self::Error>;

    /// Same as [`DocumentRepository::query`] for drivers that need to round trip before
    /// the cursor is available.
    async fn query_async(&self, filter: Filter<E>) -> Result<Query<E>, Self::Error> {
        self.query(&filter)
    }
}
