
/// Errors every document repository surfaces to the identity layer. Driver specific error
/// types are expected to be converted into this one once they have been traced.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    /// A document with the same key is already stored
    #[error("duplicate document key")]
    Duplicate,

    /// Anything raised by the underlying driver: connection resets, timeouts, decoding
    #[error("document driver error")]
    Driver(#[from] anyhow::Error),
}
