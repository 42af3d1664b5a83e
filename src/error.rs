use thiserror::Error;

/// Failure modes of a fragment load.
///
/// Every variant fails the future returned by
/// [`FragmentLoader::load`](crate::loader::FragmentLoader::load); the loader
/// performs no retry or recovery, and never logs errors itself.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The target id does not resolve to an element.
    #[error("no element with id {0:?}")]
    MissingElement(String),

    /// The target element carries no usable `src` attribute.
    #[error("element {0:?} has no src attribute to fetch")]
    MissingSource(String),

    /// Transport-level failure; the request never completed.
    #[error("network error fetching {url}: {detail}")]
    Network { url: String, detail: String },

    /// The transport completed but the response indicates failure.
    #[error("http error fetching {url}: status {status}")]
    Http { url: String, status: u16 },

    /// A DOM write (markup injection, head append) failed.
    #[error("dom error: {0}")]
    Dom(String),
}
