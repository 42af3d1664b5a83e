//! Lazy HTML-fragment loader with load-once caching.
//!
//! `FragmentLoader` owns the set of fragment ids that have already been
//! requested and drives the load pipeline: fetch the fragment body, inject it
//! into the target element, append the fragment's stylesheet/script to the
//! document head when declared, then hold for a settle delay so CSS
//! transitions can begin before the caller proceeds.
//!
//! The loader is generic over its page collaborators so the pipeline runs
//! unchanged against the real document (see `crate::web`) and against fakes
//! in native tests.

use std::cell::RefCell;
use std::future::Future;

use hashbrown::HashSet;

use crate::error::LoadError;

/// DOM surface consumed by the loader.
///
/// Mirrors what the pipeline actually touches: element presence, attribute
/// reads, inner-markup replacement, and head appends. Implementations use
/// interior mutability where needed; the loader only ever holds `&self`.
pub trait Dom {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Attribute value on the element with this id, if the element and the
    /// attribute both exist.
    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Replace the element's inner markup with `html`, verbatim.
    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), LoadError>;

    /// Append a `<link rel="stylesheet" href=...>` node to the document head.
    fn append_stylesheet(&self, href: &str) -> Result<(), LoadError>;

    /// Append a `<script type="text/javascript" src=...>` node to the
    /// document head.
    fn append_script(&self, src: &str) -> Result<(), LoadError>;
}

/// Network collaborator: GET a URL and return the response body as text.
#[allow(async_fn_in_trait)]
pub trait FetchText {
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError>;
}

/// Timer collaborator. The loader never cancels a scheduled sleep.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep_ms(&self, ms: u32);
}

/// Asset references read off the target element at call time. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDescriptor {
    /// URL of the fragment body. Required.
    pub src: String,
    /// Stylesheet URL; empty means none.
    pub css: String,
    /// Script URL; empty means none.
    pub js: String,
}

/// Loads each fragment at most once per instance.
///
/// One instance per page session. The loaded set only grows: an id is
/// reserved before its fetch is issued, a failed load stays reserved, and
/// nothing is ever unloaded.
pub struct FragmentLoader<D, F, T> {
    dom: D,
    fetch: F,
    timer: T,
    loaded: RefCell<HashSet<String>>,
}

impl<D: Dom, F: FetchText, T: Timer> FragmentLoader<D, F, T> {
    pub fn new(dom: D, fetch: F, timer: T) -> Self {
        Self {
            dom,
            fetch,
            timer,
            loaded: RefCell::new(HashSet::new()),
        }
    }

    /// Whether a load for this id has already been issued (not necessarily
    /// completed, and not necessarily successfully).
    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.borrow().contains(id)
    }

    /// Ensure the fragment behind `id` is fetched and injected, at most once.
    ///
    /// The de-duplication check and the reservation happen synchronously when
    /// `load` is *called*, before the returned future is first polled. Two
    /// back-to-back calls for the same id therefore issue exactly one fetch,
    /// and the second call's future resolves immediately — possibly before
    /// the first has injected anything. Callers that need the fragment
    /// populated must await the first call.
    ///
    /// On success the future resolves only after `settle_delay_ms` has
    /// elapsed past DOM injection; the delay applies even when it is 0. On
    /// failure the target markup is untouched and the id stays reserved, so
    /// a later call for the same id is a no-op success.
    pub fn load<'a>(
        &'a self,
        id: &str,
        settle_delay_ms: u32,
    ) -> impl Future<Output = Result<(), LoadError>> + 'a {
        let prepared = self.prepare(id);
        let id = id.to_owned();

        async move {
            let descriptor = match prepared? {
                Some(d) => d,
                // Already requested: idempotent no-op.
                None => return Ok(()),
            };

            let body = self.fetch.fetch_text(&descriptor.src).await?;
            self.dom.set_inner_html(&id, &body)?;

            if !descriptor.css.is_empty() {
                self.dom.append_stylesheet(&descriptor.css)?;
            }
            if !descriptor.js.is_empty() {
                self.dom.append_script(&descriptor.js)?;
            }

            self.timer.sleep_ms(settle_delay_ms).await;
            Ok(())
        }
    }

    /// Synchronous head of the pipeline: de-duplication, reservation, and
    /// descriptor derivation. `Ok(None)` means the id was already reserved.
    fn prepare(&self, id: &str) -> Result<Option<FragmentDescriptor>, LoadError> {
        {
            let mut loaded = self.loaded.borrow_mut();
            if loaded.contains(id) {
                tracing::debug!(id, "fragment already requested, skipping");
                return Ok(None);
            }
            // Reserve before the fetch is issued, not after it completes.
            loaded.insert(id.to_owned());
        }

        if !self.dom.contains(id) {
            return Err(LoadError::MissingElement(id.to_owned()));
        }

        let src = self.dom.attribute(id, "src").unwrap_or_default();
        if src.is_empty() {
            return Err(LoadError::MissingSource(id.to_owned()));
        }
        let css = self.dom.attribute(id, "css").unwrap_or_default();
        let js = self.dom.attribute(id, "js").unwrap_or_default();

        tracing::debug!(id, src = src.as_str(), "loading fragment");
        Ok(Some(FragmentDescriptor { src, css, js }))
    }
}
