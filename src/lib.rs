//! Small client-side page utilities: a lazy HTML-fragment loader with
//! load-once caching and asset injection, a one-way field observer, and the
//! login-page controller built on top of them.
//!
//! The loader core is portable and tested natively; the real browser bindings
//! live behind `--features web` (and a wasm32 target) so native builds never
//! require a wasm toolchain.

pub mod error;
pub mod loader;
pub mod observe;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use error::LoadError;
pub use loader::{Dom, FetchText, FragmentDescriptor, FragmentLoader, Timer};
pub use observe::Observed;
