//! sdsview - A terminal-based chemical Safety Data Sheet browser.
//!
//! sdsview provides an interactive terminal interface for looking up the safety
//! data of a small chemical catalog: search by name or formula, narrow by
//! hazard class, and read storage, handling and first-aid guidance.
//!
//! # Features
//!
//! - Built-in catalog, or a CSV catalog with the template columns
//! - Case-insensitive search over name and formula
//! - Hazard class multi-select
//! - Danger / warning / safe styling of the primary hazard
//! - Blank CSV template export
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use sdsview::catalog::{BuiltinSource, CatalogCache};
//! use sdsview::query::Query;
//!
//! let cache = CatalogCache::new(BuiltinSource);
//! let catalog = cache.get()?;
//!
//! let view = Query::new("asam", Vec::<String>::new()).apply(catalog.records());
//! assert_eq!(view.len(), 1);
//! # Ok::<(), sdsview::SdsError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod navigation;
pub mod presentation;
pub mod query;
pub mod template;
pub mod ui;
pub mod util;

pub use error::{Result, SdsError};
