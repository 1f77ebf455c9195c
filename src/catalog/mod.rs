//! Chemical catalog loading and representation.
//!
//! A [`Catalog`] is an immutable, ordered table of [`ChemicalRecord`]s. It is
//! produced by a [`CatalogSource`] and memoized by a [`CatalogCache`] owned by
//! the application, so the table is built once per process.

mod builtin;
mod csv_source;
mod record;

pub use builtin::BuiltinSource;
pub use csv_source::{parse_records, CsvSource};
pub use record::{ChemicalRecord, FIELD_COUNT, FIELD_NAMES, REQUIRED_FIELDS};

use crate::error::Result;
use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Immutable, ordered collection of chemical records.
///
/// Cloning is cheap and shares the underlying table.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ChemicalRecord]>,
}

impl Catalog {
    /// Create a catalog from records, keeping their order.
    pub fn new(records: Vec<ChemicalRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[ChemicalRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names of the catalog table, in order.
    pub fn field_names(&self) -> &'static [&'static str] {
        &FIELD_NAMES
    }

    /// Check whether two handles share the same in-memory table.
    pub fn ptr_eq(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

/// Something that can produce a catalog.
pub trait CatalogSource: fmt::Debug {
    /// Build the catalog. Malformed data is reported as
    /// [`SdsError::DataSource`](crate::error::SdsError::DataSource).
    fn load_catalog(&self) -> Result<Catalog>;

    /// Human-readable name of the source, for the status bar and logs.
    fn describe(&self) -> String;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load_catalog(&self) -> Result<Catalog> {
        (**self).load_catalog()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Memoizes the first successful load of a source.
#[derive(Debug)]
pub struct CatalogCache<S> {
    source: S,
    catalog: OnceCell<Catalog>,
}

impl<S: CatalogSource> CatalogCache<S> {
    /// Wrap a source. Nothing is loaded until [`get`](Self::get).
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Get the catalog, loading it on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn get(&self) -> Result<&Catalog> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let catalog = self.source.load_catalog()?;
        tracing::debug!(
            "Catalog built from {} ({} records)",
            self.source.describe(),
            catalog.len()
        );
        Ok(self.catalog.get_or_init(|| catalog))
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
