//! Blank SDS template export.

use crate::catalog::Catalog;
use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name offered for the exported template.
pub const TEMPLATE_FILE_NAME: &str = "sds_template.csv";

/// MIME type of the exported template.
pub const TEMPLATE_MIME: &str = "text/csv";

/// Trailing presentation columns left out of the template.
const EXCLUDED_TRAILING_COLUMNS: usize = 2;

/// Template columns: the catalog columns without the color code and pictogram.
pub fn template_schema(catalog: &Catalog) -> Vec<&'static str> {
    let fields = catalog.field_names();
    let keep = fields.len().saturating_sub(EXCLUDED_TRAILING_COLUMNS);
    fields[..keep].to_vec()
}

/// Write a header-only CSV with the given columns.
pub fn write_template<W: Write>(writer: W, schema: &[&str]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(schema)?;
    csv.flush()?;
    Ok(())
}

/// Render the template to bytes.
pub fn template_bytes(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_template(&mut buf, &template_schema(catalog))?;
    Ok(buf)
}

/// Write the template as [`TEMPLATE_FILE_NAME`] inside `dir`.
pub fn export_template(catalog: &Catalog, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(TEMPLATE_FILE_NAME);
    std::fs::write(&path, template_bytes(catalog)?)?;
    tracing::info!("Template written to {}", path.display());
    Ok(path)
}
