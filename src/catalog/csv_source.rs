//! CSV-backed catalog source.
//!
//! Reads a catalog laid out with the same columns the template export writes.
//! Broken rows reject the whole file with a [`SdsError::DataSource`] naming the
//! line and the problem; nothing is silently dropped.

use super::record::REQUIRED_FIELDS;
use super::{Catalog, CatalogSource, ChemicalRecord};
use crate::error::{Result, SdsError};
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

/// Catalog source reading a CSV file from disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvSource {
    fn load_catalog(&self) -> Result<Catalog> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| SdsError::catalog_open(self.path.clone(), e))?;
        let records = parse_records(file)?;
        tracing::info!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(Catalog::new(records))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse and validate catalog rows from CSV data.
pub fn parse_records<R: Read>(input: R) -> Result<Vec<ChemicalRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_FIELDS {
        if !headers.iter().any(|h| h == column) {
            return Err(SdsError::data_source(
                1,
                format!("missing required column '{}'", column),
            ));
        }
    }

    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            SdsError::data_source(line, e.to_string())
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record: ChemicalRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| SdsError::data_source(line, e.to_string()))?;

        if let Some(column) = record.first_missing_field() {
            return Err(SdsError::data_source(
                line,
                format!("empty required field '{}'", column),
            ));
        }

        if !seen.insert((record.name.clone(), record.formula.clone())) {
            return Err(SdsError::data_source(
                line,
                format!("duplicate entry '{}'", record.title()),
            ));
        }

        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Nama,Rumus Kimia,Klasifikasi,Bahaya,Penyimpanan,Penanganan,Pertolongan Pertama,Kode Warna,GHS";

    fn parse(body: &str) -> Result<Vec<ChemicalRecord>> {
        parse_records(body.as_bytes())
    }

    fn line_of(err: SdsError) -> (u64, String) {
        match err {
            SdsError::DataSource { line, reason } => (line, reason),
            other => panic!("expected DataSource error, got {other:?}"),
        }
    }

    #[test]
    fn reads_full_rows() {
        let data = format!(
            "{HEADER}\nAseton,C₃H₆O,Mudah Terbakar,Iritasi mata,Jauh dari api,Sarung tangan,Udara segar,Biru,https://example.org/Hazard_F.png\n"
        );
        let records = parse(&data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Aseton");
        assert_eq!(records[0].color_code, "Biru");
        assert_eq!(records[0].pictogram_code(), Some("F"));
    }

    #[test]
    fn filled_template_without_presentation_columns_loads() {
        let data = "Nama,Rumus Kimia,Klasifikasi,Bahaya,Penyimpanan,Penanganan,Pertolongan Pertama\n\
                    Amonia,NH₃,\"Korosif, Beracun\",Iritasi,Wadah tertutup,Masker,Udara segar\n";
        let records = parse(data).unwrap();
        assert_eq!(records[0].classification, "Korosif, Beracun");
        assert!(records[0].color_code.is_empty());
        assert!(records[0].pictogram_url.is_empty());
    }

    #[test]
    fn missing_column_is_rejected() {
        let data = "Nama,Rumus Kimia\nAseton,C₃H₆O\n";
        let (line, reason) = line_of(parse(data).unwrap_err());
        assert_eq!(line, 1);
        assert!(reason.contains("Klasifikasi"), "{reason}");
    }

    #[test]
    fn empty_required_field_is_rejected_with_line() {
        let data = format!(
            "{HEADER}\nAseton,C₃H₆O,Mudah Terbakar,Iritasi,Rak,Sarung tangan,Udara segar,Biru,\nEtanol,C₂H₅OH,Mudah Terbakar,Iritasi,,Sarung tangan,Udara segar,Biru,\n"
        );
        let (line, reason) = line_of(parse(&data).unwrap_err());
        assert_eq!(line, 3);
        assert!(reason.contains("Penyimpanan"), "{reason}");
    }

    #[test]
    fn short_row_is_rejected() {
        let data = format!("{HEADER}\nAseton,C₃H₆O\n");
        let (line, _) = line_of(parse(&data).unwrap_err());
        assert_eq!(line, 2);
    }

    #[test]
    fn delimiter_only_row_is_rejected() {
        let data = format!(
            "{HEADER}\n,,,,,,,,\nAseton,C₃H₆O,Mudah Terbakar,Iritasi,Rak,Sarung tangan,Udara segar,Biru,\n"
        );
        let (line, reason) = line_of(parse(&data).unwrap_err());
        assert_eq!(line, 2);
        assert!(reason.contains("Nama"), "{reason}");
    }

    #[test]
    fn duplicate_entry_is_rejected() {
        let row = "Aseton,C₃H₆O,Mudah Terbakar,Iritasi,Rak,Sarung tangan,Udara segar,Biru,";
        let data = format!("{HEADER}\n{row}\n{row}\n");
        let (line, reason) = line_of(parse(&data).unwrap_err());
        assert_eq!(line, 3);
        assert!(reason.contains("duplicate"), "{reason}");
    }

    #[test]
    fn missing_file_reports_path() {
        let source = CsvSource::new("/nonexistent/catalog.csv");
        match source.load_catalog() {
            Err(SdsError::CatalogOpen { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/catalog.csv"))
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
