//! Chemical record type.

use serde::Deserialize;

/// Number of columns in a catalog row.
pub const FIELD_COUNT: usize = 9;

/// Catalog column names, in display and file order.
///
/// The last two columns are presentation data (color and pictogram) and are
/// left out of the blank template.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "Nama",
    "Rumus Kimia",
    "Klasifikasi",
    "Bahaya",
    "Penyimpanan",
    "Penanganan",
    "Pertolongan Pertama",
    "Kode Warna",
    "GHS",
];

/// Columns that must be present and non-empty in every row.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "Nama",
    "Rumus Kimia",
    "Klasifikasi",
    "Bahaya",
    "Penyimpanan",
    "Penanganan",
    "Pertolongan Pertama",
];

/// A single substance with its safety data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChemicalRecord {
    /// Common name, may include chemical notation.
    #[serde(rename = "Nama")]
    pub name: String,
    /// Chemical formula.
    #[serde(rename = "Rumus Kimia")]
    pub formula: String,
    /// Comma-separated hazard classes.
    #[serde(rename = "Klasifikasi")]
    pub classification: String,
    /// Primary hazards.
    #[serde(rename = "Bahaya")]
    pub hazard_description: String,
    /// Storage guidance.
    #[serde(rename = "Penyimpanan")]
    pub storage: String,
    /// Safe-handling guidance.
    #[serde(rename = "Penanganan")]
    pub handling: String,
    /// First-aid guidance.
    #[serde(rename = "Pertolongan Pertama")]
    pub first_aid: String,
    /// Color signal (Merah, Biru, Hijau).
    #[serde(rename = "Kode Warna", default)]
    pub color_code: String,
    /// GHS pictogram image URL.
    #[serde(rename = "GHS", default)]
    pub pictogram_url: String,
}

impl ChemicalRecord {
    /// Display title, `Name (Formula)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.formula)
    }

    /// Value of a column by name.
    pub fn field(&self, column: &str) -> Option<&str> {
        let value = match column {
            "Nama" => &self.name,
            "Rumus Kimia" => &self.formula,
            "Klasifikasi" => &self.classification,
            "Bahaya" => &self.hazard_description,
            "Penyimpanan" => &self.storage,
            "Penanganan" => &self.handling,
            "Pertolongan Pertama" => &self.first_aid,
            "Kode Warna" => &self.color_code,
            "GHS" => &self.pictogram_url,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// First required column that is blank, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|column| self.field(column).map_or(true, |v| v.trim().is_empty()))
    }

    /// Classification split into trimmed tags.
    pub fn hazard_classes(&self) -> Vec<&str> {
        self.classification
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// GHS pictogram code taken from the image file name
    /// (`.../Hazard_C.png` gives `C`).
    pub fn pictogram_code(&self) -> Option<&str> {
        let file = self.pictogram_url.rsplit('/').next()?;
        let stem = file.split('.').next()?;
        stem.strip_prefix("Hazard_").filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methanol() -> ChemicalRecord {
        ChemicalRecord {
            name: "Metanol (CH₃OH)".to_string(),
            formula: "CH₃OH".to_string(),
            classification: "Mudah Terbakar, Beracun".to_string(),
            hazard_description: "Iritasi".to_string(),
            storage: "Area berventilasi".to_string(),
            handling: "Masker respirator".to_string(),
            first_aid: "Udara segar".to_string(),
            color_code: "Biru".to_string(),
            pictogram_url: "https://www.osha.gov/sites/default/files/ghspictograms/Hazard_F.png"
                .to_string(),
        }
    }

    #[test]
    fn title_joins_name_and_formula() {
        assert_eq!(methanol().title(), "Metanol (CH₃OH) (CH₃OH)");
    }

    #[test]
    fn every_column_resolves() {
        let record = methanol();
        for column in FIELD_NAMES {
            assert!(record.field(column).is_some(), "missing {column}");
        }
        assert_eq!(record.field("Unknown"), None);
    }

    #[test]
    fn hazard_classes_are_trimmed() {
        assert_eq!(methanol().hazard_classes(), vec!["Mudah Terbakar", "Beracun"]);
    }

    #[test]
    fn pictogram_code_from_url() {
        assert_eq!(methanol().pictogram_code(), Some("F"));

        let mut record = methanol();
        record.pictogram_url = String::new();
        assert_eq!(record.pictogram_code(), None);
    }

    #[test]
    fn blank_required_field_is_reported() {
        let mut record = methanol();
        assert_eq!(record.first_missing_field(), None);

        record.storage = "  ".to_string();
        assert_eq!(record.first_missing_field(), Some("Penyimpanan"));

        // Presentation columns are optional.
        record.storage = "Rak".to_string();
        record.color_code.clear();
        record.pictogram_url.clear();
        assert_eq!(record.first_missing_field(), None);
    }
}
