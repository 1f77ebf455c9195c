//! The built-in substance table.

use super::{Catalog, CatalogSource, ChemicalRecord};
use crate::error::Result;

const PICTOGRAM_BASE: &str = "https://www.osha.gov/sites/default/files/ghspictograms";

/// Catalog source backed by the hardcoded table shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::new(builtin_records()))
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

fn record(fields: [&str; 8], pictogram: &str) -> ChemicalRecord {
    let [
        name,
        formula,
        classification,
        hazard_description,
        storage,
        handling,
        first_aid,
        color_code,
    ] = fields;
    ChemicalRecord {
        name: name.to_string(),
        formula: formula.to_string(),
        classification: classification.to_string(),
        hazard_description: hazard_description.to_string(),
        storage: storage.to_string(),
        handling: handling.to_string(),
        first_aid: first_aid.to_string(),
        color_code: color_code.to_string(),
        pictogram_url: format!("{}/{}", PICTOGRAM_BASE, pictogram),
    }
}

fn builtin_records() -> Vec<ChemicalRecord> {
    vec![
        record(
            [
                "Asam Sulfat (H₂SO₄)",
                "H₂SO₄",
                "Korosif, Oksidator",
                "Luka bakar kulit/gaung, iritasi pernapasan",
                "Wadah kaca/polietilen, jauh dari logam & basa",
                "Sarung tangan nitril, apron, kacamata",
                "Bilas dengan air 15 menit, bawa ke dokter",
                "Merah",
            ],
            "Hazard_C.png",
        ),
        record(
            [
                "Natrium Hidroksida (NaOH)",
                "NaOH",
                "Korosif",
                "Luka bakar kulit, kerusakan mata permanen",
                "Wadah plastik, tempat kering",
                "Sarung tangan tahan bahan kimia, pelindung wajah",
                "Bilas kulit/mata, netralkan asam",
                "Merah",
            ],
            "Hazard_C.png",
        ),
        record(
            [
                "Metanol (CH₃OH)",
                "CH₃OH",
                "Mudah Terbakar, Beracun",
                "Iritasi, kerusakan saraf optik",
                "Area berventilasi, jauh dari api",
                "Masker respirator, ventilasi memadai",
                "Udara segar, pencucian kulit",
                "Biru",
            ],
            "Hazard_F.png",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_complete() {
        let catalog = BuiltinSource.load_catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        for record in catalog.records() {
            assert_eq!(record.first_missing_field(), None, "{}", record.name);
            assert!(record.pictogram_code().is_some());
        }
    }

    #[test]
    fn builtin_order_is_stable() {
        let catalog = BuiltinSource.load_catalog().unwrap();
        let formulas: Vec<&str> = catalog.records().iter().map(|r| r.formula.as_str()).collect();
        assert_eq!(formulas, vec!["H₂SO₄", "NaOH", "CH₃OH"]);
    }
}
